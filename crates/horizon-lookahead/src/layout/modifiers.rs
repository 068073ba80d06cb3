//! Single-child wrappers that size, pad, shift or center their child, plus an
//! overlay that stacks several children at one position.

use crate::geometry::{Constraints, Offset, Size};

use super::node::{LayoutContext, LayoutNode};

/// How a [`SizedBox`] picks one of its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dimension {
    /// Take whatever the child wants.
    #[default]
    Wrap,
    /// Exactly this many pixels, clamped into the incoming constraints.
    Fixed(u32),
    /// The full bounded extent; behaves like `Wrap` when unbounded.
    Fill,
}

/// Forces its child to a fixed or filling size.
pub struct SizedBox {
    width: Dimension,
    height: Dimension,
    child: Option<Box<dyn LayoutNode>>,
}

impl SizedBox {
    /// Create an empty box.
    pub fn new(width: Dimension, height: Dimension) -> Self {
        Self {
            width,
            height,
            child: None,
        }
    }

    /// A box of exactly `width` by `height`.
    pub fn fixed(width: u32, height: u32) -> Self {
        Self::new(Dimension::Fixed(width), Dimension::Fixed(height))
    }

    /// A box filling the available width with a fixed `height`.
    pub fn fill_width(height: u32) -> Self {
        Self::new(Dimension::Fill, Dimension::Fixed(height))
    }

    /// A box filling all available space.
    pub fn fill() -> Self {
        Self::new(Dimension::Fill, Dimension::Fill)
    }

    /// Set the child.
    pub fn with_child(mut self, child: impl LayoutNode + 'static) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    fn tighten(&self, constraints: Constraints) -> Constraints {
        let constraints = match self.width {
            Dimension::Fixed(width) => constraints.with_fixed_width(width),
            Dimension::Fill if constraints.has_bounded_width() => {
                constraints.with_fixed_width(constraints.max_width())
            }
            _ => constraints,
        };
        match self.height {
            Dimension::Fixed(height) => constraints.with_fixed_height(height),
            Dimension::Fill if constraints.has_bounded_height() => {
                constraints.with_fixed_height(constraints.max_height())
            }
            _ => constraints,
        }
    }
}

impl LayoutNode for SizedBox {
    fn measure(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        let inner = self.tighten(constraints);
        match self.child.as_mut() {
            Some(child) => inner.constrain(child.measure(cx, inner)),
            None => inner.min_size(),
        }
    }

    fn place(&mut self, cx: &mut LayoutContext<'_>, position: Offset) {
        if let Some(child) = self.child.as_mut() {
            child.place(cx, position);
        }
    }
}

/// Space around a child, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    /// Left inset.
    pub left: u32,
    /// Top inset.
    pub top: u32,
    /// Right inset.
    pub right: u32,
    /// Bottom inset.
    pub bottom: u32,
}

impl Insets {
    /// Create insets with individual values.
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same inset on all four sides.
    pub const fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Symmetric horizontal and vertical insets.
    pub const fn symmetric(horizontal: u32, vertical: u32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Combined left and right inset.
    #[inline]
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Combined top and bottom inset.
    #[inline]
    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Insets its child.
pub struct Padding {
    insets: Insets,
    child: Box<dyn LayoutNode>,
}

impl Padding {
    /// Wrap `child` with `insets`.
    pub fn new(insets: Insets, child: impl LayoutNode + 'static) -> Self {
        Self {
            insets,
            child: Box::new(child),
        }
    }
}

impl LayoutNode for Padding {
    fn measure(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        let (horizontal, vertical) = (self.insets.horizontal(), self.insets.vertical());
        let inner = self.child.measure(cx, constraints.deflate(horizontal, vertical));
        constraints.constrain(Size::new(
            inner.width.saturating_add(horizontal),
            inner.height.saturating_add(vertical),
        ))
    }

    fn place(&mut self, cx: &mut LayoutContext<'_>, position: Offset) {
        let inset = Offset::new(self.insets.left as i32, self.insets.top as i32);
        self.child.place(cx, position + inset);
    }
}

/// Shifts its child without affecting its size or the layout around it.
pub struct Translate {
    offset: Offset,
    child: Box<dyn LayoutNode>,
}

impl Translate {
    /// Shift `child` by `offset`.
    pub fn new(offset: Offset, child: impl LayoutNode + 'static) -> Self {
        Self {
            offset,
            child: Box::new(child),
        }
    }
}

impl LayoutNode for Translate {
    fn measure(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        self.child.measure(cx, constraints)
    }

    fn place(&mut self, cx: &mut LayoutContext<'_>, position: Offset) {
        self.child.place(cx, position + self.offset);
    }
}

/// Takes the full bounded space and centers its child in it.
pub struct Center {
    child: Box<dyn LayoutNode>,
    size: Size,
    child_size: Size,
}

impl Center {
    /// Center `child`.
    pub fn new(child: impl LayoutNode + 'static) -> Self {
        Self {
            child: Box::new(child),
            size: Size::ZERO,
            child_size: Size::ZERO,
        }
    }
}

impl LayoutNode for Center {
    fn measure(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        self.child_size = self.child.measure(cx, constraints.loosen());
        let width = if constraints.has_bounded_width() {
            constraints.max_width()
        } else {
            self.child_size.width
        };
        let height = if constraints.has_bounded_height() {
            constraints.max_height()
        } else {
            self.child_size.height
        };
        self.size = constraints.constrain(Size::new(width, height));
        self.size
    }

    fn place(&mut self, cx: &mut LayoutContext<'_>, position: Offset) {
        let dx = self.size.width.saturating_sub(self.child_size.width) / 2;
        let dy = self.size.height.saturating_sub(self.child_size.height) / 2;
        self.child.place(cx, position + Offset::new(dx as i32, dy as i32));
    }
}

/// Stacks its children on top of each other at the same position.
///
/// Later children are recorded after earlier ones, so a host drawing the
/// placements in order paints them on top.
#[derive(Default)]
pub struct Overlay {
    children: Vec<Box<dyn LayoutNode>>,
}

impl Overlay {
    /// Create an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer.
    pub fn with_child(mut self, child: impl LayoutNode + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl LayoutNode for Overlay {
    fn measure(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        let size = self.children.iter_mut().fold(Size::ZERO, |acc, child| {
            let size = child.measure(cx, constraints);
            Size::new(acc.width.max(size.width), acc.height.max(size.height))
        });
        constraints.constrain(size)
    }

    fn place(&mut self, cx: &mut LayoutContext<'_>, position: Offset) {
        for child in &mut self.children {
            child.place(cx, position);
        }
    }
}
