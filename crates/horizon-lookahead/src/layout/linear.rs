//! Linear layout for arranging children in a row or column.
//!
//! `Linear` places children one after another along its main axis. Children
//! without a weight take their measured size; weighted children share what is
//! left of a bounded main axis in proportion to their weights.
//!
//! # Example
//!
//! ```
//! use horizon_lookahead::layout::{Block, Linear};
//!
//! // Two equally wide columns side by side
//! let row = Linear::row()
//!     .with_weighted_child(Linear::column().with_child(Block::sized("a", 200, 80)), 1.0)
//!     .with_weighted_child(Linear::column().with_child(Block::sized("b", 200, 80)), 1.0);
//! # let _ = row;
//! ```

use crate::geometry::{Constraints, Offset, Size};

use super::node::{LayoutContext, LayoutNode};

/// Layout orientation for linear layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Children are arranged left to right.
    Horizontal,
    /// Children are arranged top to bottom.
    #[default]
    Vertical,
}

impl Orientation {
    /// Get the cross (perpendicular) orientation.
    #[inline]
    pub fn cross(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Alignment of children on the cross axis.
///
/// For rows this affects vertical positioning, for columns horizontal
/// positioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Align children at the start (left/top).
    #[default]
    Start,
    /// Center children.
    Center,
    /// Align children at the end (right/bottom).
    End,
    /// Stretch children to the full bounded cross extent.
    Stretch,
}

struct LinearChild {
    node: Box<dyn LayoutNode>,
    weight: Option<f32>,
    size: Size,
}

/// A layout that arranges its children horizontally or vertically.
pub struct Linear {
    orientation: Orientation,
    alignment: Alignment,
    spacing: u32,
    children: Vec<LinearChild>,
    size: Size,
}

impl Linear {
    /// Create a linear layout with the specified orientation.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            alignment: Alignment::default(),
            spacing: 0,
            children: Vec::new(),
            size: Size::ZERO,
        }
    }

    /// A top-to-bottom layout.
    pub fn column() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// A left-to-right layout.
    pub fn row() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Set the cross-axis alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the gap between adjacent children.
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Append a child that takes its measured size.
    pub fn with_child(mut self, child: impl LayoutNode + 'static) -> Self {
        self.push(Box::new(child), None);
        self
    }

    /// Append a child that takes a `weight` share of the remaining space.
    ///
    /// Non-positive weights are treated as unweighted.
    pub fn with_weighted_child(mut self, child: impl LayoutNode + 'static, weight: f32) -> Self {
        self.push(Box::new(child), (weight > 0.0).then_some(weight));
        self
    }

    /// Append an already boxed child.
    pub fn push(&mut self, node: Box<dyn LayoutNode>, weight: Option<f32>) {
        self.children.push(LinearChild {
            node,
            weight,
            size: Size::ZERO,
        });
    }

    /// Get the layout orientation.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of children.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the layout has no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn main_axis(&self, size: Size) -> u32 {
        match self.orientation {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    fn cross_axis(&self, size: Size) -> u32 {
        match self.orientation {
            Orientation::Horizontal => size.height,
            Orientation::Vertical => size.width,
        }
    }

    fn make_size(&self, main: u32, cross: u32) -> Size {
        match self.orientation {
            Orientation::Horizontal => Size::new(main, cross),
            Orientation::Vertical => Size::new(cross, main),
        }
    }

    /// Constraints (min, max) along the main and cross axes.
    fn split(&self, constraints: Constraints) -> ((u32, u32), (u32, u32)) {
        let width = (constraints.min_width(), constraints.max_width());
        let height = (constraints.min_height(), constraints.max_height());
        match self.orientation {
            Orientation::Horizontal => (width, height),
            Orientation::Vertical => (height, width),
        }
    }

    fn make_constraints(&self, main: (u32, u32), cross: (u32, u32)) -> Constraints {
        match self.orientation {
            Orientation::Horizontal => Constraints::new(main.0, main.1, cross.0, cross.1),
            Orientation::Vertical => Constraints::new(cross.0, cross.1, main.0, main.1),
        }
    }

    fn make_offset(&self, main: u32, cross: u32) -> Offset {
        let (main, cross) = (main as i32, cross as i32);
        match self.orientation {
            Orientation::Horizontal => Offset::new(main, cross),
            Orientation::Vertical => Offset::new(cross, main),
        }
    }
}

impl LayoutNode for Linear {
    fn measure(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        let ((main_min, main_max), (_, cross_max)) = self.split(constraints);
        let bounded = main_max != Constraints::INFINITE;
        let gaps = self.spacing.saturating_mul(self.children.len().saturating_sub(1) as u32);

        let child_cross = match self.alignment {
            Alignment::Stretch if cross_max != Constraints::INFINITE => (cross_max, cross_max),
            _ => (0, cross_max),
        };

        // Unweighted children first, each in whatever main space is left.
        let mut used = gaps;
        let mut total_weight = 0.0_f32;
        for index in 0..self.children.len() {
            if let (Some(weight), true) = (self.children[index].weight, bounded) {
                total_weight += weight;
                continue;
            }
            let remaining = if bounded {
                main_max.saturating_sub(used)
            } else {
                Constraints::INFINITE
            };
            let child_constraints = self.make_constraints((0, remaining), child_cross);
            let size = self.children[index].node.measure(cx, child_constraints);
            used = used.saturating_add(self.main_axis(size));
            self.children[index].size = size;
        }

        // Weighted children split the rest; the last one takes the remainder.
        if total_weight > 0.0 {
            let space = main_max.saturating_sub(used);
            let weighted = self.children.iter().filter(|c| c.weight.is_some()).count();
            let mut handed_out = 0;
            let mut seen = 0;
            for index in 0..self.children.len() {
                let Some(weight) = self.children[index].weight else {
                    continue;
                };
                seen += 1;
                let share = if seen == weighted {
                    space - handed_out
                } else {
                    ((space as f32) * weight / total_weight).floor() as u32
                };
                handed_out += share;
                let child_constraints = self.make_constraints((share, share), child_cross);
                let size = self.children[index].node.measure(cx, child_constraints);
                used = used.saturating_add(self.main_axis(size));
                self.children[index].size = size;
            }
        }

        let cross = self
            .children
            .iter()
            .map(|child| self.cross_axis(child.size))
            .max()
            .unwrap_or(0);
        let main = if total_weight > 0.0 { main_max } else { used.max(main_min) };

        self.size = constraints.constrain(self.make_size(main, cross));
        self.size
    }

    fn place(&mut self, cx: &mut LayoutContext<'_>, position: Offset) {
        let cross_extent = self.cross_axis(self.size);
        let mut cursor = 0_u32;
        for index in 0..self.children.len() {
            let size = self.children[index].size;
            let free = cross_extent.saturating_sub(self.cross_axis(size));
            let cross = match self.alignment {
                Alignment::Start | Alignment::Stretch => 0,
                Alignment::Center => free / 2,
                Alignment::End => free,
            };
            let at = position + self.make_offset(cursor, cross);
            self.children[index].node.place(cx, at);
            cursor = cursor
                .saturating_add(self.main_axis(size))
                .saturating_add(self.spacing);
        }
    }
}
