//! Integer geometry types used by layout and transitions.
//!
//! Layout works in whole pixels, so offsets and sizes are integers.
//! Interpolated values are rounded back onto the pixel grid.

use std::ops::{Add, Neg, Sub};

/// A position in 2D space, relative to the transition container's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    /// Create a new offset.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };
}

impl Add for Offset {
    type Output = Offset;

    #[inline]
    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Offset {
    type Output = Offset;

    #[inline]
    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Offset {
    type Output = Offset;

    #[inline]
    fn neg(self) -> Offset {
        Offset::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Offset {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub origin: Offset,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(origin: Offset, size: Size) -> Self {
        Self { origin, size }
    }

    /// Create a rectangle from its components.
    #[inline]
    pub const fn from_xywh(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: Offset { x, y },
            size: Size { width, height },
        }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Offset::ZERO,
        size: Size::ZERO,
    };

    /// Left edge.
    #[inline]
    pub fn left(&self) -> i32 {
        self.origin.x
    }

    /// Top edge.
    #[inline]
    pub fn top(&self) -> i32 {
        self.origin.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> i32 {
        self.origin.x.saturating_add_unsigned(self.size.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.origin.y.saturating_add_unsigned(self.size.height)
    }

    /// Check whether a point lies inside the rectangle.
    pub fn contains(&self, point: Offset) -> bool {
        point.x >= self.left() && point.x < self.right() && point.y >= self.top() && point.y < self.bottom()
    }
}

/// Measurement constraints handed from a parent to a child.
///
/// A child must pick a size with `min_width <= width <= max_width` and
/// `min_height <= height <= max_height`. [`Constraints::INFINITE`] marks an
/// unbounded maximum. Every constructor keeps each minimum at or below its
/// maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraints {
    min_width: u32,
    max_width: u32,
    min_height: u32,
    max_height: u32,
}

impl Constraints {
    /// Marker for an unbounded maximum.
    pub const INFINITE: u32 = u32::MAX;

    /// Create constraints, clamping each minimum to its maximum.
    pub fn new(min_width: u32, max_width: u32, min_height: u32, max_height: u32) -> Self {
        Self {
            min_width: min_width.min(max_width),
            max_width,
            min_height: min_height.min(max_height),
            max_height,
        }
    }

    /// Constraints that only admit exactly `size`.
    pub fn fixed(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Constraints that admit anything from zero up to `size`.
    pub fn loose(size: Size) -> Self {
        Self::new(0, size.width, 0, size.height)
    }

    /// Constraints with no bounds at all.
    pub fn unbounded() -> Self {
        Self::new(0, Self::INFINITE, 0, Self::INFINITE)
    }

    /// Smallest admissible width.
    #[inline]
    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    /// Largest admissible width.
    #[inline]
    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    /// Smallest admissible height.
    #[inline]
    pub fn min_height(&self) -> u32 {
        self.min_height
    }

    /// Largest admissible height.
    #[inline]
    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Whether the maximum width is bounded.
    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width != Self::INFINITE
    }

    /// Whether the maximum height is bounded.
    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height != Self::INFINITE
    }

    /// The smallest admissible size.
    #[inline]
    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    /// Clamp a size into these constraints.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// Drop the minimums, keeping the maximums.
    pub fn loosen(&self) -> Self {
        Self::new(0, self.max_width, 0, self.max_height)
    }

    /// Shrink the constraints by `horizontal` and `vertical` pixels in total.
    pub fn deflate(&self, horizontal: u32, vertical: u32) -> Self {
        let shrink = |value: u32, by: u32| {
            if value == Self::INFINITE {
                value
            } else {
                value.saturating_sub(by)
            }
        };
        Self::new(
            self.min_width.saturating_sub(horizontal),
            shrink(self.max_width, horizontal),
            self.min_height.saturating_sub(vertical),
            shrink(self.max_height, vertical),
        )
    }

    /// Pin the width to `width`, clamped into the current range.
    pub fn with_fixed_width(&self, width: u32) -> Self {
        let width = width.clamp(self.min_width, self.max_width);
        Self::new(width, width, self.min_height, self.max_height)
    }

    /// Pin the height to `height`, clamped into the current range.
    pub fn with_fixed_height(&self, height: u32) -> Self {
        let height = height.clamp(self.min_height, self.max_height);
        Self::new(self.min_width, self.max_width, height, height)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}
