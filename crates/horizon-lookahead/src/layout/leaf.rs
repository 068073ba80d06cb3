//! Labelled leaf blocks.

use crate::geometry::{Constraints, Offset, Rect, Size};

use super::node::{LayoutContext, LayoutNode};

/// A labelled rectangle that records itself as a [`Placement`](super::Placement)
/// when placed during the placement pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    label: String,
    preferred: Option<Size>,
    size: Size,
}

impl Block {
    /// A block that fills the bounded space it is given.
    pub fn fill(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            preferred: None,
            size: Size::ZERO,
        }
    }

    /// A block that prefers `width` by `height`.
    pub fn sized(label: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            label: label.into(),
            preferred: Some(Size::new(width, height)),
            size: Size::ZERO,
        }
    }

    /// The block's label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl LayoutNode for Block {
    fn measure(&mut self, _cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        let wanted = self.preferred.unwrap_or_else(|| {
            let width = if constraints.has_bounded_width() {
                constraints.max_width()
            } else {
                constraints.min_width()
            };
            let height = if constraints.has_bounded_height() {
                constraints.max_height()
            } else {
                constraints.min_height()
            };
            Size::new(width, height)
        });
        self.size = constraints.constrain(wanted);
        self.size
    }

    fn place(&mut self, cx: &mut LayoutContext<'_>, position: Offset) {
        cx.record(&self.label, Rect::new(position, self.size));
    }
}
