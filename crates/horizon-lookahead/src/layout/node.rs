//! The layout node trait and the context threaded through both passes.

use slotmap::SecondaryMap;

use crate::geometry::{Constraints, Offset, Rect, Size};
use crate::transition::{ChildId, SharedElement};

use horizon_lookahead_core::logging::targets;

/// Which of the two layout passes is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPass {
    /// Measures and places the tree in its eventual configuration. Shared
    /// elements publish their targets during this pass.
    Lookahead,
    /// Measures and places the tree at the current animated geometry.
    Placement,
}

/// A drawn leaf recorded during the placement pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The leaf's label.
    pub label: String,
    /// Where the leaf was drawn, in container coordinates.
    pub rect: Rect,
}

/// State shared by every node during one layout pass.
pub struct LayoutContext<'a> {
    pass: LayoutPass,
    elements: &'a mut SecondaryMap<ChildId, SharedElement>,
    placements: &'a mut Vec<Placement>,
}

impl<'a> LayoutContext<'a> {
    /// Create a context for one pass over a tree whose shared elements live
    /// in `elements`.
    pub fn new(
        pass: LayoutPass,
        elements: &'a mut SecondaryMap<ChildId, SharedElement>,
        placements: &'a mut Vec<Placement>,
    ) -> Self {
        Self {
            pass,
            elements,
            placements,
        }
    }

    /// The pass being run.
    #[inline]
    pub fn pass(&self) -> LayoutPass {
        self.pass
    }

    /// Whether this is the lookahead pass.
    #[inline]
    pub fn is_lookahead(&self) -> bool {
        self.pass == LayoutPass::Lookahead
    }

    /// Record a drawn leaf. Ignored outside the placement pass.
    pub fn record(&mut self, label: &str, rect: Rect) {
        if self.pass == LayoutPass::Placement {
            self.placements.push(Placement {
                label: label.to_owned(),
                rect,
            });
        }
    }

    /// Run `f` with the shared element `id` temporarily taken out of the
    /// store, so it can lay itself out against this same context.
    fn with_element<R>(
        &mut self,
        id: ChildId,
        f: impl FnOnce(&mut SharedElement, &mut LayoutContext<'_>) -> R,
    ) -> Option<R> {
        let mut element = self.elements.remove(id)?;
        let result = f(&mut element, self);
        self.elements.insert(id, element);
        Some(result)
    }
}

/// A node in a layout tree.
///
/// Each pass calls [`measure`](Self::measure) once and then
/// [`place`](Self::place) once on every node; nodes keep whatever they
/// learned while measuring for use when placing.
pub trait LayoutNode: Send {
    /// Pick a size within `constraints`.
    fn measure(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size;

    /// Place the node with its top-left corner at `position`, in container
    /// coordinates.
    fn place(&mut self, cx: &mut LayoutContext<'_>, position: Offset);
}

impl LayoutNode for Box<dyn LayoutNode> {
    fn measure(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        (**self).measure(cx, constraints)
    }

    fn place(&mut self, cx: &mut LayoutContext<'_>, position: Offset) {
        (**self).place(cx, position)
    }
}

/// Reference to a shared element owned by the transition scope.
///
/// The element itself persists across tree rebuilds; slots are cheap and are
/// expected to be recreated whenever the tree's structure changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSlot {
    id: ChildId,
}

/// Create a slot for the shared element `id`.
pub fn element(id: ChildId) -> ElementSlot {
    ElementSlot { id }
}

impl ElementSlot {
    /// The referenced element.
    #[inline]
    pub fn id(&self) -> ChildId {
        self.id
    }
}

impl LayoutNode for ElementSlot {
    fn measure(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        match cx.with_element(self.id, |element, cx| element.measure(cx, constraints)) {
            Some(size) => size,
            None => {
                tracing::trace!(target: targets::LAYOUT, id = ?self.id, "slot refers to a detached element");
                constraints.min_size()
            }
        }
    }

    fn place(&mut self, cx: &mut LayoutContext<'_>, position: Offset) {
        // Detached elements were already reported while measuring.
        let _ = cx.with_element(self.id, |element, cx| element.place(cx, position));
    }
}
