//! The two-pass transition container.

use tokio::runtime::Handle;

use horizon_lookahead_core::PerfSpan;
use horizon_lookahead_core::Result;
use horizon_lookahead_core::logging::{span_names, targets};

use crate::config::TransitionConfig;
use crate::geometry::{Constraints, Offset, Size};
use crate::layout::{LayoutContext, LayoutNode, LayoutPass, Placement};

use super::scope::TransitionScope;

/// What the lookahead pass learned about the container's children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookaheadResult {
    /// The container size: the largest child extent, coerced into the
    /// constraints.
    pub size: Size,
    /// Each child's lookahead measurement, in child order.
    pub child_sizes: Vec<Size>,
}

/// Lays out its children twice per frame so shared elements can animate
/// toward where the layout wants them.
///
/// 1. [`lookahead_pass`](Self::lookahead_pass) measures and places every
///    child in its eventual configuration. Shared elements publish their
///    targets here.
/// 2. [`placement_pass`](Self::placement_pass) measures and places the
///    children again; shared elements use their current animated geometry.
///
/// All children are stacked at the container's origin.
///
/// # Example
///
/// ```
/// use horizon_lookahead::geometry::{Constraints, Size};
/// use horizon_lookahead::layout::{Block, Linear, SizedBox, element};
/// use horizon_lookahead::transition::TransitionContainer;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> horizon_lookahead_core::Result<()> {
/// let mut container = TransitionContainer::new()?;
/// let config = container.scope().element_config();
/// let id = container.scope_mut().shared_element(Block::fill("item"), config)?;
///
/// container.push_child(Linear::column().with_child(SizedBox::fixed(200, 80).with_child(element(id))));
/// let size = container.layout(Constraints::loose(Size::new(400, 800)));
/// assert_eq!(size, Size::new(200, 80));
/// # Ok(())
/// # }
/// ```
pub struct TransitionContainer {
    scope: TransitionScope,
    children: Vec<Box<dyn LayoutNode>>,
    placements: Vec<Placement>,
    size: Size,
}

impl TransitionContainer {
    /// Create a container whose transitions run on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`LookaheadError::RuntimeUnavailable`](horizon_lookahead_core::LookaheadError::RuntimeUnavailable)
    /// outside a runtime.
    pub fn new() -> Result<Self> {
        Ok(Self::from_scope(TransitionScope::new()?))
    }

    /// Create a container whose transitions run on `handle`.
    pub fn with_handle(handle: Handle) -> Self {
        Self::from_scope(TransitionScope::with_handle(handle))
    }

    fn from_scope(scope: TransitionScope) -> Self {
        Self {
            scope,
            children: Vec::new(),
            placements: Vec::new(),
            size: Size::ZERO,
        }
    }

    /// Use `config` as the defaults for shared elements created from now on.
    pub fn with_config(mut self, config: TransitionConfig) -> Self {
        self.scope.set_defaults(config);
        self
    }

    /// The scope owning this container's shared elements.
    #[inline]
    pub fn scope(&self) -> &TransitionScope {
        &self.scope
    }

    /// Mutable access to the scope, for creating and detaching elements.
    #[inline]
    pub fn scope_mut(&mut self) -> &mut TransitionScope {
        &mut self.scope
    }

    /// Replace the children. Shared elements referenced by the old tree keep
    /// running.
    pub fn set_children(&mut self, children: Vec<Box<dyn LayoutNode>>) {
        self.children = children;
    }

    /// Append a child.
    pub fn push_child(&mut self, child: impl LayoutNode + 'static) {
        self.children.push(Box::new(child));
    }

    /// Remove every child.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Run both passes and return the container size.
    pub fn layout(&mut self, constraints: Constraints) -> Size {
        let lookahead = self.lookahead_pass(constraints);
        self.placement_pass(constraints, &lookahead)
    }

    /// Measure and place every child in its eventual configuration,
    /// publishing shared element targets.
    pub fn lookahead_pass(&mut self, constraints: Constraints) -> LookaheadResult {
        let _perf = PerfSpan::new(span_names::LOOKAHEAD_PASS);
        let mut ignored = Vec::new();
        let mut cx = LayoutContext::new(LayoutPass::Lookahead, self.scope.elements_mut(), &mut ignored);

        let child_sizes: Vec<Size> = self
            .children
            .iter_mut()
            .map(|child| child.measure(&mut cx, constraints))
            .collect();
        let largest = child_sizes.iter().fold(Size::ZERO, |acc, size| {
            Size::new(acc.width.max(size.width), acc.height.max(size.height))
        });
        for child in &mut self.children {
            child.place(&mut cx, Offset::ZERO);
        }

        let size = constraints.constrain(largest);
        tracing::trace!(target: targets::LAYOUT, ?size, children = child_sizes.len(), "lookahead pass");
        LookaheadResult { size, child_sizes }
    }

    /// Measure and place every child at the current animated geometry,
    /// collecting [`Placement`]s. Returns the size found by `lookahead`.
    pub fn placement_pass(&mut self, constraints: Constraints, lookahead: &LookaheadResult) -> Size {
        let _perf = PerfSpan::new(span_names::PLACEMENT_PASS);
        self.placements.clear();
        let mut cx = LayoutContext::new(
            LayoutPass::Placement,
            self.scope.elements_mut(),
            &mut self.placements,
        );

        for child in &mut self.children {
            child.measure(&mut cx, constraints);
        }
        for child in &mut self.children {
            child.place(&mut cx, Offset::ZERO);
        }

        self.size = lookahead.size;
        self.size
    }

    /// The leaves drawn by the last placement pass, in paint order.
    #[inline]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The first placement labelled `label`.
    pub fn placement(&self, label: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.label == label)
    }

    /// The size from the last layout.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Whether any shared element is animating.
    pub fn is_running_transition(&self) -> bool {
        self.scope.is_running_transition()
    }
}
