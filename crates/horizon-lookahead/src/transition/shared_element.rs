//! The per-child transition controller.

use std::fmt;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::Timing;
use crate::geometry::{Constraints, Offset, Rect, Size};
use crate::layout::{LayoutContext, LayoutNode, LayoutPass};

use super::driver::spawn_axis;
use super::registry::{ChildId, SharedRegistry};
use super::signals::TransitionSignals;

use horizon_lookahead_core::logging::targets;

/// A child whose position and size animate whenever its place in the layout
/// changes.
///
/// During the lookahead pass the element lays its child out normally and
/// publishes the resulting size and position as targets. During the
/// placement pass it measures the child at the animated size and places it
/// at the animated offset, falling back to the lookahead values until the
/// axis tasks have seeded the registry.
///
/// Elements are created by
/// [`TransitionScope::shared_element`](super::TransitionScope::shared_element)
/// and referenced from layout trees with [`element`](crate::layout::element).
/// Dropping one detaches it from the registry and stops its tasks.
pub struct SharedElement {
    id: ChildId,
    child: Box<dyn LayoutNode>,
    registry: SharedRegistry,
    signals: Arc<TransitionSignals>,
    offset_targets: watch::Sender<Option<Offset>>,
    size_targets: watch::Sender<Option<Size>>,
    lookahead_offset: Offset,
    lookahead_size: Size,
    current_offset: Offset,
    measured: Size,
    bounds: Rect,
    tasks: [JoinHandle<()>; 2],
}

impl SharedElement {
    pub(crate) fn spawn(
        handle: &Handle,
        id: ChildId,
        child: Box<dyn LayoutNode>,
        registry: SharedRegistry,
        timing: Timing,
        signals: TransitionSignals,
    ) -> Self {
        let signals = Arc::new(signals);
        let (offset_targets, offset_rx) = watch::channel(None);
        let (size_targets, size_rx) = watch::channel(None);
        let tasks = [
            spawn_axis::<Offset>(handle, id, registry.clone(), offset_rx, timing, signals.clone()),
            spawn_axis::<Size>(handle, id, registry.clone(), size_rx, timing, signals.clone()),
        ];
        Self {
            id,
            child,
            registry,
            signals,
            offset_targets,
            size_targets,
            lookahead_offset: Offset::ZERO,
            lookahead_size: Size::ZERO,
            current_offset: Offset::ZERO,
            measured: Size::ZERO,
            bounds: Rect::ZERO,
            tasks,
        }
    }

    /// The element's identity.
    #[inline]
    pub fn id(&self) -> ChildId {
        self.id
    }

    /// Lifecycle signals of this element's transitions.
    #[inline]
    pub fn signals(&self) -> &Arc<TransitionSignals> {
        &self.signals
    }

    /// Where the child was last drawn, in container coordinates.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The position the placement pass last handed to this element.
    #[inline]
    pub fn current_offset(&self) -> Offset {
        self.current_offset
    }

    /// The most recent target published by the lookahead pass.
    #[inline]
    pub fn lookahead_bounds(&self) -> Rect {
        Rect::new(self.lookahead_offset, self.lookahead_size)
    }

    /// Whether either axis is animating.
    pub fn is_running(&self) -> bool {
        self.registry.lock().is_running(self.id)
    }
}

/// Publish `value`, waking the axis task only when it differs from the last
/// published value.
fn publish<T: PartialEq + Copy>(targets: &watch::Sender<Option<T>>, value: T) {
    targets.send_if_modified(|current| {
        if *current == Some(value) {
            false
        } else {
            *current = Some(value);
            true
        }
    });
}

impl LayoutNode for SharedElement {
    fn measure(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        match cx.pass() {
            LayoutPass::Lookahead => {
                let size = self.child.measure(cx, constraints);
                self.lookahead_size = size;
                publish(&self.size_targets, size);
                size
            }
            LayoutPass::Placement => {
                let animated = self.registry.lock().size(self.id).unwrap_or(self.lookahead_size);
                self.measured = self.child.measure(cx, Constraints::fixed(animated));
                self.measured
            }
        }
    }

    fn place(&mut self, cx: &mut LayoutContext<'_>, position: Offset) {
        match cx.pass() {
            LayoutPass::Lookahead => {
                self.lookahead_offset = position;
                publish(&self.offset_targets, position);
                self.child.place(cx, position);
            }
            LayoutPass::Placement => {
                self.current_offset = position;
                let animated = self.registry.lock().offset(self.id).unwrap_or(self.lookahead_offset);
                let at = self.current_offset + (animated - self.current_offset);
                self.bounds = Rect::new(at, self.measured);
                self.child.place(cx, at);
            }
        }
    }
}

impl Drop for SharedElement {
    fn drop(&mut self) {
        self.registry.lock().detach(self.id);
        for task in &self.tasks {
            task.abort();
        }
        tracing::debug!(target: targets::TRANSITION, id = ?self.id, "shared element detached");
    }
}

impl fmt::Debug for SharedElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedElement")
            .field("id", &self.id)
            .field("lookahead", &self.lookahead_bounds())
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(SharedElement: Send);
