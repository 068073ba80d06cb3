//! Lifecycle signals of a shared element transition.

use horizon_lookahead_core::Signal;

/// Signals emitted on the edges of a joint offset/size transition.
///
/// Offset and size animate independently but are reported as one
/// transition: each edge fires only when the other axis is not running.
#[derive(Debug, Default)]
pub struct TransitionSignals {
    /// The joint transition began.
    pub animate_started: Signal<()>,
    /// The joint transition reached its target.
    pub animate_finished: Signal<()>,
    /// The joint transition was superseded by a new target.
    pub animate_cancelled: Signal<()>,
}

impl TransitionSignals {
    /// Create signals with no connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every connection on all three signals.
    pub fn disconnect_all(&self) {
        self.animate_started.disconnect_all();
        self.animate_finished.disconnect_all();
        self.animate_cancelled.disconnect_all();
    }
}

static_assertions::assert_impl_all!(TransitionSignals: Send, Sync);
