//! Per-axis interpolation tasks.
//!
//! Every shared element runs one task per axis. A task waits for targets
//! published by the lookahead pass, seeds the registry on the first one and
//! interpolates toward every later one. A target arriving mid-flight
//! redirects the running interpolation, which restarts from the current
//! value.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use horizon_lookahead_core::logging::{span_names, targets};
use tracing::Instrument;

use crate::animation::Tween;
use crate::config::Timing;

use super::registry::{AxisValue, Begin, ChildId, SharedRegistry};
use super::signals::TransitionSignals;

/// How one interpolation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Reached its target.
    Idle,
    /// The element is gone.
    Detached,
}

/// Wait for the next published target. Returns `None` once the publisher is
/// dropped.
async fn next_target<T: AxisValue>(receiver: &mut watch::Receiver<Option<T>>) -> Option<T> {
    loop {
        receiver.changed().await.ok()?;
        if let Some(target) = *receiver.borrow_and_update() {
            return Some(target);
        }
    }
}

/// Ticks once per frame, starting one frame after `start`.
fn frame_ticker(start: Instant, frame_interval: Duration) -> Interval {
    let mut ticker = time::interval_at(start + frame_interval, frame_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

/// Spawn the task driving one axis of `id`.
pub(crate) fn spawn_axis<T: AxisValue>(
    handle: &tokio::runtime::Handle,
    id: ChildId,
    registry: SharedRegistry,
    receiver: watch::Receiver<Option<T>>,
    timing: Timing,
    signals: Arc<TransitionSignals>,
) -> tokio::task::JoinHandle<()> {
    let span = tracing::trace_span!(target: targets::TRANSITION, span_names::INTERPOLATION, ?id, axis = %T::AXIS);
    handle.spawn(run_axis(id, registry, receiver, timing, signals).instrument(span))
}

/// Drive one axis of `id` until the element is detached.
pub(crate) async fn run_axis<T: AxisValue>(
    id: ChildId,
    registry: SharedRegistry,
    mut receiver: watch::Receiver<Option<T>>,
    timing: Timing,
    signals: Arc<TransitionSignals>,
) {
    let mut pending = next_target(&mut receiver).await;
    while let Some(target) = pending {
        let begin = registry.lock().begin(id, target);
        pending = match begin {
            Begin::Detached => None,
            Begin::Seeded => next_target(&mut receiver).await,
            Begin::Started { from, other_running } => {
                tracing::debug!(target: targets::TRANSITION, ?id, axis = %T::AXIS, ?from, to = ?target, "interpolation started");
                if !other_running {
                    signals.animate_started.emit(());
                }
                let tween = Tween::new(from, target, timing.duration, timing.easing);
                match interpolate(id, &registry, &mut receiver, timing, &signals, tween).await {
                    Outcome::Idle => next_target(&mut receiver).await,
                    Outcome::Detached => None,
                }
            }
        };
    }
    tracing::trace!(target: targets::TRANSITION, ?id, axis = %T::AXIS, "axis task stopped");
}

async fn interpolate<T: AxisValue>(
    id: ChildId,
    registry: &SharedRegistry,
    receiver: &mut watch::Receiver<Option<T>>,
    timing: Timing,
    signals: &TransitionSignals,
    mut tween: Tween<T>,
) -> Outcome {
    let mut started = Instant::now();
    let mut ticker = frame_ticker(started, timing.frame_interval);

    loop {
        tokio::select! {
            biased;

            changed = receiver.changed() => {
                if changed.is_err() {
                    return Outcome::Detached;
                }
                let Some(next) = *receiver.borrow_and_update() else {
                    continue;
                };
                let retargeted = registry.lock().retarget(id, next);
                let Some((from, other_running)) = retargeted else {
                    return Outcome::Detached;
                };
                tracing::debug!(target: targets::TRANSITION, ?id, axis = %T::AXIS, ?from, to = ?next, "interpolation retargeted");
                if !other_running {
                    signals.animate_cancelled.emit(());
                    signals.animate_started.emit(());
                }
                tween = Tween::new(from, next, timing.duration, timing.easing);
                started = Instant::now();
                ticker = frame_ticker(started, timing.frame_interval);
            }

            _ = ticker.tick() => {
                let (value, done) = tween.sample(started.elapsed());
                if done {
                    let settled = registry.lock().settle::<T>(id);
                    let Some(other_running) = settled else {
                        return Outcome::Detached;
                    };
                    tracing::debug!(target: targets::TRANSITION, ?id, axis = %T::AXIS, ?value, "interpolation finished");
                    if !other_running {
                        signals.animate_finished.emit(());
                    }
                    return Outcome::Idle;
                }
                if !registry.lock().advance(id, value) {
                    return Outcome::Detached;
                }
            }
        }
    }
}
