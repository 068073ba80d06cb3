//! Animatable values and the tween that drives them.
//!
//! An [`Animatable`] is the value holder a transition writes into: it knows
//! where it is now, where it is heading and whether it is moving. A [`Tween`]
//! is one timed run from a start value to a target.

use std::time::Duration;

use crate::geometry::{Offset, Size};

use super::easing::{Easing, ease};

/// Types that can be interpolated between two values.
pub trait Animate: Copy + PartialEq {
    /// The value at `fraction` of the way from `self` to `to`.
    ///
    /// `fraction` is already eased and may overshoot `[0, 1]` slightly for
    /// some curves; integer types round to the nearest pixel.
    fn interpolate(self, to: Self, fraction: f32) -> Self;
}

impl Animate for f32 {
    #[inline]
    fn interpolate(self, to: Self, fraction: f32) -> Self {
        self + (to - self) * fraction
    }
}

impl Animate for Offset {
    fn interpolate(self, to: Self, fraction: f32) -> Self {
        let lerp = |from: i32, to: i32| (from as f32).interpolate(to as f32, fraction).round() as i32;
        Offset::new(lerp(self.x, to.x), lerp(self.y, to.y))
    }
}

impl Animate for Size {
    fn interpolate(self, to: Self, fraction: f32) -> Self {
        let lerp = |from: u32, to: u32| {
            (from as f32)
                .interpolate(to as f32, fraction)
                .round()
                .max(0.0) as u32
        };
        Size::new(lerp(self.width, to.width), lerp(self.height, to.height))
    }
}

/// A value that can be driven toward a target over time.
///
/// Created seeded (current equals target, not running). A transition calls
/// [`begin`](Self::begin) when it starts moving toward a new target, writes
/// intermediate values with [`set_value`](Self::set_value), and ends with
/// [`settle`](Self::settle). Calling `begin` again mid-flight redirects the
/// running value without stopping it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animatable<T> {
    current: T,
    target: T,
    running: bool,
}

impl<T: Animate> Animatable<T> {
    /// Create an animatable resting at `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            target: initial,
            running: false,
        }
    }

    /// The current (possibly mid-flight) value.
    #[inline]
    pub fn value(&self) -> T {
        self.current
    }

    /// The value the animatable is heading toward, or resting at.
    #[inline]
    pub fn target(&self) -> T {
        self.target
    }

    /// Whether an interpolation is in flight.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start moving toward `target`, returning the value to start from.
    ///
    /// Mid-flight this keeps the current value, so the next interpolation
    /// continues from where the last one was.
    pub fn begin(&mut self, target: T) -> T {
        self.target = target;
        self.running = true;
        self.current
    }

    /// Write an intermediate value.
    pub fn set_value(&mut self, value: T) {
        self.current = value;
    }

    /// Jump to the target and stop.
    pub fn settle(&mut self) {
        self.current = self.target;
        self.running = false;
    }
}

/// One timed interpolation from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration: Duration,
    easing: Easing,
}

impl<T: Animate> Tween<T> {
    /// Create a tween.
    pub fn new(from: T, to: T, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
        }
    }

    /// The tween's duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress after `elapsed`, clamped to `[0, 1]`.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Sample the tween after `elapsed`.
    ///
    /// Returns the value and whether the tween has finished. A finished tween
    /// always yields exactly `to`.
    pub fn sample(&self, elapsed: Duration) -> (T, bool) {
        let progress = self.progress(elapsed);
        if progress >= 1.0 {
            (self.to, true)
        } else {
            (self.from.interpolate(self.to, ease(self.easing, progress)), false)
        }
    }
}
