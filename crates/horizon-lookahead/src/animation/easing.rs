//! Easing functions for smooth animations.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value that creates smoother, more natural-looking animations. Every curve
//! besides [`Easing::Linear`] is a cubic bezier timing curve.

use std::fmt;
use std::str::FromStr;

use horizon_lookahead_core::LookaheadError;
use serde::{Deserialize, Serialize};

/// Available easing functions.
///
/// In configuration files easings are written in kebab-case, e.g.
/// `"linear-out-slow-in"` or `"fast-out-slow-in"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Material standard curve, `cubic-bezier(0.4, 0.0, 0.2, 1.0)`.
    ///
    /// Accelerates quickly and settles gently; the default for shared
    /// element transitions.
    #[default]
    FastOutSlowIn,
    /// Material decelerate curve, `cubic-bezier(0.0, 0.0, 0.2, 1.0)`.
    ///
    /// Starts at full speed, for elements entering the screen.
    LinearOutSlowIn,
    /// Material accelerate curve, `cubic-bezier(0.4, 0.0, 1.0, 1.0)`.
    ///
    /// Ends at full speed, for elements leaving the screen.
    FastOutLinearIn,
}

/// Apply an easing function to a progress value.
///
/// `t` is clamped to `[0, 1]`; the result is in the same range.
///
/// # Example
///
/// ```
/// use horizon_lookahead::animation::{ease, Easing};
///
/// // Linear: output equals input
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
///
/// // Accelerating: slower at start
/// assert!(ease(Easing::FastOutLinearIn, 0.5) < 0.5);
///
/// // Decelerating: slower at end
/// assert!(ease(Easing::LinearOutSlowIn, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
        Easing::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, t),
        Easing::FastOutLinearIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, t),
    }
}

impl Easing {
    /// All easing functions, in declaration order.
    pub const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::FastOutSlowIn,
        Easing::LinearOutSlowIn,
        Easing::FastOutLinearIn,
    ];

    /// The kebab-case name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::FastOutSlowIn => "fast-out-slow-in",
            Easing::LinearOutSlowIn => "linear-out-slow-in",
            Easing::FastOutLinearIn => "fast-out-linear-in",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = LookaheadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .into_iter()
            .find(|easing| easing.name() == s)
            .ok_or_else(|| LookaheadError::UnknownEasing(s.to_string()))
    }
}

// =============================================================================
// Cubic Bezier Easing
// =============================================================================

/// Evaluate a CSS-style cubic bezier timing curve with control points
/// `(x1, y1)` and `(x2, y2)` at progress `x`.
///
/// `x1` and `x2` must lie in `[0, 1]` so the curve is monotonic in x.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let sample = |p1: f32, p2: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    };

    // Bisection on the curve parameter.
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    let mut t = x;
    for _ in 0..32 {
        let sampled = sample(x1, x2, t);
        if (sampled - x).abs() < 1e-5 {
            break;
        }
        if sampled < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }

    sample(y1, y2, t)
}
