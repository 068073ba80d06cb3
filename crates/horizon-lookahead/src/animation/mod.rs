//! Easing curves and animatable values.
//!
//! Easing functions take a normalized progress value `t` (0.0 to 1.0) and
//! return a transformed value. [`Tween`] combines an easing with a duration
//! to drive an [`Animatable`] from one value to another.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_lookahead::animation::{Easing, Tween};
//! use horizon_lookahead::geometry::Offset;
//!
//! let tween = Tween::new(Offset::ZERO, Offset::new(200, 0), Duration::from_millis(500), Easing::Linear);
//! let (value, done) = tween.sample(Duration::from_millis(250));
//! assert_eq!(value, Offset::new(100, 0));
//! assert!(!done);
//! ```

mod animatable;
mod easing;

pub use animatable::{Animatable, Animate, Tween};
pub use easing::{Easing, ease};
