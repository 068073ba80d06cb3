//! Transition configuration.
//!
//! [`TransitionConfig`] holds the defaults applied to every shared element in
//! a scope and can be loaded from TOML:
//!
//! ```toml
//! duration_ms = 500
//! easing = "fast-out-slow-in"
//! frame_interval_ms = 16
//! ```
//!
//! [`SharedElementConfig`] is the per-element builder passed to
//! [`TransitionScope::shared_element`](crate::transition::TransitionScope::shared_element).

use std::fmt;
use std::path::Path;
use std::time::Duration;

use horizon_lookahead_core::{LookaheadError, Result};
use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::transition::TransitionSignals;

/// Default animation duration in milliseconds.
pub const DEFAULT_DURATION_MS: i64 = 500;

/// Default interval between interpolation frames in milliseconds.
pub const DEFAULT_FRAME_INTERVAL_MS: i64 = 16;

/// Defaults for the transitions in one scope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    /// Length of one interpolation, in milliseconds.
    pub duration_ms: i64,
    /// Easing curve applied to interpolation progress.
    pub easing: Easing,
    /// Interval between interpolation frames, in milliseconds.
    pub frame_interval_ms: i64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::default(),
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl TransitionConfig {
    /// Parse and validate a configuration from TOML. Missing keys take their
    /// defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| LookaheadError::config_io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(target: "horizon_lookahead::config", path = %path.display(), ?config, "loaded transition config");
        Ok(config)
    }

    /// Check the values are usable.
    pub fn validate(&self) -> Result<()> {
        self.timing().map(|_| ())
    }

    /// The validated timing these values describe.
    pub fn timing(&self) -> Result<Timing> {
        if self.duration_ms < 0 {
            return Err(LookaheadError::InvalidDuration {
                ms: self.duration_ms,
            });
        }
        if self.frame_interval_ms <= 0 {
            return Err(LookaheadError::InvalidFrameInterval {
                ms: self.frame_interval_ms,
            });
        }
        Ok(Timing {
            duration: Duration::from_millis(self.duration_ms as u64),
            easing: self.easing,
            frame_interval: Duration::from_millis(self.frame_interval_ms as u64),
        })
    }
}

/// Validated timing for one shared element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Length of one interpolation.
    pub duration: Duration,
    /// Easing curve.
    pub easing: Easing,
    /// Interval between interpolation frames.
    pub frame_interval: Duration,
}

type Callback = Box<dyn Fn() + Send + Sync>;

/// Configuration for one shared element.
///
/// ```
/// use horizon_lookahead::config::SharedElementConfig;
///
/// let config = SharedElementConfig::default()
///     .with_duration_ms(300)
///     .on_animate_finish(|| println!("settled"));
/// # let _ = config;
/// ```
pub struct SharedElementConfig {
    values: TransitionConfig,
    on_start: Vec<Callback>,
    on_finish: Vec<Callback>,
    on_cancel: Vec<Callback>,
}

impl Default for SharedElementConfig {
    fn default() -> Self {
        Self::from(&TransitionConfig::default())
    }
}

impl From<&TransitionConfig> for SharedElementConfig {
    fn from(values: &TransitionConfig) -> Self {
        Self {
            values: *values,
            on_start: Vec::new(),
            on_finish: Vec::new(),
            on_cancel: Vec::new(),
        }
    }
}

impl SharedElementConfig {
    /// Set the animation duration in milliseconds. Negative values are
    /// rejected when the element is created.
    pub fn with_duration_ms(mut self, duration_ms: i64) -> Self {
        self.values.duration_ms = duration_ms;
        self
    }

    /// Set the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.values.easing = easing;
        self
    }

    /// Set the frame interval in milliseconds.
    pub fn with_frame_interval_ms(mut self, frame_interval_ms: i64) -> Self {
        self.values.frame_interval_ms = frame_interval_ms;
        self
    }

    /// Called when a joint transition begins.
    pub fn on_animate_start(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_start.push(Box::new(callback));
        self
    }

    /// Called when a joint transition reaches its target.
    pub fn on_animate_finish(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_finish.push(Box::new(callback));
        self
    }

    /// Called when a joint transition is superseded by a new target.
    pub fn on_animate_cancel(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_cancel.push(Box::new(callback));
        self
    }

    /// The configured values.
    #[inline]
    pub fn values(&self) -> &TransitionConfig {
        &self.values
    }

    /// Validate the values and wire the callbacks into fresh signals.
    pub(crate) fn into_parts(self) -> Result<(Timing, TransitionSignals)> {
        let timing = self.values.timing()?;
        let signals = TransitionSignals::new();
        for callback in self.on_start {
            signals.animate_started.connect(move |_| callback());
        }
        for callback in self.on_finish {
            signals.animate_finished.connect(move |_| callback());
        }
        for callback in self.on_cancel {
            signals.animate_cancelled.connect(move |_| callback());
        }
        Ok((timing, signals))
    }
}

impl fmt::Debug for SharedElementConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedElementConfig")
            .field("values", &self.values)
            .field("on_start", &self.on_start.len())
            .field("on_finish", &self.on_finish.len())
            .field("on_cancel", &self.on_cancel.len())
            .finish()
    }
}
