//! Error types for Horizon Lookahead.

use std::path::PathBuf;

/// The main error type for Horizon Lookahead operations.
///
/// Interpolation cancellation and missing registry entries are ordinary
/// control flow and never show up here; only configuration and runtime
/// setup can fail.
#[derive(Debug, thiserror::Error)]
pub enum LookaheadError {
    /// A transition duration was negative.
    #[error("Invalid animation duration: {ms} ms (must not be negative)")]
    InvalidDuration {
        /// The rejected duration in milliseconds.
        ms: i64,
    },

    /// The animation frame interval was zero or negative.
    #[error("Invalid frame interval: {ms} ms (must be positive)")]
    InvalidFrameInterval {
        /// The rejected interval in milliseconds.
        ms: i64,
    },

    /// An easing curve name was not recognised.
    #[error("Unknown easing '{0}'")]
    UnknownEasing(String),

    /// No tokio runtime was available to drive interpolation tasks.
    #[error("No async runtime available: {0}")]
    RuntimeUnavailable(String),

    /// Failed to build the animation runtime.
    #[error("Failed to create animation runtime: {0}")]
    RuntimeCreation(#[source] std::io::Error),

    /// A transition configuration document could not be parsed.
    #[error("Failed to parse transition config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A transition configuration file could not be read.
    #[error("Failed to read transition config '{path}': {source}")]
    ConfigIo {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A shared element handle did not name a live element.
    #[error("Unknown shared element: {0}")]
    UnknownElement(String),
}

impl LookaheadError {
    /// Create a config I/O error.
    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// Whether the error stems from invalid user-supplied configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidDuration { .. }
                | Self::InvalidFrameInterval { .. }
                | Self::UnknownEasing(_)
                | Self::ConfigParse(_)
                | Self::ConfigIo { .. }
        )
    }
}

/// A specialized Result type for Horizon Lookahead operations.
pub type Result<T> = std::result::Result<T, LookaheadError>;
