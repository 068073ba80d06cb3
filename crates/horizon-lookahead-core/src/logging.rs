//! Logging and tracing facilities for Horizon Lookahead.
//!
//! Horizon Lookahead uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the host installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_lookahead=debug")
//!         .init();
//! }
//! ```
//!
//! Transition lifecycle events (seed, start, retarget, cancel, finish,
//! detach) are emitted at `trace`/`debug` under [`targets::TRANSITION`] so a
//! host can watch a single subsystem.

/// Span names used throughout Horizon Lookahead for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// The lookahead (target discovery) layout pass.
    pub const LOOKAHEAD_PASS: &str = "horizon_lookahead::lookahead_pass";
    /// The placement (animated) layout pass.
    pub const PLACEMENT_PASS: &str = "horizon_lookahead::placement_pass";
    /// One interpolation run of a single axis.
    pub const INTERPOLATION: &str = "horizon_lookahead::interpolation";
    /// Signal emission span.
    pub const SIGNAL: &str = "horizon_lookahead::signal";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_lookahead_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_lookahead_core::signal";
    /// Animation runtime target.
    pub const RUNTIME: &str = "horizon_lookahead_core::runtime";
    /// Layout passes of the transition container.
    pub const LAYOUT: &str = "horizon_lookahead::layout";
    /// Per-child transition controllers and their axis tasks.
    pub const TRANSITION: &str = "horizon_lookahead::transition";
    /// Tagged-child registry.
    pub const REGISTRY: &str = "horizon_lookahead::registry";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of layout passes.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "horizon_lookahead::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` crate macros with
/// consistent target naming.
#[macro_export]
macro_rules! lookahead_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "horizon_lookahead_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! lookahead_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "horizon_lookahead_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! lookahead_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "horizon_lookahead_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! lookahead_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "horizon_lookahead_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! lookahead_error {
    ($($arg:tt)*) => {
        tracing::error!(target: "horizon_lookahead_core", $($arg)*)
    };
}
