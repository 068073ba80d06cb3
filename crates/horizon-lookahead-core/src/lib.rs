//! Core systems for Horizon Lookahead.
//!
//! This crate provides the foundational pieces the transition layer is
//! built on:
//!
//! - **Errors**: [`LookaheadError`] and the crate-wide [`Result`] alias
//! - **Logging**: tracing targets, span names and logging macros
//! - **Signal/Slot System**: [`Signal`] for lifecycle notifications
//! - **Animation Runtime**: [`AnimationRuntime`], the tokio runtime that
//!   drives interpolation tasks
//!
//! # Signal Example
//!
//! ```
//! use horizon_lookahead_core::Signal;
//!
//! let started = Signal::<()>::new();
//! let conn_id = started.connect(|_| println!("transition started"));
//! started.emit(());
//! started.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod runtime;
pub mod signal;

pub use error::{LookaheadError, Result};
pub use logging::PerfSpan;
pub use runtime::{AnimationRuntime, RuntimeConfig, RuntimeType};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
