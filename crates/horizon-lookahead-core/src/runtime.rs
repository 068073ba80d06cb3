//! Async runtime that drives transition interpolation tasks.
//!
//! Each shared element runs two long-lived tasks (offset and size) that tick
//! once per animation frame. Hosts already running inside tokio can hand
//! their own [`Handle`] to the transition scope; everyone else creates an
//! [`AnimationRuntime`].
//!
//! # Runtime Types
//!
//! - **Current-thread** (default): tasks only make progress while the host
//!   drives the runtime via [`AnimationRuntime::block_on`] or
//!   [`AnimationRuntime::advance`]. This gives the cooperative, frame-driven
//!   model where layout and interpolation never run at the same time.
//!
//! - **Multi-threaded**: tasks run on a worker pool in the background.
//!   Registry access is serialized by a mutex per container, so this is
//!   safe, but frames become less deterministic.
//!
//! # Example
//!
//! ```no_run
//! use horizon_lookahead_core::runtime::{AnimationRuntime, RuntimeConfig};
//! use std::time::Duration;
//!
//! let runtime = AnimationRuntime::new(RuntimeConfig::default())?;
//! let _guard = runtime.enter();
//! // ... build a transition container, run a layout pass ...
//! runtime.advance(Duration::from_millis(16));
//! # Ok::<(), horizon_lookahead_core::LookaheadError>(())
//! ```

use std::future::Future;
use std::time::Duration;

use tokio::runtime::{Builder, EnterGuard, Handle, Runtime};
use tokio::task::JoinHandle;

use crate::error::{LookaheadError, Result};

/// The type of async runtime to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeType {
    /// Current-thread runtime driven by the host's frame loop.
    #[default]
    CurrentThread,

    /// Multi-threaded runtime using Tokio's default scheduler.
    MultiThreaded,
}

/// Configuration for the animation runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// The type of runtime to create.
    pub runtime_type: RuntimeType,
    /// Number of worker threads for multi-threaded runtime.
    /// Defaults to the number of CPU cores.
    pub worker_threads: Option<usize>,
    /// Name prefix for runtime threads.
    pub thread_name: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            runtime_type: RuntimeType::CurrentThread,
            worker_threads: None,
            thread_name: "horizon-animation".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Create a configuration for a current-thread runtime.
    pub fn current_thread() -> Self {
        Self::default()
    }

    /// Create a configuration for a multi-threaded runtime.
    pub fn multi_threaded() -> Self {
        Self {
            runtime_type: RuntimeType::MultiThreaded,
            ..Default::default()
        }
    }

    /// Set the number of worker threads (multi-threaded runtime only).
    pub fn with_worker_threads(mut self, count: usize) -> Self {
        self.worker_threads = Some(count);
        self
    }

    /// Set the thread name prefix.
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }
}

/// Owns the tokio runtime that interpolation tasks are spawned on.
pub struct AnimationRuntime {
    runtime: Runtime,
    runtime_type: RuntimeType,
}

impl AnimationRuntime {
    /// Create a new runtime with the given configuration.
    ///
    /// The time driver is always enabled; interpolation tasks tick on it.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let mut builder = match config.runtime_type {
            RuntimeType::CurrentThread => Builder::new_current_thread(),
            RuntimeType::MultiThreaded => {
                let mut builder = Builder::new_multi_thread();
                if let Some(workers) = config.worker_threads {
                    builder.worker_threads(workers);
                }
                builder
            }
        };
        builder.thread_name(&config.thread_name).enable_time();

        let runtime = builder.build().map_err(LookaheadError::RuntimeCreation)?;
        tracing::debug!(
            target: "horizon_lookahead_core::runtime",
            runtime_type = ?config.runtime_type,
            "animation runtime created"
        );

        Ok(Self {
            runtime,
            runtime_type: config.runtime_type,
        })
    }

    /// Get the runtime type.
    pub fn runtime_type(&self) -> RuntimeType {
        self.runtime_type
    }

    /// Get a handle to the Tokio runtime.
    pub fn handle(&self) -> &Handle {
        self.runtime.handle()
    }

    /// Enter the runtime context so [`Handle::try_current`] finds it.
    pub fn enter(&self) -> EnterGuard<'_> {
        self.runtime.enter()
    }

    /// Spawn a task on the runtime.
    pub fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.runtime.spawn(future)
    }

    /// Block on a future, running it (and, on a current-thread runtime, all
    /// spawned tasks) to completion.
    ///
    /// Do not call this from within an async context.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Let spawned tasks run for `duration` of wall-clock time.
    ///
    /// On a current-thread runtime this is how a host hands one frame's
    /// worth of time to the interpolation tasks.
    pub fn advance(&self, duration: Duration) {
        self.runtime.block_on(tokio::time::sleep(duration));
    }
}

impl std::fmt::Debug for AnimationRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationRuntime")
            .field("runtime_type", &self.runtime_type)
            .finish()
    }
}

/// Capture the handle of the runtime the caller is running inside.
pub fn current_handle() -> Result<Handle> {
    Handle::try_current().map_err(|e| LookaheadError::RuntimeUnavailable(e.to_string()))
}
