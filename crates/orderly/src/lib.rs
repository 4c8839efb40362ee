//! # orderly
//!
//! Orderly process shutdown for Tokio applications.
//!
//! orderly detects a shutdown trigger (a termination signal or an explicit
//! request), notifies every interested task exactly once, runs registered
//! cleanup work concurrently, and force-terminates the process if cleanup
//! overruns a grace period.
//!
//! ## Quick Start
//!
//! ```ignore
//! use orderly::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> ShutdownResult<()> {
//!     let shutdown = ShutdownCoordinator::with_config(
//!         ShutdownConfig::new().with_timeout(std::time::Duration::from_secs(10)),
//!     );
//!     shutdown.start()?;
//!
//!     shutdown.register_callback(|| tracing::info!("Flushing buffers"));
//!
//!     let signal = shutdown.in_progress();
//!     let worker = tokio::spawn(async move {
//!         loop {
//!             tokio::select! {
//!                 _ = signal.notified() => break,
//!                 _ = tokio::time::sleep(std::time::Duration::from_secs(1)) => {
//!                     tracing::info!("heartbeat");
//!                 }
//!             }
//!         }
//!     });
//!
//!     shutdown.context().done().await;
//!     let _ = worker.await;
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`orderly_core`] - Configuration, errors and lifecycle types
//! - [`orderly_runtime`] - The coordinator, broadcast, context and watchdog
//! - [`orderly_logging`] - Subscriber setup with a reloadable level

// Re-export core types
pub use orderly_core::{
    LogLevel, ShutdownConfig, ShutdownError, ShutdownPhase, ShutdownResult, TerminationSignal,
    WatchdogOutcome,
};

// Re-export runtime types
pub use orderly_runtime::{
    Callback, ContextError, ShutdownContext, ShutdownCoordinator, ShutdownSignal, TerminateFn,
    default_terminate, global,
};

// Re-export logging setup
pub use orderly_logging::{ReloadHandle, init_logging};

// Re-export common dependencies that applications need
pub use tokio;
pub use tokio_util;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use orderly::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        Callback, LogLevel, ShutdownConfig, ShutdownContext, ShutdownCoordinator, ShutdownError,
        ShutdownPhase, ShutdownResult, ShutdownSignal, TerminationSignal, init_logging,
    };
}
