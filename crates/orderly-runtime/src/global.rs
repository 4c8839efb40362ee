//! Process-wide shutdown functions
//!
//! Thin wrappers over [`ShutdownCoordinator::global`] for programs that want
//! one coordinator without passing it around. Configure first, then call
//! [`start`] to wire the termination signals.

use crate::{ShutdownContext, ShutdownCoordinator, ShutdownSignal};
use orderly_core::{ShutdownResult, TerminationSignal};
use std::future::Future;
use std::time::Duration;

/// Wire the configured termination signals
pub fn start() -> ShutdownResult<()> {
    ShutdownCoordinator::global().start()
}

/// Request shutdown and wait for the registered callbacks
pub async fn request_shutdown() {
    ShutdownCoordinator::global().request_shutdown().await;
}

/// Signal that fires when shutdown is requested
pub fn in_progress() -> ShutdownSignal {
    ShutdownCoordinator::global().in_progress()
}

/// Check if shutdown has been requested
pub fn requested() -> bool {
    ShutdownCoordinator::global().requested()
}

/// Context that is done when shutdown is requested
pub fn context() -> ShutdownContext {
    ShutdownCoordinator::global().context()
}

/// Register a synchronous cleanup closure
pub fn register_callback<F>(f: F)
where
    F: FnOnce() + Send + 'static,
{
    ShutdownCoordinator::global().register_callback(f);
}

/// Register a cleanup future
pub fn register_async_callback<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    ShutdownCoordinator::global().register_async_callback(future);
}

pub fn set_timeout(timeout: Duration) {
    ShutdownCoordinator::global().set_timeout(timeout);
}

pub fn set_signals(signals: impl IntoIterator<Item = TerminationSignal>) {
    ShutdownCoordinator::global().set_signals(signals);
}

pub fn set_terminate<F>(terminate: F)
where
    F: Fn() + Send + Sync + 'static,
{
    ShutdownCoordinator::global().set_terminate(terminate);
}

/// Reinitialize the global coordinator. Only for tests.
pub async fn testing_reset() {
    ShutdownCoordinator::global().testing_reset().await;
}
