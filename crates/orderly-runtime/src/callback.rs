//! Cleanup callbacks run when shutdown is triggered

use std::future::Future;
use std::pin::Pin;
use tokio::task::JoinHandle;

/// A cleanup action registered with the coordinator
///
/// Each drained callback runs exactly once as its own task. Blocking
/// closures go to the blocking pool; futures are spawned on the runtime.
pub enum Callback {
    /// Synchronous closure, may block
    Blocking(Box<dyn FnOnce() + Send + 'static>),
    /// Future polled to completion on the runtime
    Async(Pin<Box<dyn Future<Output = ()> + Send + 'static>>),
}

impl Callback {
    /// Wrap a synchronous closure
    pub fn blocking<F>(f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Callback::Blocking(Box::new(f))
    }

    /// Wrap a future
    pub fn future<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Callback::Async(Box::pin(future))
    }

    fn spawn(self) -> JoinHandle<()> {
        match self {
            Callback::Blocking(f) => tokio::task::spawn_blocking(f),
            Callback::Async(future) => tokio::spawn(future),
        }
    }
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Callback::Blocking(_) => f.write_str("Callback::Blocking"),
            Callback::Async(_) => f.write_str("Callback::Async"),
        }
    }
}

/// Start every callback concurrently and wait for all of them
///
/// Tasks are detached from this future: dropping it stops the waiting, not
/// the callbacks. Callback outcomes are not inspected beyond logging panics.
pub(crate) async fn run_all(callbacks: Vec<Callback>) {
    let count = callbacks.len();
    let handles: Vec<JoinHandle<()>> = callbacks.into_iter().map(Callback::spawn).collect();

    for handle in handles {
        if let Err(err) = handle.await {
            if err.is_panic() {
                tracing::warn!("Shutdown callback panicked");
            }
        }
    }

    tracing::debug!(count, "Shutdown callbacks finished");
}

#[cfg(test)]
#[path = "callback/callback_tests.rs"]
mod callback_tests;
