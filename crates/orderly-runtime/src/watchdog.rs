//! Watchdog bounding the duration of a shutdown

use orderly_core::WatchdogOutcome;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Action invoked when shutdown exceeds its timeout
///
/// Must be callable from any thread; it runs on the watchdog's task.
pub type TerminateFn = Arc<dyn Fn() + Send + Sync + 'static>;

/// Exit the process with a failure status
pub fn default_terminate() -> TerminateFn {
    Arc::new(|| std::process::exit(1))
}

/// Shared, replaceable terminate action
///
/// Read when the timeout fires, so a replacement installed after the
/// watchdog was armed still takes effect.
#[derive(Clone)]
pub(crate) struct TerminateSlot {
    action: Arc<RwLock<TerminateFn>>,
}

impl TerminateSlot {
    pub(crate) fn new(action: TerminateFn) -> Self {
        Self {
            action: Arc::new(RwLock::new(action)),
        }
    }

    pub(crate) fn set(&self, action: TerminateFn) {
        *self.action.write() = action;
    }

    fn invoke(&self) {
        // Clone out so the lock is not held while terminating.
        let action = self.action.read().clone();
        action();
    }
}

/// Arm a watchdog on the current runtime
///
/// The task races `timeout` against `reset`. Exactly one side wins; the
/// returned handle resolves once the task has exited either way.
pub(crate) fn arm(
    timeout: Duration,
    terminate: TerminateSlot,
    reset: CancellationToken,
) -> JoinHandle<WatchdogOutcome> {
    tokio::spawn(run(timeout, terminate, reset))
}

async fn run(timeout: Duration, terminate: TerminateSlot, reset: CancellationToken) -> WatchdogOutcome {
    tokio::select! {
        _ = reset.cancelled() => {
            tracing::debug!("Watchdog aborted by reset");
            WatchdogOutcome::Aborted
        }
        _ = tokio::time::sleep(timeout) => {
            tracing::warn!(?timeout, "Shutdown did not complete in time, terminating");
            terminate.invoke();
            WatchdogOutcome::Expired
        }
    }
}
