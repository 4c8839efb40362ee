//! Shutdown coordinator: trigger, callback registry and reset

use crate::broadcast::ShutdownSignal;
use crate::callback::{self, Callback};
use crate::context::ShutdownContext;
use crate::source::SignalListener;
use crate::watchdog::{self, TerminateFn, TerminateSlot};
use once_cell::sync::OnceCell;
use orderly_core::{
    ShutdownConfig, ShutdownError, ShutdownPhase, ShutdownResult, TerminationSignal,
    WatchdogOutcome,
};
use parking_lot::{Mutex, RwLock};
use std::future::Future;
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// State of one lifecycle, replaced wholesale by a testing reset
struct Lifecycle {
    requested: bool,
    callbacks: Vec<Callback>,
    broadcast: CancellationToken,
    finished: CancellationToken,
    reset: CancellationToken,
    deadline: Arc<OnceCell<Instant>>,
    watchdog: Option<JoinHandle<WatchdogOutcome>>,
    listener: Option<JoinHandle<()>>,
    started: bool,
}

impl Lifecycle {
    fn new() -> Self {
        Self {
            requested: false,
            callbacks: Vec::new(),
            broadcast: CancellationToken::new(),
            finished: CancellationToken::new(),
            reset: CancellationToken::new(),
            deadline: Arc::new(OnceCell::new()),
            watchdog: None,
            listener: None,
            started: false,
        }
    }
}

struct Inner {
    lifecycle: Mutex<Lifecycle>,
    config: RwLock<ShutdownConfig>,
    terminate: TerminateSlot,
}

/// Coordinates an orderly shutdown
///
/// One coordinator is meant to exist per process, shared by cloning (clones
/// refer to the same state). The first [`request_shutdown`] of a lifecycle
/// fires the broadcast, arms the watchdog and runs every registered
/// callback concurrently; later requests are no-ops.
///
/// [`request_shutdown`]: ShutdownCoordinator::request_shutdown
#[derive(Clone)]
pub struct ShutdownCoordinator {
    inner: Arc<Inner>,
}

impl ShutdownCoordinator {
    /// Create a coordinator with default configuration
    pub fn new() -> Self {
        Self::with_config(ShutdownConfig::default())
    }

    /// Create a coordinator with the given configuration
    ///
    /// No signal handlers are installed until [`start`](Self::start).
    pub fn with_config(config: ShutdownConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                lifecycle: Mutex::new(Lifecycle::new()),
                config: RwLock::new(config),
                terminate: TerminateSlot::new(watchdog::default_terminate()),
            }),
        }
    }

    /// Get the process-wide coordinator
    pub fn global() -> &'static ShutdownCoordinator {
        static INSTANCE: OnceCell<ShutdownCoordinator> = OnceCell::new();
        INSTANCE.get_or_init(ShutdownCoordinator::new)
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> ShutdownConfig {
        self.inner.config.read().clone()
    }

    /// Replace the whole configuration
    pub fn set_config(&self, config: ShutdownConfig) {
        *self.inner.config.write() = config;
    }

    /// Current grace period
    pub fn timeout(&self) -> Duration {
        self.inner.config.read().timeout()
    }

    /// Set the grace period used by the next watchdog
    pub fn set_timeout(&self, timeout: Duration) {
        let mut config = self.inner.config.write();
        *config = config.clone().with_timeout(timeout);
    }

    /// Set the signals wired by the next [`start`](Self::start)
    pub fn set_signals(&self, signals: impl IntoIterator<Item = TerminationSignal>) {
        self.inner.config.write().signals = signals.into_iter().collect();
    }

    /// Replace the action invoked when the watchdog expires
    pub fn set_terminate<F>(&self, terminate: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        let action: TerminateFn = Arc::new(terminate);
        self.inner.terminate.set(action);
    }

    /// Subscribe to the configured termination signals
    ///
    /// Idempotent within a lifecycle. Must be called inside a tokio runtime
    /// unless the signal set is empty, in which case signal-based
    /// triggering stays disabled.
    pub fn start(&self) -> ShutdownResult<()> {
        let mut lifecycle = self.inner.lifecycle.lock();
        if lifecycle.started {
            return Ok(());
        }

        let signals = self.inner.config.read().signals.clone();
        if !signals.is_empty() {
            let runtime =
                tokio::runtime::Handle::try_current().map_err(|_| ShutdownError::NoRuntime)?;
            let listener = SignalListener::install(&signals)?;
            let coordinator = Arc::downgrade(&self.inner);
            lifecycle.listener = Some(runtime.spawn(listen(listener, coordinator)));
            tracing::debug!(?signals, "Listening for termination signals");
        }

        lifecycle.started = true;
        Ok(())
    }

    /// Request shutdown
    ///
    /// The first call of a lifecycle drains the registry, arms the watchdog
    /// and fires the broadcast in one critical section, then waits for every
    /// drained callback. Subsequent calls return immediately.
    pub async fn request_shutdown(&self) {
        let (callbacks, finished) = {
            let mut lifecycle = self.inner.lifecycle.lock();
            if lifecycle.requested {
                return;
            }
            lifecycle.requested = true;

            let callbacks = std::mem::take(&mut lifecycle.callbacks);
            let timeout = self.inner.config.read().timeout();
            if let Some(deadline) = Instant::now().checked_add(timeout) {
                let _ = lifecycle.deadline.set(deadline);
            }
            lifecycle.watchdog = Some(watchdog::arm(
                timeout,
                self.inner.terminate.clone(),
                lifecycle.reset.clone(),
            ));
            lifecycle.broadcast.cancel();

            tracing::info!(
                callbacks = callbacks.len(),
                timeout_ms = timeout.as_millis() as u64,
                "Shutdown requested"
            );
            (callbacks, lifecycle.finished.clone())
        };

        // Runs detached so cleanup completes even if this future is dropped.
        let cleanup = tokio::spawn(async move {
            callback::run_all(callbacks).await;
            finished.cancel();
        });
        let _ = cleanup.await;
    }

    /// Signal that fires when shutdown is requested
    pub fn in_progress(&self) -> ShutdownSignal {
        ShutdownSignal::new(self.inner.lifecycle.lock().broadcast.clone())
    }

    /// Signal that fires once every drained callback has completed
    ///
    /// Never fires if a callback hangs; the watchdog covers that case.
    pub fn cleanup_done(&self) -> ShutdownSignal {
        ShutdownSignal::new(self.inner.lifecycle.lock().finished.clone())
    }

    /// Check if shutdown has been requested (non-blocking)
    pub fn requested(&self) -> bool {
        self.inner.lifecycle.lock().broadcast.is_cancelled()
    }

    /// Current phase of the lifecycle
    pub fn phase(&self) -> ShutdownPhase {
        if self.requested() {
            ShutdownPhase::Requested
        } else {
            ShutdownPhase::Running
        }
    }

    /// Context that is done when shutdown is requested
    pub fn context(&self) -> ShutdownContext {
        let lifecycle = self.inner.lifecycle.lock();
        ShutdownContext::new(lifecycle.broadcast.clone(), lifecycle.deadline.clone())
    }

    /// Append a callback to the registry; `None` is ignored
    ///
    /// Callbacks registered after shutdown was requested are kept but never
    /// run: the registry for this lifecycle has already been drained.
    pub fn register(&self, callback: Option<Callback>) {
        let Some(callback) = callback else {
            return;
        };
        let mut lifecycle = self.inner.lifecycle.lock();
        if lifecycle.requested {
            tracing::debug!("Callback registered after shutdown was requested; it will not run");
        }
        lifecycle.callbacks.push(callback);
    }

    /// Register a synchronous cleanup closure
    ///
    /// The closure runs on the blocking pool and may block.
    pub fn register_callback<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.register(Some(Callback::blocking(f)));
    }

    /// Register a cleanup future, spawned when shutdown is requested
    pub fn register_async_callback<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.register(Some(Callback::future(future)));
    }

    /// Reinitialize all state. Only for tests.
    ///
    /// Aborts an armed watchdog and waits for its task to exit, stops the
    /// signal listener, then starts a fresh lifecycle with an empty registry
    /// and unfired broadcast. Configuration and terminate action are kept.
    /// Not safe to race with [`request_shutdown`](Self::request_shutdown).
    pub async fn testing_reset(&self) {
        let (reset, watchdog, listener) = {
            let mut lifecycle = self.inner.lifecycle.lock();
            (
                lifecycle.reset.clone(),
                lifecycle.watchdog.take(),
                lifecycle.listener.take(),
            )
        };

        reset.cancel();

        if let Some(listener) = listener {
            listener.abort();
            let _ = listener.await;
        }

        if let Some(watchdog) = watchdog {
            match watchdog.await {
                Ok(outcome) => tracing::debug!(%outcome, "Watchdog exited"),
                Err(e) => tracing::warn!("Watchdog task failed: {}", e),
            }
        }

        *self.inner.lifecycle.lock() = Lifecycle::new();
        tracing::debug!("Shutdown state reset");
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for the first termination signal and request shutdown
async fn listen(mut listener: SignalListener, coordinator: Weak<Inner>) {
    let Some(signal) = listener.recv().await else {
        return;
    };
    tracing::info!(%signal, "Termination signal received");

    if let Some(inner) = coordinator.upgrade() {
        ShutdownCoordinator { inner }.request_shutdown().await;
    }
}
