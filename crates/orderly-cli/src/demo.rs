//! Demo run: heartbeat and context-driven tasks stopped by a shutdown

use anyhow::{Context, Result};
use orderly::{ShutdownContext, ShutdownCoordinator, ShutdownSignal};
use std::time::Duration;

use crate::settings::Settings;

/// Run until shutdown is requested and cleanup has finished
pub async fn run(settings: Settings) -> Result<()> {
    let shutdown = ShutdownCoordinator::with_config(settings.shutdown.clone());
    shutdown.set_terminate(|| {
        tracing::error!("Cleanup did not finish in time, exiting");
        std::process::exit(1);
    });
    shutdown
        .start()
        .context("Failed to wire termination signals")?;

    shutdown.register_callback(|| tracing::info!("Shutdown requested, callback running"));
    if settings.demo.hang {
        tracing::warn!("Registering a callback that never finishes");
        shutdown.register_async_callback(std::future::pending::<()>());
    }

    let heartbeat = tokio::spawn(heartbeat(shutdown.in_progress(), settings.demo.heartbeat()));
    let context_task = tokio::spawn(wait_for_context(shutdown.context()));

    if let Some(delay) = settings.demo.request_after() {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::info!(?delay, "Requesting shutdown");
            shutdown.request_shutdown().await;
        });
    }

    tracing::info!(
        timeout_ms = settings.shutdown.timeout_ms,
        signals = ?settings.shutdown.signals,
        "Running; waiting for shutdown"
    );

    heartbeat.await.context("Heartbeat task failed")?;
    context_task.await.context("Context task failed")?;
    shutdown.cleanup_done().wait().await;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Log a heartbeat until shutdown is requested
async fn heartbeat(signal: ShutdownSignal, interval: Duration) {
    loop {
        tokio::select! {
            _ = signal.notified() => {
                tracing::info!("Heartbeat stopped");
                return;
            }
            _ = tokio::time::sleep(interval) => {
                tracing::info!("heartbeat");
            }
        }
    }
}

async fn wait_for_context(context: ShutdownContext) {
    context.done().await;
    match context.deadline() {
        Some(deadline) => tracing::info!(
            remaining = ?deadline.saturating_duration_since(std::time::Instant::now()),
            "Context done"
        ),
        None => tracing::info!("Context done"),
    }
}
