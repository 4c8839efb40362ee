//! Single-fire shutdown broadcast

use tokio_util::sync::CancellationToken;
use tokio_util::sync::WaitForCancellationFuture;

/// Signal for detecting shutdown (cloneable, can be passed to tasks)
///
/// Fires at most once per lifecycle and stays fired. Any number of holders
/// observe the same transition; nothing is consumed by waiting.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    token: CancellationToken,
}

impl ShutdownSignal {
    pub(crate) fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Check if shutdown has been triggered (non-blocking)
    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait for shutdown to be triggered
    ///
    /// Returns immediately if already triggered.
    pub async fn wait(&self) {
        self.token.cancelled().await;
    }

    /// Create a future that completes when shutdown is triggered
    ///
    /// This is useful for select! statements.
    pub fn notified(&self) -> WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}

#[cfg(test)]
#[path = "broadcast/broadcast_tests.rs"]
mod broadcast_tests;
