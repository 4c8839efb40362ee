//! Context-style view of the shutdown broadcast

use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Reason a [`ShutdownContext`] is done
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error("context cancelled: shutdown requested")]
    Cancelled,
}

/// Cancellable context that is done when shutdown is requested
///
/// Backed by the same broadcast as [`crate::ShutdownSignal`], so the two
/// can never disagree. The context is read-only: holders cannot cancel it.
#[derive(Debug, Clone)]
pub struct ShutdownContext {
    token: CancellationToken,
    deadline: Arc<OnceCell<Instant>>,
}

impl ShutdownContext {
    pub(crate) fn new(token: CancellationToken, deadline: Arc<OnceCell<Instant>>) -> Self {
        Self { token, deadline }
    }

    /// Wait until shutdown is requested
    pub async fn done(&self) {
        self.token.cancelled().await;
    }

    /// Check whether shutdown has been requested (non-blocking)
    pub fn is_done(&self) -> bool {
        self.token.is_cancelled()
    }

    /// `Some(ContextError::Cancelled)` once done, `None` before
    pub fn err(&self) -> Option<ContextError> {
        self.is_done().then_some(ContextError::Cancelled)
    }

    /// Instant at which the watchdog forces termination
    ///
    /// `None` until shutdown is requested.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline.get().copied()
    }

    /// Child token for APIs that take a [`CancellationToken`]
    ///
    /// Cancelling the child does not request shutdown.
    pub fn child_token(&self) -> CancellationToken {
        self.token.child_token()
    }
}
