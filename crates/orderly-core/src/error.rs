//! Error types for orderly

use crate::TerminationSignal;
use thiserror::Error;

/// Result type alias for setup operations
pub type ShutdownResult<T> = Result<T, ShutdownError>;

/// Error type for setup operations
///
/// The shutdown path itself never fails: triggering, registering callbacks
/// and observing the broadcast are total. Only wiring the signal source and
/// parsing configuration can produce one of these.
#[derive(Error, Debug)]
pub enum ShutdownError {
    /// Signal name could not be parsed
    #[error("unknown termination signal: {0}")]
    UnknownSignal(String),

    /// Signal exists but cannot be observed on this platform
    #[error("termination signal {0} is not supported on this platform")]
    UnsupportedSignal(TerminationSignal),

    /// Registering an OS signal handler failed
    #[error("failed to install signal handler: {0}")]
    SignalInstall(String),

    /// An operation that spawns tasks was called outside a tokio runtime
    #[error("no tokio runtime available")]
    NoRuntime,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ShutdownError {
    fn from(err: serde_json::Error) -> Self {
        ShutdownError::Config(err.to_string())
    }
}
