//! Shutdown configuration

use crate::{LogLevel, ShutdownResult, TerminationSignal};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shutdown configuration
///
/// Every field has a default, so an empty document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShutdownConfig {
    /// Maximum time from shutdown request to forced termination, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Signals interpreted as a shutdown request
    ///
    /// An empty list disables signal-based triggering.
    #[serde(default = "TerminationSignal::platform_defaults")]
    pub signals: Vec<TerminationSignal>,

    /// Initial log level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            signals: TerminationSignal::platform_defaults(),
            log_level: LogLevel::default(),
        }
    }
}

impl ShutdownConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> ShutdownResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Grace period before forced termination
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Set the grace period
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Replace the signal set
    pub fn with_signals(mut self, signals: impl IntoIterator<Item = TerminationSignal>) -> Self {
        self.signals = signals.into_iter().collect();
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}
