//! Demo settings file parsing and command-line overrides

use anyhow::{Context, Result};
use orderly::{LogLevel, ShutdownConfig, TerminationSignal};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// orderly.toml structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub shutdown: ShutdownConfig,

    #[serde(default)]
    pub demo: DemoSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSection {
    /// Interval between heartbeat messages
    #[serde(default = "default_heartbeat_ms")]
    pub heartbeat_ms: u64,

    /// Register a callback that never finishes, so the watchdog fires
    #[serde(default)]
    pub hang: bool,

    /// Request shutdown by itself after this many milliseconds
    #[serde(default)]
    pub request_after_ms: Option<u64>,
}

fn default_heartbeat_ms() -> u64 {
    1000
}

impl Default for DemoSection {
    fn default() -> Self {
        Self {
            heartbeat_ms: default_heartbeat_ms(),
            hang: false,
            request_after_ms: None,
        }
    }
}

impl DemoSection {
    pub fn heartbeat(&self) -> Duration {
        Duration::from_millis(self.heartbeat_ms.max(1))
    }

    pub fn request_after(&self) -> Option<Duration> {
        self.request_after_ms.map(Duration::from_millis)
    }
}

/// Values given on the command line, applied over the settings file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub timeout_ms: Option<u64>,
    pub signals: Vec<TerminationSignal>,
    pub no_signals: bool,
    pub log_level: Option<LogLevel>,
    pub heartbeat_ms: Option<u64>,
    pub hang: bool,
    pub request_after_ms: Option<u64>,
}

impl Settings {
    /// Load settings from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read settings: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse settings from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse settings")
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.shutdown.timeout_ms = timeout_ms;
        }
        if overrides.no_signals {
            self.shutdown.signals.clear();
        } else if !overrides.signals.is_empty() {
            self.shutdown.signals = overrides.signals;
        }
        if let Some(level) = overrides.log_level {
            self.shutdown.log_level = level;
        }
        if let Some(heartbeat_ms) = overrides.heartbeat_ms {
            self.demo.heartbeat_ms = heartbeat_ms;
        }
        if overrides.hang {
            self.demo.hang = true;
        }
        if overrides.request_after_ms.is_some() {
            self.demo.request_after_ms = overrides.request_after_ms;
        }
        self
    }
}
