//! orderly-core - Configuration, errors and lifecycle types
//!
//! This crate provides the plain data types shared by the orderly crates:
//! - [`ShutdownConfig`] for timeout, signal set and log level
//! - [`TerminationSignal`] for the OS notifications treated as shutdown requests
//! - [`ShutdownPhase`] and [`WatchdogOutcome`] for the shutdown state machine
//! - [`ShutdownError`] for error handling

mod config;
mod error;
mod lifecycle;
mod signal;

pub use config::ShutdownConfig;
pub use error::{ShutdownError, ShutdownResult};
pub use lifecycle::{ShutdownPhase, WatchdogOutcome};
pub use signal::TerminationSignal;

use serde::{Deserialize, Serialize};

/// Log levels understood by the logging setup
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ShutdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" | "none" => Ok(LogLevel::Off),
            other => Err(ShutdownError::Config(format!("unknown log level: {other}"))),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        LogLevel, ShutdownConfig, ShutdownError, ShutdownPhase, ShutdownResult,
        TerminationSignal, WatchdogOutcome,
    };
}
