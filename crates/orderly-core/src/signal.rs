//! Termination signals that count as a shutdown request

use crate::ShutdownError;
use serde::{Deserialize, Serialize};

/// OS notification interpreted as a request to shut down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationSignal {
    /// SIGINT / Ctrl-C
    Interrupt,
    /// SIGTERM
    Terminate,
    /// SIGHUP
    Hangup,
    /// SIGQUIT
    Quit,
}

impl TerminationSignal {
    /// Signals subscribed to when nothing else is configured
    ///
    /// Unix: interrupt and terminate. Windows: Ctrl-C only. Anything else
    /// gets an empty set, which disables signal-based triggering.
    pub fn platform_defaults() -> Vec<TerminationSignal> {
        if cfg!(unix) {
            vec![TerminationSignal::Interrupt, TerminationSignal::Terminate]
        } else if cfg!(windows) {
            vec![TerminationSignal::Interrupt]
        } else {
            Vec::new()
        }
    }

    /// Conventional signal name
    pub fn name(&self) -> &'static str {
        match self {
            TerminationSignal::Interrupt => "SIGINT",
            TerminationSignal::Terminate => "SIGTERM",
            TerminationSignal::Hangup => "SIGHUP",
            TerminationSignal::Quit => "SIGQUIT",
        }
    }
}

impl std::fmt::Display for TerminationSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TerminationSignal {
    type Err = ShutdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interrupt" | "int" | "sigint" => Ok(TerminationSignal::Interrupt),
            "terminate" | "term" | "sigterm" => Ok(TerminationSignal::Terminate),
            "hangup" | "hup" | "sighup" => Ok(TerminationSignal::Hangup),
            "quit" | "sigquit" => Ok(TerminationSignal::Quit),
            _ => Err(ShutdownError::UnknownSignal(s.to_string())),
        }
    }
}
