//! Shutdown state machine types

use serde::{Deserialize, Serialize};

/// Phase of a shutdown lifecycle
///
/// State transitions:
/// ```text
/// Running ──trigger──→ Requested
///    ↑                     │
///    └──── testing reset ──┘
/// ```
///
/// The trigger happens at most once per lifecycle; only a reset goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShutdownPhase {
    /// Shutdown has not been requested
    #[default]
    Running,
    /// Shutdown was requested; the broadcast has fired
    Requested,
}

impl ShutdownPhase {
    /// Check if this phase can transition to the target phase
    ///
    /// `Requested → Running` is only reachable through a testing reset.
    pub fn can_transition_to(&self, target: ShutdownPhase) -> bool {
        matches!(
            (self, target),
            (ShutdownPhase::Running, ShutdownPhase::Requested)
                | (ShutdownPhase::Requested, ShutdownPhase::Running)
        )
    }

    pub fn is_requested(&self) -> bool {
        matches!(self, ShutdownPhase::Requested)
    }
}

impl std::fmt::Display for ShutdownPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShutdownPhase::Running => write!(f, "Running"),
            ShutdownPhase::Requested => write!(f, "Requested"),
        }
    }
}

/// How a watchdog task ended
///
/// Exactly one outcome per armed watchdog: either the timeout won the race
/// and the terminate action ran, or a reset arrived first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchdogOutcome {
    /// Timeout elapsed; terminate action was invoked
    Expired,
    /// Reset observed before the timeout; nothing was invoked
    Aborted,
}

impl WatchdogOutcome {
    pub fn terminated(&self) -> bool {
        matches!(self, WatchdogOutcome::Expired)
    }
}

impl std::fmt::Display for WatchdogOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WatchdogOutcome::Expired => write!(f, "expired"),
            WatchdogOutcome::Aborted => write!(f, "aborted"),
        }
    }
}
