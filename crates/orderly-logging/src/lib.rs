//! orderly-logging - Tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] to install a global `fmt` subscriber
//! - [`ReloadHandle`] to change the log level at runtime

mod init;
mod reload;

pub use init::init_logging;
pub use orderly_core::LogLevel;
pub use reload::ReloadHandle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging};
}
