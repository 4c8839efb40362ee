//! orderly-runtime - Shutdown coordination on Tokio
//!
//! This crate provides:
//! - [`ShutdownCoordinator`] owning the exactly-once trigger, the cleanup
//!   callback registry, the watchdog and the testing reset
//! - [`ShutdownSignal`] broadcast handle that fires once per lifecycle
//! - [`ShutdownContext`] context-style view of the same broadcast
//! - [`global`] process-wide functions over a single coordinator

mod broadcast;
mod callback;
mod context;
mod coordinator;
pub mod global;
mod source;
mod watchdog;

pub use broadcast::ShutdownSignal;
pub use callback::Callback;
pub use context::{ContextError, ShutdownContext};
pub use coordinator::ShutdownCoordinator;
pub use watchdog::{TerminateFn, default_terminate};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Callback, ContextError, ShutdownContext, ShutdownCoordinator, ShutdownSignal,
        TerminateFn,
    };
}
