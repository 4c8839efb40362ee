//! Global subscriber installation

use crate::reload::{ReloadHandle, level_filter};
use orderly_core::LogLevel;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::reload;

/// Initialize the logging system
///
/// Installs a `fmt` subscriber whose filter is reloadable through
/// [`ReloadHandle::global`]. `RUST_LOG`, when set and valid, takes
/// precedence over `level` at startup. Later calls are no-ops.
pub fn init_logging(level: LogLevel) {
    use tracing_subscriber::prelude::*;

    let handle = ReloadHandle::global();
    if handle.is_initialized() {
        return;
    }

    let filter = initial_filter(level, std::env::var("RUST_LOG").ok().as_deref());
    let (filter_layer, reload_handle) = reload::Layer::new(filter);

    let subscriber = tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_target(true));

    // Ignore error if another subscriber is already the global default
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        handle.set_handle(reload_handle, level);
    }
}

fn initial_filter(level: LogLevel, env: Option<&str>) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| level_filter(level))
}
