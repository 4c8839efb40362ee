//! Dynamic log level reloading support

use once_cell::sync::OnceCell;
use orderly_core::LogLevel;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::reload;

/// Handle for dynamically reloading the log filter
pub struct ReloadHandle {
    handle: Mutex<Option<reload::Handle<EnvFilter, tracing_subscriber::Registry>>>,
    level: AtomicU8,
}

impl ReloadHandle {
    /// Create a new reload handle
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
            level: AtomicU8::new(LogLevel::Info as u8),
        }
    }

    /// Get the global reload handle
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Set the reload handle (called during initialization)
    pub fn set_handle(
        &self,
        handle: reload::Handle<EnvFilter, tracing_subscriber::Registry>,
        level: LogLevel,
    ) {
        *self.handle.lock() = Some(handle);
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Whether a subscriber has been installed through this handle
    pub fn is_initialized(&self) -> bool {
        self.handle.lock().is_some()
    }

    /// Level most recently applied
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    /// Reload the filter to use a new log level
    pub fn reload_level(&self, level: LogLevel) -> Result<(), String> {
        let guard = self.handle.lock();
        if let Some(handle) = guard.as_ref() {
            handle
                .reload(level_filter(level))
                .map_err(|e| format!("Failed to reload filter: {}", e))?;
            self.level.store(level as u8, Ordering::SeqCst);
            Ok(())
        } else {
            Err("Reload handle not initialized".to_string())
        }
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert LogLevel to a filter enabling that level for every target
pub(crate) fn level_filter(level: LogLevel) -> EnvFilter {
    let directive = match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
        LogLevel::Off => "off",
    };
    EnvFilter::new(directive)
}
