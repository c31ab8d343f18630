//! Dynamic log level reloading support

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use protogen_core::LogLevel;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Registry, reload};

/// Handle for changing the level filter of an installed subscriber
pub struct ReloadHandle {
    handle: Mutex<Option<reload::Handle<LevelFilter, Registry>>>,
    level: Mutex<Option<LogLevel>>,
}

impl ReloadHandle {
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
            level: Mutex::new(None),
        }
    }

    /// Get the process-wide handle used by [`init_logging`](crate::init_logging)
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Attach the filter handle of a freshly built subscriber
    pub fn set_handle(&self, handle: reload::Handle<LevelFilter, Registry>, level: LogLevel) {
        *self.handle.lock() = Some(handle);
        *self.level.lock() = Some(level);
    }

    pub fn is_initialized(&self) -> bool {
        self.handle.lock().is_some()
    }

    /// Level currently applied, if a subscriber is attached
    pub fn current_level(&self) -> Option<LogLevel> {
        *self.level.lock()
    }

    /// Swap the filter to `level`
    pub fn reload_level(&self, level: LogLevel) -> Result<(), String> {
        let guard = self.handle.lock();
        let Some(handle) = guard.as_ref() else {
            return Err("Reload handle not initialized".to_string());
        };

        handle
            .reload(convert_level_to_filter(level))
            .map_err(|e| format!("Failed to reload filter: {e}"))?;
        *self.level.lock() = Some(level);
        Ok(())
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn convert_level_to_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

#[cfg(test)]
#[path = "reload/reload_tests.rs"]
mod reload_tests;
