//! protogen-logging - Diagnostic logging for the protogen driver
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr subscriber once per process
//! - [`build_subscriber`] for a subscriber with a caller-chosen writer
//! - [`ReloadHandle`] for changing the level after installation
//!
//! Generated source is never written through the log.

mod layer;
mod reload;

pub use layer::{build_subscriber, init_logging};
pub use protogen_core::LogLevel;
pub use reload::ReloadHandle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging};
}
