//! protogen-core - Descriptor model, pass trait, and generation driver
//!
//! This crate provides the foundational types shared by protogen passes:
//! - [`FileDescriptor`] and friends, the read-only schema model passes consume
//! - [`GeneratorPlugin`] trait for implementing a generation pass
//! - [`Generator`], the driver that runs an explicit, ordered list of passes
//! - [`CodeWriter`] for line-oriented source emission
//! - [`GeneratorError`] for error handling
//! - [`GeneratorConfig`] for driver and pass configuration

mod config;
mod descriptor;
mod error;
mod generator;
mod lifecycle;
pub mod naming;
pub mod options;
mod plugin;
mod writer;

pub use config::GeneratorConfig;
pub use descriptor::{
    DescriptorSet, FieldDescriptor, FieldType, FileDescriptor, Label, MessageDescriptor,
    ScopedMessage, TypeFamily,
};
pub use error::{GeneratorError, GeneratorResult};
pub use generator::{Generator, output_file_name};
pub use lifecycle::LifecycleState;
pub use options::try_get;
pub use plugin::{GeneratorContext, GeneratorPlugin};
pub use writer::CodeWriter;

/// Log levels understood by the configuration layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    /// Parse a level name, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" => Some(LogLevel::Off),
            _ => None,
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

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CodeWriter, FieldDescriptor, FieldType, FileDescriptor, Generator, GeneratorConfig,
        GeneratorContext, GeneratorError, GeneratorPlugin, GeneratorResult, Label, LogLevel,
        MessageDescriptor, ScopedMessage, TypeFamily,
    };
}
