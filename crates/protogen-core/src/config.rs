//! Driver and pass configuration types

use crate::{GeneratorError, GeneratorResult, LogLevel};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Configuration shared by the driver and every registered pass
///
/// Pass-specific settings live in named sections (e.g. `[defaulter]` in
/// `protogen.toml`) and are decoded by the pass itself via [`section`].
///
/// [`section`]: GeneratorConfig::section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Suffix replacing `.proto` in generated file names
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// Passes to run, in order
    #[serde(default = "default_passes")]
    pub passes: Vec<String>,

    /// Pass-specific sections, keyed by pass name. Every other top-level
    /// key lands here too, so [`validate`](GeneratorConfig::validate)
    /// rejects non-table entries.
    #[serde(flatten)]
    pub sections: serde_json::Map<String, serde_json::Value>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_output_suffix() -> String {
    ".pb.defaults.go".to_string()
}

fn default_passes() -> Vec<String> {
    vec!["defaulter".to_string()]
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output_suffix: default_output_suffix(),
            passes: default_passes(),
            sections: serde_json::Map::new(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// Decode a pass section, falling back to the section type's defaults
    /// when the section is absent
    pub fn section<T: DeserializeOwned + Default>(&self, name: &str) -> GeneratorResult<T> {
        match self.sections.get(name) {
            None | Some(serde_json::Value::Null) => Ok(T::default()),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| GeneratorError::ConfigError(format!("[{name}]: {e}"))),
        }
    }

    /// Store a pass section, replacing any previous value
    pub fn set_section<T: Serialize>(&mut self, name: &str, value: T) -> GeneratorResult<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| GeneratorError::ConfigError(format!("[{name}]: {e}")))?;
        self.sections.insert(name.to_string(), value);
        Ok(())
    }

    /// Parsed log level
    pub fn level(&self) -> GeneratorResult<LogLevel> {
        LogLevel::parse(&self.log_level).ok_or_else(|| {
            GeneratorError::ConfigError(format!("unknown log level: {}", self.log_level))
        })
    }

    /// Validate driver-level settings
    pub fn validate(&self) -> GeneratorResult<()> {
        self.level()?;

        if self.output_suffix.trim().is_empty() {
            return Err(GeneratorError::ConfigError(
                "output_suffix cannot be empty".to_string(),
            ));
        }

        if self.passes.is_empty() {
            return Err(GeneratorError::ConfigError(
                "at least one pass must be configured".to_string(),
            ));
        }

        if let Some(empty) = self.passes.iter().find(|p| p.trim().is_empty()) {
            return Err(GeneratorError::ConfigError(format!(
                "pass name cannot be empty: {empty:?}"
            )));
        }

        for (name, value) in &self.sections {
            if !value.is_object() {
                return Err(GeneratorError::ConfigError(format!(
                    "unknown setting: {name}"
                )));
            }
            if !self.passes.iter().any(|p| p == name) {
                warn!(section = %name, "configuration section for a pass that is not enabled");
            }
        }

        Ok(())
    }
}
