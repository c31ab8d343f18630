//! protogen.toml loading

use anyhow::{Context, Result};
use protogen_core::{GeneratorConfig, LogLevel};
use protogen_logging::ReloadHandle;
use std::path::Path;
use tracing::debug;

/// Configuration file read when no `-c` is given
pub const DEFAULT_CONFIG_FILE: &str = "protogen.toml";

/// Load the configuration from `path`, or from `./protogen.toml` when it
/// exists, or fall back to defaults
pub fn load(path: Option<&Path>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => from_file(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                from_file(default)
            } else {
                debug!("no {DEFAULT_CONFIG_FILE}, using defaults");
                Ok(GeneratorConfig::default())
            }
        }
    }
}

/// Load and validate a configuration file
pub fn from_file(path: impl AsRef<Path>) -> Result<GeneratorConfig> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read configuration: {:?}", path.as_ref()))?;

    parse(&content).with_context(|| format!("Invalid configuration: {:?}", path.as_ref()))
}

/// Parse and validate configuration text
pub fn parse(content: &str) -> Result<GeneratorConfig> {
    let config: GeneratorConfig =
        toml::from_str(content).context("Failed to parse configuration")?;
    config.validate()?;
    Ok(config)
}

/// Apply the configured level (or `debug` when verbose) to the installed
/// subscriber and return it
pub fn apply_log_level(config: &GeneratorConfig, verbose: bool) -> Result<LogLevel> {
    let level = if verbose {
        LogLevel::Debug
    } else {
        config.level()?
    };

    if let Err(err) = ReloadHandle::global().reload_level(level) {
        debug!(%err, "log level not applied");
    }
    Ok(level)
}
