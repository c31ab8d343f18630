//! `[defaulter]` configuration section

use crate::extract::DEFAULT_OPTION_KEY;
use protogen_core::{GeneratorError, GeneratorResult};
use serde::{Deserialize, Serialize};

/// Settings for the defaulter pass
///
/// ```toml
/// [defaulter]
/// api_version_expr = "SchemeGroupVersion.GroupVersionString()"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaulterConfig {
    /// Name of the generated method
    pub method_name: String,

    /// Options key holding a field's declared default
    pub option_key: String,

    /// A message with a field of this name gets the identity preamble
    pub identity_field: String,

    /// Struct field stamped with the message's simple name
    pub kind_field: String,

    /// Struct field stamped with `api_version_expr`
    pub api_version_field: String,

    /// Go expression evaluating to the current group/version string.
    /// Emitted verbatim.
    pub api_version_expr: String,
}

impl Default for DefaulterConfig {
    fn default() -> Self {
        Self {
            method_name: "Default".to_string(),
            option_key: DEFAULT_OPTION_KEY.to_string(),
            identity_field: "metadata".to_string(),
            kind_field: "Kind".to_string(),
            api_version_field: "ApiVersion".to_string(),
            api_version_expr: "SchemeGroupVersion.GroupVersionString()".to_string(),
        }
    }
}

impl DefaulterConfig {
    /// Reject blank settings; every one of them ends up in emitted code
    pub fn validate(&self) -> GeneratorResult<()> {
        let settings = [
            ("method_name", &self.method_name),
            ("option_key", &self.option_key),
            ("identity_field", &self.identity_field),
            ("kind_field", &self.kind_field),
            ("api_version_field", &self.api_version_field),
            ("api_version_expr", &self.api_version_expr),
        ];

        for (key, value) in settings {
            if value.trim().is_empty() {
                return Err(GeneratorError::ConfigError(format!(
                    "[defaulter] {key} cannot be empty"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use protogen_core::GeneratorConfig;

    #[test]
    fn DefaulterConfig___default___matches_go_conventions() {
        let config = DefaulterConfig::default();

        assert_eq!(config.method_name, "Default");
        assert_eq!(config.option_key, "default");
        assert_eq!(config.identity_field, "metadata");
        assert_eq!(config.kind_field, "Kind");
        assert_eq!(config.api_version_field, "ApiVersion");
        assert_eq!(
            config.api_version_expr,
            "SchemeGroupVersion.GroupVersionString()"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn DefaulterConfig___section___partial_overrides_keep_other_defaults() {
        let json = r#"{"defaulter": {"api_version_expr": "apiVersion()"}}"#;
        let config = GeneratorConfig::from_json(json.as_bytes()).unwrap();

        let section: DefaulterConfig = config.section("defaulter").unwrap();

        assert_eq!(section.api_version_expr, "apiVersion()");
        assert_eq!(section.method_name, "Default");
    }

    #[test]
    fn DefaulterConfig___validate___rejects_blank_setting() {
        let config = DefaulterConfig {
            kind_field: " ".to_string(),
            ..DefaulterConfig::default()
        };

        let err = config.validate().unwrap_err();

        assert_eq!(
            err.to_string(),
            "configuration error: [defaulter] kind_field cannot be empty"
        );
    }

    #[test]
    fn DefaulterConfig___section___unknown_key_rejected() {
        let json = r#"{"defaulter": {"api_version_exp": "X()"}}"#;
        let config = GeneratorConfig::from_json(json.as_bytes()).unwrap();

        let err = config.section::<DefaulterConfig>("defaulter").unwrap_err();

        assert!(err.to_string().contains("unknown field `api_version_exp`"), "{err}");
    }
}
