//! `Default()` method emission

use crate::config::DefaulterConfig;
use crate::extract::get_default;
use protogen_core::naming::{camel_case_slice, go_field_name, receiver_binding};
use protogen_core::{
    CodeWriter, FieldDescriptor, FileDescriptor, GeneratorContext, GeneratorError,
    GeneratorPlugin, GeneratorResult, ScopedMessage, TypeFamily,
};
use tracing::debug;

/// The defaulter pass
///
/// Emits one `Default()` method per message of each schema file.
#[derive(Debug, Default)]
pub struct DefaulterPlugin {
    config: Option<DefaulterConfig>,
}

impl DefaulterPlugin {
    pub const NAME: &'static str = "defaulter";

    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pass that is already bound to `config`
    pub fn with_config(config: DefaulterConfig) -> Self {
        Self {
            config: Some(config),
        }
    }
}

impl GeneratorPlugin for DefaulterPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn init(&mut self, ctx: &GeneratorContext) -> GeneratorResult<()> {
        let config: DefaulterConfig = ctx.config.section(Self::NAME)?;
        config.validate()?;
        self.config = Some(config);
        Ok(())
    }

    fn generate(&mut self, file: &FileDescriptor, out: &mut CodeWriter) -> GeneratorResult<()> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| GeneratorError::InvalidState {
                expected: "initialized defaulter".to_string(),
                actual: "uninitialized defaulter".to_string(),
            })?;

        for message in file.messages() {
            emit_defaults_method(&message, config, out);
        }
        Ok(())
    }

    fn description(&self) -> &'static str {
        "Default() methods assigning schema-declared field defaults"
    }
}

/// Write the `Default()` method for one message, surrounded by blank lines
pub fn emit_defaults_method(
    message: &ScopedMessage<'_>,
    config: &DefaulterConfig,
    out: &mut CodeWriter,
) {
    let type_name = camel_case_slice(&message.path);
    let receiver = receiver_binding(&type_name);
    let descriptor = message.descriptor;

    debug!(
        message = %type_name,
        fields = descriptor.fields.len(),
        "emitting defaults method"
    );

    out.blank();
    let open = format!("func ({receiver} *{type_name}) {}() {{", config.method_name);
    out.block(&open, "}", |w| {
        if descriptor.field(&config.identity_field).is_some() {
            w.line(format!(
                "{receiver}.{} = \"{}\"",
                config.kind_field, descriptor.name
            ));
            w.line(format!(
                "{receiver}.{} = {}",
                config.api_version_field, config.api_version_expr
            ));
        }

        for field in &descriptor.fields {
            if let Some(line) = default_assignment(&receiver, field, &config.option_key) {
                w.line(line);
            }
        }
    });
    out.blank();
}

/// The `Default()` method for one message as text
pub fn render_defaults_method(message: &ScopedMessage<'_>, config: &DefaulterConfig) -> String {
    let mut out = CodeWriter::new();
    emit_defaults_method(message, config, &mut out);
    out.into_string()
}

fn default_assignment(receiver: &str, field: &FieldDescriptor, key: &str) -> Option<String> {
    let value = get_default(Some(field), key)?;
    let name = go_field_name(&field.name);

    match field.family() {
        TypeFamily::String => Some(format!("{receiver}.{name} = \"{value}\"")),
        TypeFamily::Scalar => Some(format!("{receiver}.{name} = {value}")),
        TypeFamily::Unsupported => {
            debug!(
                field = %field.name,
                ty = ?field.ty,
                label = ?field.label,
                "ignoring default on unsupported field"
            );
            None
        }
    }
}

#[cfg(test)]
#[path = "emit/emit_tests.rs"]
mod emit_tests;
