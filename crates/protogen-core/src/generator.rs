//! Generation driver: runs an explicit, ordered list of passes over schema files

use crate::{
    CodeWriter, FileDescriptor, GeneratorConfig, GeneratorContext, GeneratorError,
    GeneratorPlugin, GeneratorResult, LifecycleState,
};
use tracing::{debug, info};

/// Drives registered passes over schema files.
///
/// Passes run in registration order; there is no global registry.
///
/// # Example
///
/// ```ignore
/// let mut generator = Generator::new(GeneratorConfig::default())
///     .with_plugin(DefaulterPlugin::new())?;
/// generator.init()?;
/// for file in &set.files {
///     let text = generator.generate_file(file)?;
/// }
/// ```
pub struct Generator {
    ctx: GeneratorContext,
    plugins: Vec<Box<dyn GeneratorPlugin>>,
}

impl Generator {
    /// Create a driver with no passes
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            ctx: GeneratorContext::new(config),
            plugins: Vec::new(),
        }
    }

    /// Register a pass, builder style
    pub fn with_plugin(mut self, plugin: impl GeneratorPlugin + 'static) -> GeneratorResult<Self> {
        self.register(Box::new(plugin))?;
        Ok(self)
    }

    /// Register a pass after any already registered
    pub fn register(&mut self, plugin: Box<dyn GeneratorPlugin>) -> GeneratorResult<()> {
        let state = self.ctx.state();
        if !state.can_register() {
            return Err(GeneratorError::InvalidState {
                expected: LifecycleState::Registered.to_string(),
                actual: state.to_string(),
            });
        }

        let name = plugin.name();
        if self.plugins.iter().any(|p| p.name() == name) {
            return Err(GeneratorError::DuplicatePass(name.to_string()));
        }

        debug!(pass = name, "registered pass");
        self.plugins.push(plugin);
        Ok(())
    }

    /// Names of registered passes, in run order
    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.ctx.config
    }

    pub fn state(&self) -> LifecycleState {
        self.ctx.state()
    }

    /// Initialize every pass once, in order
    pub fn init(&mut self) -> GeneratorResult<()> {
        let state = self.ctx.state();
        if !state.can_transition_to(LifecycleState::Initialized) {
            return Err(GeneratorError::InvalidState {
                expected: LifecycleState::Registered.to_string(),
                actual: state.to_string(),
            });
        }

        for plugin in &mut self.plugins {
            if let Err(err) = plugin.init(&self.ctx) {
                self.ctx.set_state(LifecycleState::Failed);
                return Err(GeneratorError::InitializationFailed(format!(
                    "{}: {err}",
                    plugin.name()
                )));
            }
        }

        self.ctx.transition_to(LifecycleState::Initialized)?;
        info!(passes = self.plugins.len(), "generator initialized");
        Ok(())
    }

    /// Run every pass over one file and return the generated source text
    pub fn generate_file(&mut self, file: &FileDescriptor) -> GeneratorResult<String> {
        let state = self.ctx.state();
        if !state.can_generate() {
            return Err(GeneratorError::InvalidState {
                expected: LifecycleState::Initialized.to_string(),
                actual: state.to_string(),
            });
        }

        let mut out = CodeWriter::new();
        out.line("// Code generated by protogen. DO NOT EDIT.");
        out.line(format!("// source: {}", file.name));
        out.blank();
        out.line(format!("package {}", file.go_package()));

        for plugin in &mut self.plugins {
            debug!(pass = plugin.name(), file = %file.name, "running pass");
            if let Err(err) = plugin.generate(file, &mut out) {
                self.ctx.set_state(LifecycleState::Failed);
                return Err(GeneratorError::GenerationFailed(format!(
                    "{} on {}: {err}",
                    plugin.name(),
                    file.name
                )));
            }
        }

        Ok(out.into_string())
    }
}

/// Output file name for a schema file: `.proto` replaced by `suffix`
///
/// # Examples
///
/// ```
/// use protogen_core::output_file_name;
///
/// assert_eq!(output_file_name("core/v2/check.proto", ".pb.defaults.go"), "core/v2/check.pb.defaults.go");
/// assert_eq!(output_file_name("schema", ".go"), "schema.go");
/// ```
pub fn output_file_name(schema_file: &str, suffix: &str) -> String {
    let stem = schema_file.strip_suffix(".proto").unwrap_or(schema_file);
    format!("{stem}{suffix}")
}
