//! Passes known to the CLI

use protogen_core::{Generator, GeneratorConfig, GeneratorError, GeneratorPlugin, GeneratorResult};
use protogen_defaulter::DefaulterPlugin;

const PASS_NAMES: &[&str] = &[DefaulterPlugin::NAME];

/// Create a fresh pass by name
pub fn build_pass(name: &str) -> Option<Box<dyn GeneratorPlugin>> {
    match name {
        DefaulterPlugin::NAME => Some(Box::new(DefaulterPlugin::new())),
        _ => None,
    }
}

/// Names and descriptions of every available pass
pub fn available_passes() -> Vec<(&'static str, &'static str)> {
    PASS_NAMES
        .iter()
        .filter_map(|name| build_pass(name))
        .map(|pass| (pass.name(), pass.description()))
        .collect()
}

/// Build and initialize a driver running `config.passes` in order
pub fn build_generator(config: GeneratorConfig) -> GeneratorResult<Generator> {
    let names = config.passes.clone();
    let mut generator = Generator::new(config);

    for name in &names {
        let pass = build_pass(name).ok_or_else(|| GeneratorError::UnknownPass(name.clone()))?;
        generator.register(pass)?;
    }

    generator.init()?;
    Ok(generator)
}
