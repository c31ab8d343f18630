//! Check command implementation

use crate::generate::load_descriptors;
use crate::registry::build_generator;
use anyhow::Result;
use protogen_core::{DescriptorSet, GeneratorConfig};
use protogen_defaulter::{DefaulterConfig, DefaulterPlugin, get_default};
use std::path::Path;

/// Summary of a validated descriptor set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub files: usize,
    pub messages: usize,
    /// Fields carrying a readable declared default
    pub declared_defaults: usize,
    pub passes: Vec<String>,
}

/// Validate `config` against the available passes and summarize `set`
pub fn check_set(set: &DescriptorSet, config: &GeneratorConfig) -> Result<CheckReport> {
    config.validate()?;
    let generator = build_generator(config.clone())?;
    let defaulter: DefaulterConfig = config.section(DefaulterPlugin::NAME)?;

    let declared_defaults = set
        .files
        .iter()
        .flat_map(|file| file.messages())
        .flat_map(|message| message.descriptor.fields.iter())
        .filter(|field| get_default(Some(*field), &defaulter.option_key).is_some())
        .count();

    Ok(CheckReport {
        files: set.files.len(),
        messages: set.message_count(),
        declared_defaults,
        passes: generator
            .plugin_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

pub fn run(input: &Path, config: &GeneratorConfig) -> Result<()> {
    println!("Checking descriptors: {}", input.display());

    let set = load_descriptors(input)?;
    let report = check_set(&set, config)?;

    println!("✓ Files: {}", report.files);
    println!("✓ Messages: {}", report.messages);
    println!("✓ Declared defaults: {}", report.declared_defaults);
    println!("✓ Passes: {}", report.passes.join(", "));
    println!("\nDescriptors are valid!");

    Ok(())
}
