//! Generate command implementation

use crate::registry::build_generator;
use anyhow::{Context, Result};
use protogen_core::{DescriptorSet, GeneratorConfig, output_file_name};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Read and validate a JSON descriptor set
pub fn load_descriptors(path: &Path) -> Result<DescriptorSet> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read descriptors: {path:?}"))?;

    DescriptorSet::from_json(&bytes)
        .with_context(|| format!("Invalid descriptor set: {path:?}"))
}

pub fn run(input: &Path, output: &Path, config: &GeneratorConfig) -> Result<()> {
    let set = load_descriptors(input)?;

    if output == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        for (_, text) in generate_texts(&set, config)? {
            stdout.write_all(text.as_bytes())?;
        }
        return Ok(());
    }

    let written = generate_all(&set, config, output)?;
    for path in &written {
        println!("Wrote {}", path.display());
    }
    info!(files = written.len(), "generation complete");

    Ok(())
}

/// Generate every file of `set`, returning `(schema file name, text)` pairs
/// in input order
pub fn generate_texts(
    set: &DescriptorSet,
    config: &GeneratorConfig,
) -> Result<Vec<(String, String)>> {
    let mut generator = build_generator(config.clone())?;
    let mut texts = Vec::with_capacity(set.files.len());

    for file in &set.files {
        let text = generator.generate_file(file)?;
        texts.push((file.name.clone(), text));
    }

    Ok(texts)
}

/// Generate every file of `set` under `out_dir`, mirroring schema paths.
///
/// Nothing is written when two schema files would share an output path.
pub fn generate_all(
    set: &DescriptorSet,
    config: &GeneratorConfig,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut outputs = Vec::with_capacity(set.files.len());
    let mut seen = HashSet::new();

    for (name, text) in generate_texts(set, config)? {
        let relative = output_file_name(&name, &config.output_suffix);
        let path = out_dir.join(checked_relative(&relative)?);
        if !seen.insert(path.clone()) {
            anyhow::bail!("Schema file {name} maps to an output path already in use: {relative}");
        }
        outputs.push((name, path, text));
    }

    let mut written = Vec::with_capacity(outputs.len());
    for (name, path, text) in outputs {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {parent:?}"))?;
        }
        fs::write(&path, text).with_context(|| format!("Failed to write: {path:?}"))?;

        debug!(schema = %name, output = %path.display(), "wrote generated file");
        written.push(path);
    }

    Ok(written)
}

/// Output paths must stay inside the output directory
fn checked_relative(name: &str) -> Result<&Path> {
    let path = Path::new(name);
    if !path.components().all(|c| matches!(c, Component::Normal(_))) {
        anyhow::bail!("Refusing to write outside the output directory: {name}");
    }
    Ok(path)
}
