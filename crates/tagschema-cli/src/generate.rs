//! `tagschema` generation command

use anyhow::{Context, Result};
use std::path::PathBuf;
use tagschema_core::{GeneratorConfig, generate_schema_file};

/// Command-line inputs for one generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub type_name: String,
    pub file: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Resolve the effective generator config: file values, then flag overrides.
pub fn resolve_config(options: &GenerateOptions) -> Result<GeneratorConfig> {
    let mut config = match &options.config {
        Some(path) => GeneratorConfig::load(path).context("Failed to load generator config")?,
        None => GeneratorConfig::default(),
    };

    if let Some(dir) = &options.output_dir {
        config.output_dir = dir.clone();
    }

    Ok(config)
}

/// Generate the schema file, returning its file name.
pub fn run(options: &GenerateOptions) -> Result<String> {
    let config = resolve_config(options)?;

    let generated = generate_schema_file(&options.file, &options.type_name, &config)
        .inspect_err(|e| tracing::debug!(kind = e.kind(), "generation failed"))
        .with_context(|| format!("Failed to generate schema for {}", options.type_name))?;

    Ok(generated.file_name())
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
