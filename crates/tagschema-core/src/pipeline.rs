//! End-to-end generation: source file in, schema file out.

use crate::config::GeneratorConfig;
use crate::error::SchemaResult;
use crate::extract::extract_fields;
use crate::locate::find_struct;
use crate::model::SchemaSpec;
use crate::render::render_schema;
use crate::syntax::{SourceFile, parse_file};
use crate::writer::write_schema;
use std::path::{Path, PathBuf};

/// Result of a successful [`generate_schema_file`] run
#[derive(Debug, Clone)]
pub struct GeneratedSchema {
    /// The schema that was rendered
    pub spec: SchemaSpec,

    /// Full path of the written file
    pub path: PathBuf,
}

impl GeneratedSchema {
    /// File name of the written schema, without the directory
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Locate `type_name` in a parsed file and build its schema model.
///
/// `path` is only used to name the file in a not-found error.
pub fn build_schema(
    file: &SourceFile,
    type_name: &str,
    path: &Path,
    config: &GeneratorConfig,
) -> SchemaResult<SchemaSpec> {
    let (spec, struct_type) = find_struct(file, type_name, path)?;
    let fields = extract_fields(struct_type, config);
    tracing::debug!(type_name, fields = fields.len(), "built schema model");

    Ok(SchemaSpec::new(spec.name.clone(), fields))
}

/// Parse `input`, generate the schema for `type_name` and write it to
/// `config.output_dir`.
///
/// Nothing is written unless every earlier stage succeeds.
pub fn generate_schema_file(
    input: &Path,
    type_name: &str,
    config: &GeneratorConfig,
) -> SchemaResult<GeneratedSchema> {
    let file = parse_file(input)?;
    let spec = build_schema(&file, type_name, input, config)?;
    let text = render_schema(&spec)?;
    let path = write_schema(&config.output_dir, type_name, &text)?;

    tracing::info!(
        input = %input.display(),
        output = %path.display(),
        properties = spec.fields.len(),
        "generated schema"
    );
    Ok(GeneratedSchema { spec, path })
}
