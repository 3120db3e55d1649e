//! Generator configuration

use crate::error::{SchemaGenError, SchemaResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings that control schema generation.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory the `<type>.schema.json` file is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Strip `json` tag options such as `,omitempty` from property names.
    ///
    /// Off by default: the full tag value is used as the property name.
    #[serde(default)]
    pub strip_json_options: bool,

    /// Name a property after its Go field when the `json` tag value is
    /// missing or empty.
    ///
    /// Off by default: such a field gets the property name `""`.
    #[serde(default)]
    pub fallback_to_field_name: bool,

    /// Use a field's doc comment (or trailing comment) as its description
    /// when the schema tag does not provide one
    #[serde(default)]
    pub descriptions_from_comments: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            strip_json_options: false,
            fallback_to_field_name: false,
            descriptions_from_comments: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> SchemaResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SchemaResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SchemaGenError::io(path, e))?;

        let config = Self::from_toml_str(&content).map_err(|e| match e {
            SchemaGenError::Config(message) => {
                SchemaGenError::Config(format!("{}: {message}", path.display()))
            }
            other => other,
        })?;

        tracing::debug!(path = %path.display(), ?config, "loaded generator config");
        Ok(config)
    }
}
