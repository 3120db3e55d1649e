//! Error types for schema generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for schema generation operations
pub type SchemaResult<T> = Result<T, SchemaGenError>;

/// Error type for schema generation operations
#[derive(Error, Debug)]
pub enum SchemaGenError {
    /// Source file is not valid Go syntax
    #[error("{}:{line}:{column}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Named type is missing or is not a struct
    #[error("type {type_name} not found in {}", path.display())]
    NotFound { type_name: String, path: PathBuf },

    /// Schema could not be rendered
    #[error("template execution failed: {0}")]
    Render(String),

    /// Reading the source or writing the schema failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generator configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl SchemaGenError {
    /// Build an I/O error tagged with the path that was being accessed
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SchemaGenError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short, stable name of the error kind, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            SchemaGenError::Parse { .. } => "parse",
            SchemaGenError::NotFound { .. } => "not_found",
            SchemaGenError::Render(_) => "render",
            SchemaGenError::Io { .. } => "io",
            SchemaGenError::Config(_) => "config",
        }
    }
}

impl From<serde_json::Error> for SchemaGenError {
    fn from(err: serde_json::Error) -> Self {
        SchemaGenError::Render(err.to_string())
    }
}

impl From<toml::de::Error> for SchemaGenError {
    fn from(err: toml::de::Error) -> Self {
        SchemaGenError::Config(err.to_string())
    }
}
