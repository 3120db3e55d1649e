//! tagschema-core - JSON Schema generation from tagged Go structs
//!
//! This crate reads a Go source file, finds a named struct type and turns
//! the field tags into a draft-07 JSON Schema document:
//! - [`parse_file`] / [`parse_source`] build the declaration-level syntax tree
//! - [`find_struct`] locates the target struct
//! - [`extract_fields`] reads `json:"..."` and `schema:"..."` tags
//! - [`render_schema`] produces the JSON text
//! - [`write_schema`] persists it as `<type>.schema.json`
//!
//! [`generate_schema_file`] runs the whole pipeline.
//!
//! # Examples
//!
//! ```rust
//! use std::path::Path;
//! use tagschema_core::{GeneratorConfig, build_schema, parse_source, render_schema};
//!
//! let source = "package main\n\ntype User struct {\n\tID int `json:\"id\" schema:\"required\"`\n}\n";
//! let file = parse_source(source).unwrap();
//! let spec = build_schema(&file, "User", Path::new("user.go"), &GeneratorConfig::default()).unwrap();
//! let text = render_schema(&spec).unwrap();
//!
//! assert!(text.contains("\"required\": true"));
//! ```

mod config;
mod error;
mod extract;
mod locate;
mod model;
mod pipeline;
mod render;
pub mod syntax;
pub mod tags;
mod writer;

pub use config::GeneratorConfig;
pub use error::{SchemaGenError, SchemaResult};
pub use extract::{extract_field, extract_fields};
pub use locate::find_struct;
pub use model::{FieldSpec, SchemaSpec, SchemaType};
pub use pipeline::{GeneratedSchema, build_schema, generate_schema_file};
pub use render::{DRAFT_07, generate_schema_value, render_schema};
pub use syntax::{SyntaxError, parse_file, parse_source};
pub use writer::{OUTPUT_SUFFIX, output_file_name, write_schema};
