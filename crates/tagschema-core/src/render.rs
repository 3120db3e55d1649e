//! JSON Schema rendering from a [`SchemaSpec`].

use crate::error::SchemaResult;
use crate::model::SchemaSpec;
use serde_json::{Value, json};

/// Dialect URI written to every schema
pub const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

/// Render a schema document as pretty-printed JSON text.
///
/// Properties appear in field order. The text ends with a newline.
pub fn render_schema(spec: &SchemaSpec) -> SchemaResult<String> {
    let value = generate_schema_value(spec)?;
    let mut text = serde_json::to_string_pretty(&value)?;
    text.push('\n');

    tracing::debug!(
        title = %spec.title,
        properties = spec.fields.len(),
        bytes = text.len(),
        "rendered schema"
    );
    Ok(text)
}

/// Build the schema document as a JSON value.
pub fn generate_schema_value(spec: &SchemaSpec) -> SchemaResult<Value> {
    let mut properties = serde_json::Map::new();

    for field in &spec.fields {
        let schema = serde_json::to_value(field)?;
        tracing::trace!(name = %field.name, ty = field.ty.as_str(), "property");

        // Map::insert keeps the original slot for an existing key
        if properties.insert(field.name.clone(), schema).is_some() {
            tracing::warn!(
                name = %field.name,
                title = %spec.title,
                "duplicate property name, later field replaces earlier one"
            );
        }
    }

    Ok(json!({
        "$schema": DRAFT_07,
        "title": spec.title,
        "type": "object",
        "properties": properties,
    }))
}
