//! Field extraction: struct fields and their tags to [`FieldSpec`]s.

use crate::config::GeneratorConfig;
use crate::model::{FieldSpec, SchemaType};
use crate::syntax::{FieldDecl, StructType};
use crate::tags::{SchemaOptions, StructTag};

/// `json` tag value that excludes a field
const SKIP_MARKER: &str = "-";

/// Extract the schema properties of a struct, in declaration order.
///
/// Fields without a tag and fields tagged `json:"-"` produce nothing.
pub fn extract_fields(struct_type: &StructType, config: &GeneratorConfig) -> Vec<FieldSpec> {
    struct_type
        .fields
        .iter()
        .filter_map(|field| extract_field(field, config))
        .collect()
}

/// Extract one field; `None` when the field is excluded from the schema
pub fn extract_field(field: &FieldDecl, config: &GeneratorConfig) -> Option<FieldSpec> {
    let Some(raw_tag) = field.tag.as_deref() else {
        tracing::trace!(field = ?field.go_name(), "no tag, skipping");
        return None;
    };

    let tag = StructTag::parse(raw_tag);
    let json = tag.get("json");
    if json == Some(SKIP_MARKER) {
        tracing::trace!(field = ?field.go_name(), "json:\"-\", skipping");
        return None;
    }

    let name = property_name(json, field, config);

    let options = SchemaOptions::parse(tag.get("schema").unwrap_or_default());
    let description = options.description.or_else(|| {
        config
            .descriptions_from_comments
            .then(|| comment_description(field))
            .flatten()
    });

    let spec = FieldSpec {
        name,
        ty: SchemaType::from_go_type(&field.ty),
        required: options.required,
        min_length: options.min_length,
        format: options.format,
        description,
    };
    tracing::trace!(?spec, "extracted field");

    Some(spec)
}

/// Property name from the `json` tag value, used verbatim unless the config
/// asks for options to be stripped or for a Go-name fallback.
fn property_name(json: Option<&str>, field: &FieldDecl, config: &GeneratorConfig) -> String {
    let tagged = match json {
        Some(value) if config.strip_json_options => value.split(',').next().unwrap_or_default(),
        Some(value) => value,
        None => "",
    };

    match field.go_name() {
        Some(go_name) if tagged.is_empty() && config.fallback_to_field_name => go_name.to_string(),
        _ => tagged.to_string(),
    }
}

fn comment_description(field: &FieldDecl) -> Option<String> {
    if field.docs.is_empty() {
        field.comment.clone()
    } else {
        Some(field.docs.join("\n"))
    }
}
