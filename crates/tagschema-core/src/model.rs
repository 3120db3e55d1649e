//! Schema model: the ordered description rendered into JSON Schema.

use crate::syntax::TypeExpr;
use serde::Serialize;

/// JSON Schema primitive type of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Integer,
    Number,
    Boolean,
}

impl SchemaType {
    /// Infer the schema type from a declared Go field type.
    ///
    /// Only plain identifiers are recognized; anything else (qualified,
    /// pointer, slice, map, struct, ...) falls back to `string`.
    pub fn from_go_type(ty: &TypeExpr) -> Self {
        match ty.as_ident() {
            Some("string") => SchemaType::String,
            Some("int" | "int32" | "int64") => SchemaType::Integer,
            Some("float32" | "float64") => SchemaType::Number,
            Some("bool") => SchemaType::Boolean,
            _ => SchemaType::String,
        }
    }

    /// JSON Schema keyword for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Integer => "integer",
            SchemaType::Number => "number",
            SchemaType::Boolean => "boolean",
        }
    }
}

/// One property of the generated schema.
///
/// Serializes to the property's schema object; member order follows the
/// field order below and unset members are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Property name; the key of the schema object, not part of it
    #[serde(skip)]
    pub name: String,

    #[serde(rename = "type")]
    pub ty: SchemaType,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,

    #[serde(rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldSpec {
    /// A property with only a name and a type
    pub fn new(name: impl Into<String>, ty: SchemaType) -> Self {
        Self {
            name: name.into(),
            ty,
            required: false,
            min_length: None,
            format: None,
            description: None,
        }
    }
}

/// Schema for one struct type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSpec {
    /// Struct name, used as the schema title
    pub title: String,

    /// Properties in source declaration order
    pub fields: Vec<FieldSpec>,
}

impl SchemaSpec {
    pub fn new(title: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }
}
