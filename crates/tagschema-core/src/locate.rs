//! Type lookup in a parsed source file

use crate::error::{SchemaGenError, SchemaResult};
use crate::syntax::{SourceFile, StructType, TypeExpr, TypeSpec};
use std::path::Path;

/// Find the first top-level struct type named `type_name`.
///
/// Declarations are visited in source order. A declaration with the right
/// name but a non-struct definition is passed over, so the lookup fails with
/// [`SchemaGenError::NotFound`] only when no struct of that name exists.
pub fn find_struct<'a>(
    file: &'a SourceFile,
    type_name: &str,
    path: &Path,
) -> SchemaResult<(&'a TypeSpec, &'a StructType)> {
    for spec in file.type_specs().filter(|spec| spec.name == type_name) {
        match &spec.ty {
            TypeExpr::Struct(struct_type) => {
                tracing::debug!(
                    type_name,
                    line = spec.pos.line,
                    fields = struct_type.fields.len(),
                    "located struct"
                );
                return Ok((spec, struct_type));
            }
            other => {
                tracing::debug!(
                    type_name,
                    line = spec.pos.line,
                    kind = kind_name(other),
                    "name matches a non-struct type, continuing"
                );
            }
        }
    }

    Err(SchemaGenError::NotFound {
        type_name: type_name.to_string(),
        path: path.to_path_buf(),
    })
}

fn kind_name(ty: &TypeExpr) -> &'static str {
    match ty {
        TypeExpr::Ident(_) => "type_identifier",
        TypeExpr::Struct(_) => "struct_type",
        TypeExpr::Other(kind) => kind,
    }
}
