//! Declaration-level view of a Go source file.
//!
//! Only what schema generation reads is kept: the package name, top-level
//! type declarations and the fields of struct types.

use super::Pos;

/// A parsed Go source file
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    /// Package name from the package clause
    pub package: String,

    /// Top-level type specs in source order; a grouped `type ( ... )`
    /// declaration contributes one entry per spec
    pub types: Vec<TypeSpec>,
}

impl SourceFile {
    /// All top-level type specs in source order
    pub fn type_specs(&self) -> impl Iterator<Item = &TypeSpec> {
        self.types.iter()
    }
}

/// One `Name Type` or `Name = Type` spec inside a type declaration
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub name: String,
    pub pos: Pos,

    /// Whether the declaration has type parameters
    pub generic: bool,

    /// `type A = B`
    pub alias: bool,

    pub ty: TypeExpr,
}

/// A type expression
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// Unqualified, non-generic type name: `int`, `User`
    Ident(String),

    /// `struct { ... }`
    Struct(StructType),

    /// Any other form, by grammar node kind (`pointer_type`,
    /// `qualified_type`, `generic_type`, `interface_type`, ...)
    Other(&'static str),
}

impl TypeExpr {
    /// The identifier when this is an unqualified, non-generic named type
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            TypeExpr::Ident(name) => Some(name),
            _ => None,
        }
    }
}

/// Field list of a struct type
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructType {
    pub fields: Vec<FieldDecl>,
}

/// One field declaration line, possibly declaring several names
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    /// Declared names; empty for embedded fields
    pub names: Vec<String>,

    /// Base type name of an embedded field (`T`, `*T`, `pkg.T`)
    pub embedded: Option<String>,

    pub ty: TypeExpr,

    /// Decoded tag string literal, if present
    pub tag: Option<String>,

    /// Doc comment lines directly above the field
    pub docs: Vec<String>,

    /// Trailing comment on the field's line
    pub comment: Option<String>,

    pub pos: Pos,
}

impl FieldDecl {
    /// Whether this is an embedded (anonymous) field
    pub fn is_embedded(&self) -> bool {
        self.names.is_empty()
    }

    /// Name used when no other name is available: the first declared name,
    /// or the base type name of an embedded field
    pub fn go_name(&self) -> Option<&str> {
        self.names.first().or(self.embedded.as_ref()).map(String::as_str)
    }
}
