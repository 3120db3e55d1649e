//! Go source parsing.
//!
//! Source text is parsed with the tree-sitter Go grammar and the concrete
//! syntax tree is lowered into [`ast::SourceFile`]. Only the declaration
//! level of the language is kept; see [`ast`] for what survives.
//!
//! # Examples
//!
//! ```rust
//! use tagschema_core::syntax::parse_source;
//!
//! let file = parse_source("package main\n\ntype User struct {\n\tID int `json:\"id\"`\n}\n").unwrap();
//!
//! assert_eq!(file.package, "main");
//! assert_eq!(file.type_specs().count(), 1);
//! ```

pub mod ast;
mod lower;

use crate::error::{SchemaGenError, SchemaResult};
use std::path::Path;
use thiserror::Error;
use tree_sitter::{Node, Parser};

pub use ast::{FieldDecl, SourceFile, StructType, TypeExpr, TypeSpec};

/// 1-based source position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Pos {
    pub line: usize,
    pub column: usize,
}

impl Pos {
    pub const START: Pos = Pos { line: 1, column: 1 };

    /// Start position of a syntax node; tree-sitter rows and columns are 0-based
    pub fn of(node: &Node<'_>) -> Self {
        let point = node.start_position();
        Self {
            line: point.row + 1,
            column: point.column + 1,
        }
    }
}

/// A syntax error with its position in the source text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}:{}: {message}", pos.line, pos.column)]
pub struct SyntaxError {
    pub pos: Pos,
    pub message: String,
}

impl SyntaxError {
    pub fn new(pos: Pos, message: impl Into<String>) -> Self {
        Self {
            pos,
            message: message.into(),
        }
    }

    /// Attach the file path, producing the pipeline's parse error
    pub fn into_parse_error(self, path: &Path) -> SchemaGenError {
        SchemaGenError::Parse {
            path: path.to_path_buf(),
            line: self.pos.line,
            column: self.pos.column,
            message: self.message,
        }
    }
}

/// Parse Go source text
pub fn parse_source(source: &str) -> Result<SourceFile, SyntaxError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| SyntaxError::new(Pos::START, format!("cannot load Go grammar: {e}")))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| SyntaxError::new(Pos::START, "parsing was cancelled"))?;
    let root = tree.root_node();

    if root.has_error() {
        return Err(first_error(root)
            .map(|node| syntax_error_at(&node, source))
            .unwrap_or_else(|| SyntaxError::new(Pos::of(&root), "syntax error")));
    }

    lower::lower_file(root, source)
}

/// Read and parse a Go source file
pub fn parse_file(path: &Path) -> SchemaResult<SourceFile> {
    let bytes = std::fs::read(path).map_err(|e| SchemaGenError::io(path, e))?;
    let source = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        SyntaxError::new(position_after(valid), "invalid UTF-8 encoding").into_parse_error(path)
    })?;

    let file = parse_source(&source).map_err(|e| e.into_parse_error(path))?;

    tracing::debug!(
        path = %path.display(),
        package = %file.package,
        types = file.types.len(),
        "parsed source file"
    );

    Ok(file)
}

/// First `ERROR` or `MISSING` node in document order
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn syntax_error_at(node: &Node<'_>, source: &str) -> SyntaxError {
    let message = if node.is_missing() {
        format!("expected '{}'", node.kind())
    } else {
        let text = lower::node_text(node, source);
        let snippet: String = text.lines().next().unwrap_or_default().chars().take(24).collect();
        format!("syntax error near {snippet:?}")
    };
    SyntaxError::new(Pos::of(node), message)
}

/// Position of the byte following `prefix`
fn position_after(prefix: &[u8]) -> Pos {
    let line_start = prefix
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    Pos {
        line: prefix.iter().filter(|&&b| b == b'\n').count() + 1,
        column: prefix.len() - line_start + 1,
    }
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod syntax_tests;
