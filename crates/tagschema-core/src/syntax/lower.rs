//! Lowering from the tree-sitter Go syntax tree to [`SourceFile`].

use super::ast::{FieldDecl, SourceFile, StructType, TypeExpr, TypeSpec};
use super::{Pos, SyntaxError};
use tree_sitter::Node;

/// Source text covered by a node
pub(super) fn node_text<'s>(node: &Node<'_>, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or_default()
}

fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// Lower an error-free `source_file` node.
///
/// The file must open with a package clause. Only top-level
/// `type_declaration` nodes are kept, so types declared inside function
/// bodies are not visible.
pub(super) fn lower_file(root: Node<'_>, source: &str) -> Result<SourceFile, SyntaxError> {
    let lower = Lower { source };
    let children = named_children(&root);
    let mut decls = children.iter().filter(|node| node.kind() != "comment");

    let package = match decls.next() {
        Some(clause) if clause.kind() == "package_clause" => named_children(clause)
            .first()
            .map(|name| lower.text(name).to_string())
            .unwrap_or_default(),
        Some(other) => {
            return Err(SyntaxError::new(
                Pos::of(other),
                format!("expected 'package', found {}", other.kind()),
            ));
        }
        None => return Err(SyntaxError::new(Pos::START, "expected 'package', found EOF")),
    };

    let types = decls
        .filter(|node| node.kind() == "type_declaration")
        .flat_map(|decl| named_children(decl))
        .filter(|spec| matches!(spec.kind(), "type_spec" | "type_alias"))
        .map(|spec| lower.type_spec(&spec))
        .collect();

    Ok(SourceFile { package, types })
}

struct Lower<'s> {
    source: &'s str,
}

impl<'s> Lower<'s> {
    fn text(&self, node: &Node<'_>) -> &'s str {
        node_text(node, self.source)
    }

    fn type_spec(&self, spec: &Node<'_>) -> TypeSpec {
        let name = spec
            .child_by_field_name("name")
            .map(|n| self.text(&n).to_string())
            .unwrap_or_default();
        let ty = spec
            .child_by_field_name("type")
            .map_or(TypeExpr::Other("missing"), |t| self.type_expr(&t));

        TypeSpec {
            name,
            pos: Pos::of(spec),
            generic: spec.child_by_field_name("type_parameters").is_some(),
            alias: spec.kind() == "type_alias",
            ty,
        }
    }

    fn type_expr(&self, node: &Node<'_>) -> TypeExpr {
        match node.kind() {
            "type_identifier" => TypeExpr::Ident(self.text(node).to_string()),
            "struct_type" => TypeExpr::Struct(self.struct_type(node)),
            "parenthesized_type" => named_children(node)
                .first()
                .map_or(TypeExpr::Other("parenthesized_type"), |inner| {
                    self.type_expr(inner)
                }),
            other => TypeExpr::Other(other),
        }
    }

    /// Fields of a `struct_type`, with doc and trailing comments attached.
    ///
    /// A doc comment is the run of consecutive comment lines ending on the
    /// line above a field. A trailing comment starts on the line where a
    /// field ends.
    fn struct_type(&self, node: &Node<'_>) -> StructType {
        let Some(list) = named_children(node)
            .into_iter()
            .find(|child| child.kind() == "field_declaration_list")
        else {
            return StructType::default();
        };

        let mut fields: Vec<FieldDecl> = Vec::new();
        let mut last_field_row = None;
        let mut pending: Vec<Node<'_>> = Vec::new();

        for child in named_children(&list) {
            match child.kind() {
                "comment" => {
                    let row = child.start_position().row;
                    if last_field_row == Some(row) {
                        if let Some(field) = fields.last_mut().filter(|f| f.comment.is_none()) {
                            field.comment = Some(comment_lines(self.text(&child)).join("\n"));
                            continue;
                        }
                    }
                    let adjacent = pending
                        .last()
                        .is_some_and(|prev| prev.end_position().row + 1 == row);
                    if !adjacent {
                        pending.clear();
                    }
                    pending.push(child);
                }
                "field_declaration" => {
                    let row = child.start_position().row;
                    let docs = match pending.last() {
                        Some(prev) if prev.end_position().row + 1 == row => pending
                            .iter()
                            .flat_map(|c| comment_lines(self.text(c)))
                            .filter(|line| !is_directive(line))
                            .collect(),
                        _ => Vec::new(),
                    };
                    pending.clear();
                    last_field_row = Some(child.end_position().row);
                    fields.push(self.field(&child, docs));
                }
                _ => {}
            }
        }

        StructType { fields }
    }

    fn field(&self, node: &Node<'_>, docs: Vec<String>) -> FieldDecl {
        let mut cursor = node.walk();
        let names: Vec<String> = node
            .children_by_field_name("name", &mut cursor)
            .map(|n| self.text(&n).to_string())
            .collect();
        let type_node = node.child_by_field_name("type");

        // An embedded `*T` has no pointer_type node, only a `*` token
        let mut cursor = node.walk();
        let embedded_pointer = names.is_empty() && node.children(&mut cursor).any(|c| c.kind() == "*");

        let ty = match type_node {
            _ if embedded_pointer => TypeExpr::Other("pointer_type"),
            Some(t) => self.type_expr(&t),
            None => TypeExpr::Other("missing"),
        };
        let embedded = if names.is_empty() {
            type_node.and_then(|t| self.base_type_name(&t))
        } else {
            None
        };

        FieldDecl {
            names,
            embedded,
            ty,
            tag: node.child_by_field_name("tag").map(|t| self.tag(&t)),
            docs,
            comment: None,
            pos: Pos::of(node),
        }
    }

    /// `T` for `T`, `pkg.T` and `T[A]`
    fn base_type_name(&self, node: &Node<'_>) -> Option<String> {
        match node.kind() {
            "type_identifier" => Some(self.text(node).to_string()),
            "qualified_type" => node
                .child_by_field_name("name")
                .map(|n| self.text(&n).to_string()),
            "generic_type" => node
                .child_by_field_name("type")
                .and_then(|t| self.base_type_name(&t)),
            _ => None,
        }
    }

    /// Decoded value of a tag string literal
    fn tag(&self, node: &Node<'_>) -> String {
        let text = self.text(node);
        match node.kind() {
            "raw_string_literal" => text.trim_matches('`').replace('\r', ""),
            _ => unescape(text.strip_prefix('"').and_then(|t| t.strip_suffix('"')).unwrap_or(text)),
        }
    }
}

/// Decode the escapes that can appear in an interpreted tag string.
///
/// Unknown escapes are kept as written.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other @ ('"' | '\\' | '\'')) => out.push(other),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Comment text without markers, one entry per line
fn comment_lines(text: &str) -> Vec<String> {
    if let Some(line) = text.strip_prefix("//") {
        return vec![strip_one_space(line).to_string()];
    }

    let body = text
        .strip_prefix("/*")
        .and_then(|t| t.strip_suffix("*/"))
        .unwrap_or(text);
    body.trim()
        .lines()
        .map(|line| strip_one_space(line.trim_start_matches([' ', '\t', '*'])).to_string())
        .collect()
}

fn strip_one_space(line: &str) -> &str {
    line.strip_prefix(' ').unwrap_or(line).trim_end()
}

/// `//go:generate`, `//line` and similar tool directives
fn is_directive(line: &str) -> bool {
    line.starts_with("go:") || line.starts_with("line ")
}
