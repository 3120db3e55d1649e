#![allow(non_snake_case)]

use super::*;
use std::io::Write;

fn single_struct(source: &str) -> StructType {
    let file = parse_source(source).unwrap();
    match &file.type_specs().next().unwrap().ty {
        TypeExpr::Struct(s) => s.clone(),
        other => panic!("expected struct, got {other:?}"),
    }
}

// parse_source: declarations

#[test]
fn parse_source___package_and_types___collected_in_order() {
    let file = parse_source(
        "// Package models holds data types.\npackage models\n\nimport \"time\"\n\ntype A struct{}\n\nfunc (a A) Name() string { return \"a\" }\n\ntype (\n\tB int\n\tC = A\n)\n",
    )
    .unwrap();

    assert_eq!(file.package, "models");
    let names: Vec<&str> = file.type_specs().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn parse_source___alias_and_generic___flagged() {
    let file = parse_source(
        "package main\n\ntype Page[T any] struct {\n\tItems []T `json:\"items\"`\n}\n\ntype Alias = Page[int]\n",
    )
    .unwrap();
    let specs: Vec<&TypeSpec> = file.type_specs().collect();

    assert!(specs[0].generic);
    assert!(!specs[0].alias);
    assert!(matches!(specs[0].ty, TypeExpr::Struct(_)));
    assert!(specs[1].alias);
    assert!(!specs[1].generic);
}

#[test]
fn parse_source___type_inside_function___not_collected() {
    let file = parse_source(
        "package main\n\nfunc main() {\n\ttype Local struct{ A int }\n\t_ = Local{}\n}\n",
    )
    .unwrap();

    assert_eq!(file.type_specs().count(), 0);
}

#[test]
fn parse_source___type_forms___classified() {
    let s = single_struct(
        "package main\n\ntype T struct {\n\tA int\n\tB pkg.Name\n\tC *int\n\tD []string\n\tE map[string]int\n\tF struct{ X int }\n\tG (bool)\n}\n",
    );
    let types: Vec<&TypeExpr> = s.fields.iter().map(|f| &f.ty).collect();

    assert_eq!(types[0], &TypeExpr::Ident("int".to_string()));
    assert_eq!(types[1], &TypeExpr::Other("qualified_type"));
    assert_eq!(types[2], &TypeExpr::Other("pointer_type"));
    assert_eq!(types[3], &TypeExpr::Other("slice_type"));
    assert_eq!(types[4], &TypeExpr::Other("map_type"));
    assert!(matches!(types[5], TypeExpr::Struct(_)));
    assert_eq!(types[6], &TypeExpr::Ident("bool".to_string()));
}

// parse_source: fields

#[test]
fn parse_source___multi_name_field___one_decl() {
    let s = single_struct("package main\n\ntype T struct {\n\tX, Y int `json:\"xy\"`\n}\n");

    assert_eq!(s.fields.len(), 1);
    assert_eq!(s.fields[0].names, vec!["X", "Y"]);
    assert_eq!(s.fields[0].go_name(), Some("X"));
}

#[test]
fn parse_source___embedded_fields___base_names() {
    let s = single_struct(
        "package main\n\ntype T struct {\n\t*Audit `json:\"audit\"`\n\tBase\n\tsync.Mutex\n}\n",
    );

    assert!(s.fields.iter().all(FieldDecl::is_embedded));
    let names: Vec<Option<&str>> = s.fields.iter().map(FieldDecl::go_name).collect();
    assert_eq!(names, vec![Some("Audit"), Some("Base"), Some("Mutex")]);
    assert_eq!(s.fields[0].ty, TypeExpr::Other("pointer_type"));
    assert_eq!(s.fields[0].tag.as_deref(), Some("json:\"audit\""));
}

#[test]
fn parse_source___raw_tag___backticks_removed() {
    let s = single_struct(
        "package main\n\ntype T struct {\n\tID int `json:\"id\" schema:\"required\"`\n\tName string\n}\n",
    );

    assert_eq!(
        s.fields[0].tag.as_deref(),
        Some(r#"json:"id" schema:"required""#)
    );
    assert_eq!(s.fields[1].tag, None);
}

#[test]
fn parse_source___interpreted_tag___escapes_decoded() {
    let s = single_struct("package main\n\ntype T struct {\n\tID int \"json:\\\"id\\\"\"\n}\n");

    assert_eq!(s.fields[0].tag.as_deref(), Some(r#"json:"id""#));
}

#[test]
fn parse_source___crlf_line_endings___parsed() {
    let s = single_struct(
        "package main\r\n\r\ntype T struct {\r\n\tID int `json:\"id\"`\r\n}\r\n",
    );

    assert_eq!(s.fields[0].tag.as_deref(), Some(r#"json:"id""#));
}

#[test]
fn parse_source___field_position___one_based() {
    let s = single_struct("package main\n\ntype T struct {\n\tID int\n}\n");

    assert_eq!(s.fields[0].pos, Pos { line: 4, column: 2 });
}

// parse_source: comments

#[test]
fn parse_source___doc_and_trailing_comments___attached() {
    let s = single_struct(
        "package main\n\ntype T struct {\n\t// Email is the contact address.\n\t// It must be unique.\n\tEmail string // primary\n\n\t// detached\n\n\tAge int\n\t/* Nick\n\t * name. */\n\tNick string\n}\n",
    );

    assert_eq!(
        s.fields[0].docs,
        vec!["Email is the contact address.", "It must be unique."]
    );
    assert_eq!(s.fields[0].comment.as_deref(), Some("primary"));
    assert!(s.fields[1].docs.is_empty());
    assert_eq!(s.fields[1].comment, None);
    assert_eq!(s.fields[2].docs, vec!["Nick", "name."]);
}

#[test]
fn parse_source___directive_comment___not_a_doc_line() {
    let s = single_struct(
        "package main\n\ntype T struct {\n\t//go:embed banner.txt\n\t// Banner text.\n\tBanner string\n}\n",
    );

    assert_eq!(s.fields[0].docs, vec!["Banner text."]);
}

// parse_source: errors

#[test]
fn parse_source___unclosed_struct___error_with_position() {
    let err = parse_source("package main\n\ntype User struct {\n\tID int\n").unwrap_err();

    assert!(err.pos.line >= 3);
    assert!(err.pos.column >= 1);
}

#[test]
fn parse_source___garbage_line___error_reported() {
    let err = parse_source("package main\n\ntype A struct{}\n\n@@@\n").unwrap_err();

    assert!((3..=5).contains(&err.pos.line));
}

#[test]
fn parse_source___missing_package_clause___error() {
    let err = parse_source("type A struct{}\n").unwrap_err();

    assert_eq!(err.pos, Pos { line: 1, column: 1 });
    assert!(err.message.starts_with("expected 'package'"));
}

#[test]
fn parse_source___empty_input___error() {
    let err = parse_source("").unwrap_err();

    assert_eq!(err.message, "expected 'package', found EOF");
}

// parse_file

#[test]
fn parse_file___syntax_error___parse_error_names_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "package main\n\n@@@\n").unwrap();

    let err = parse_file(file.path()).unwrap_err();

    assert_eq!(err.kind(), "parse");
    assert!(err.to_string().starts_with(&format!("{}:", file.path().display())));
}

#[test]
fn parse_file___invalid_utf8___parse_error_at_bad_byte() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"package main\n\n// caf\xe9\n").unwrap();

    let err = parse_file(file.path()).unwrap_err();

    match err {
        SchemaGenError::Parse {
            line,
            column,
            message,
            ..
        } => {
            assert_eq!((line, column), (3, 7));
            assert_eq!(message, "invalid UTF-8 encoding");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn parse_file___missing_file___io_error() {
    let result = parse_file(Path::new("/nonexistent/models.go"));

    assert!(matches!(result, Err(SchemaGenError::Io { .. })));
}
