#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;
use test_case::test_case;

#[test_case("User", "user.schema.json")]
#[test_case("HTTPConfig", "httpconfig.schema.json")]
#[test_case("order", "order.schema.json")]
fn output_file_name___type_name___lowercased_with_suffix(type_name: &str, expected: &str) {
    assert_eq!(output_file_name(type_name), expected);
}

#[test]
fn write_schema___fresh_dir___writes_contents() {
    let dir = TempDir::new().unwrap();

    let path = write_schema(dir.path(), "User", "{}\n").unwrap();

    assert_eq!(path, dir.path().join("user.schema.json"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
}

#[test]
fn write_schema___existing_file___replaced() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("user.schema.json"), "old contents that are longer").unwrap();

    let path = write_schema(dir.path(), "User", "new").unwrap();

    assert_eq!(std::fs::read_to_string(path).unwrap(), "new");
}

#[test]
fn write_schema___success___leaves_no_temp_files() {
    let dir = TempDir::new().unwrap();

    write_schema(dir.path(), "User", "{}").unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["user.schema.json"]);
}

#[cfg(unix)]
#[test]
fn write_schema___unix___mode_0644() {
    use std::os::unix::fs::PermissionsExt;
    let dir = TempDir::new().unwrap();

    let path = write_schema(dir.path(), "User", "{}").unwrap();

    let mode = std::fs::metadata(path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}

#[test]
fn write_schema___missing_dir___io_error_names_dir() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("no/such/dir");

    let err = write_schema(&missing, "User", "{}").unwrap_err();

    assert!(matches!(err, SchemaGenError::Io { .. }));
    assert!(err.to_string().starts_with(&missing.display().to_string()));
}
