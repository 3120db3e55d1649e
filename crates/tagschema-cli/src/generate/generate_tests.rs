#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;

const SOURCE: &str = "package main\n\ntype Item struct {\n\tSKU string `json:\"sku,omitempty\" schema:\"required\"`\n}\n";

fn options(dir: &TempDir) -> GenerateOptions {
    let file = dir.path().join("item.go");
    std::fs::write(&file, SOURCE).unwrap();
    GenerateOptions {
        type_name: "Item".to_string(),
        file,
        output_dir: Some(dir.path().to_path_buf()),
        config: None,
    }
}

#[test]
fn resolve_config___no_file___defaults_with_output_override() {
    let dir = TempDir::new().unwrap();

    let config = resolve_config(&options(&dir)).unwrap();

    assert_eq!(config.output_dir, dir.path());
    assert!(!config.strip_json_options);
}

#[test]
fn resolve_config___flag_overrides_file_output_dir() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("tagschema.toml");
    std::fs::write(&config_path, "output_dir = \"from-file\"\nstrip_json_options = true\n").unwrap();
    let opts = GenerateOptions {
        config: Some(config_path),
        ..options(&dir)
    };

    let config = resolve_config(&opts).unwrap();

    assert_eq!(config.output_dir, dir.path());
    assert!(config.strip_json_options);
}

#[test]
fn resolve_config___bad_config___error_has_context() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("tagschema.toml");
    std::fs::write(&config_path, "unknown = 1\n").unwrap();
    let opts = GenerateOptions {
        config: Some(config_path),
        ..options(&dir)
    };

    let err = resolve_config(&opts).unwrap_err();

    assert!(format!("{err:#}").starts_with("Failed to load generator config: "));
}

#[test]
fn run___valid_input___returns_file_name() {
    let dir = TempDir::new().unwrap();

    let file_name = run(&options(&dir)).unwrap();

    assert_eq!(file_name, "item.schema.json");
    let text = std::fs::read_to_string(dir.path().join(file_name)).unwrap();
    assert!(text.contains("\"sku,omitempty\""));
}

#[test]
fn run___unknown_type___context_names_type() {
    let dir = TempDir::new().unwrap();
    let opts = GenerateOptions {
        type_name: "Order".to_string(),
        ..options(&dir)
    };

    let err = run(&opts).unwrap_err();

    let message = format!("{err:#}");
    assert!(message.starts_with("Failed to generate schema for Order: "));
    assert!(message.contains("type Order not found in"));
}
