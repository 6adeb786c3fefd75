//! Tests for config version field validation.

use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader};
use crate::error::ReportError;

use super::in_memory::InMemoryFiles;

#[test]
fn config_with_valid_version_loads_successfully() {
    let config_content = r#"
version = "1"
title = "Weekly Report"
"#;

    let files = InMemoryFiles::new().file("/config.toml", config_content);

    let loader = FileConfigLoader::with_files(files);
    let result = loader.load_from_path(Path::new("/config.toml")).unwrap();

    assert_eq!(result.config.version, Some("1".to_string()));
    assert_eq!(result.config.title, "Weekly Report");
}

#[test]
fn config_without_version_loads_successfully() {
    let files = InMemoryFiles::new().file("/config.toml", "title = \"Report\"\n");

    let loader = FileConfigLoader::with_files(files);
    let result = loader.load_from_path(Path::new("/config.toml")).unwrap();

    assert!(result.config.version.is_none());
}

#[test]
fn config_with_unsupported_version_returns_error() {
    let files = InMemoryFiles::new().file("/config.toml", "version = \"99\"\n");

    let loader = FileConfigLoader::with_files(files);
    let err = loader
        .load_from_path(Path::new("/config.toml"))
        .unwrap_err();

    match err {
        ReportError::Config(msg) => {
            assert!(msg.contains("99"));
            assert!(msg.contains("Only version '1'"));
        }
        other => panic!("Expected Config error, got: {other:?}"),
    }
}
