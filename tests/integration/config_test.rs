// Tests for loading the configuration file

use std::fs;
use std::path::PathBuf;

use gprof_client::core::config::{Config, DEFAULT_TEMPLATE_PATH};
use gprof_client::GprofError;
use tempfile::TempDir;

#[test]
fn test_load_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
url = "http://x/y"
timeout_secs = 3

[gq_param]
disk_path = "/"
file_path = "/tmp"
num = 5
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.url, "http://x/y");
    assert_eq!(config.timeout_secs, 3);
    assert_eq!(config.query_parameters.disk_path, "/");
    assert_eq!(config.query_parameters.file_path, "/tmp");
    assert_eq!(config.query_parameters.sample_count, 5);
    assert_eq!(config.template_path(), PathBuf::from(DEFAULT_TEMPLATE_PATH));
}

#[test]
fn test_missing_config_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, GprofError::Config(_)));
}

#[test]
fn test_malformed_config_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "url = \"http://x/y\"\n[gq_param\n").unwrap();

    let err = Config::load(&path).unwrap_err();

    assert!(matches!(err, GprofError::Config(_)));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_shipped_example_config_is_valid() {
    let example = concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.toml");
    let config = Config::load(std::path::Path::new(example)).unwrap();
    assert_eq!(config.query_parameters.sample_count, 5);
}
