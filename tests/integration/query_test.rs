// Tests for building query documents from template files

use std::fs;

use gprof_client::core::{QueryBuilder, QueryParameters};
use gprof_client::GprofError;
use tempfile::TempDir;

fn params() -> QueryParameters {
    QueryParameters {
        disk_path: "/".to_string(),
        file_path: "/tmp".to_string(),
        sample_count: 5,
    }
}

#[test]
fn test_shipped_template_contains_parameters() {
    let template = concat!(env!("CARGO_MANIFEST_DIR"), "/template/template.json");
    let query = QueryBuilder::new(template).build(&params()).unwrap();

    assert!(query.contains("\"/\""));
    assert!(query.contains("\"/tmp\""));
    assert!(query.contains("num: 5"));
    assert!(!query.contains("{{"));
}

#[test]
fn test_build_is_deterministic() {
    let template = concat!(env!("CARGO_MANIFEST_DIR"), "/template/template.json");
    let builder = QueryBuilder::new(template);

    assert_eq!(
        builder.build(&params()).unwrap(),
        builder.build(&params()).unwrap()
    );
}

#[test]
fn test_template_is_reread_on_every_build() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("template.json");
    let builder = QueryBuilder::new(&path);

    fs::write(&path, "{ disk(path: \"{{disk_path}}\") { used } }").unwrap();
    assert_eq!(
        builder.build(&params()).unwrap(),
        "{ disk(path: \"/\") { used } }"
    );

    fs::write(&path, "{ cpu(num: {{num}}) { idle } }").unwrap();
    assert_eq!(builder.build(&params()).unwrap(), "{ cpu(num: 5) { idle } }");
}

#[test]
fn test_malformed_template_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("template.json");
    fs::write(&path, "{ cpu(num: {{num ) { idle } }").unwrap();

    let err = QueryBuilder::new(&path).build(&params()).unwrap_err();
    assert!(matches!(err, GprofError::Template(_)));
}
