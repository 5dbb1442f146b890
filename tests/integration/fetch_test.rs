// Tests for fetching and decoding profiles over HTTP

use std::fs;
use std::time::Duration;

use gprof_client::core::fetch::{build_client, fetch, HttpProfileSource, ProfileSource};
use gprof_client::core::{Config, Profile};
use gprof_client::GprofError;
use tempfile::TempDir;

use super::support::{http_response, refused_url, serve_once};

const FULL_BODY: &str = r#"{
    "cpu": [{"user": 12.0, "system": 3.0, "idle": 85.0}, {"user": 20.0, "system": 5.0, "idle": 75.0}],
    "file": [{"name": "/tmp/a.log", "size": 1024}, {"name": "/tmp/b.log", "size": 2048}],
    "disk": [{"path": "/", "total": 1000, "used": 400, "free": 600, "usedPercent": 40.0}]
}"#;

fn client() -> reqwest::blocking::Client {
    build_client(Duration::from_secs(5)).unwrap()
}

#[test]
fn test_fetch_decodes_all_three_sections() {
    let (url, _requests) = serve_once(http_response("200 OK", FULL_BODY));

    let profile = fetch(&client(), &url, "{ cpu { user } }").unwrap();

    assert_eq!(profile.cpu.len(), 2);
    assert_eq!(profile.file.len(), 2);
    assert_eq!(profile.disk.len(), 1);
    assert_eq!(profile.disk[0].used_percent, 40.0);
}

#[test]
fn test_fetch_posts_json_envelope() {
    let (url, requests) = serve_once(http_response("200 OK", "{}"));
    let query = "{ file(path: \"/tmp\") { name } }";

    fetch(&client(), &url, query).unwrap();
    let request = requests.recv_timeout(Duration::from_secs(5)).unwrap();

    assert!(request.head.starts_with("POST /query HTTP/1.1"));
    assert!(request
        .head
        .to_ascii_lowercase()
        .contains("content-type: application/json"));
    let envelope: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(envelope, serde_json::json!({ "query": query }));
}

#[test]
fn test_empty_body_is_zero_profile() {
    let (url, _requests) = serve_once(http_response("200 OK", ""));

    let profile = fetch(&client(), &url, "{}").unwrap();

    assert_eq!(profile, Profile::default());
}

#[test]
fn test_invalid_body_is_decode_error() {
    let (url, _requests) = serve_once(http_response("200 OK", "{\"cpu\": [1, 2"));

    let err = fetch(&client(), &url, "{}").unwrap_err();

    assert!(matches!(err, GprofError::Decode(_)));
}

#[test]
fn test_server_error_status_is_network_error() {
    let (url, _requests) = serve_once(http_response("500 Internal Server Error", ""));

    let err = fetch(&client(), &url, "{}").unwrap_err();

    assert!(matches!(err, GprofError::Network(_)));
    assert!(err.to_string().contains("500"));
}

#[test]
fn test_connection_refused_is_network_error() {
    let err = fetch(&client(), &refused_url(), "{}").unwrap_err();
    assert!(matches!(err, GprofError::Network(_)));
}

#[test]
fn test_http_source_builds_query_from_template() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.json");
    fs::write(
        &template,
        "{ file(path: \"{{ file_path }}\", num: {{ num }}) { name } disk(path: \"{{ disk_path }}\") { path } }",
    )
    .unwrap();

    let (url, requests) = serve_once(http_response("200 OK", FULL_BODY));
    let config = Config::from_toml_str(&format!(
        "url = \"{}\"\n[gq_param]\ndisk_path = \"/\"\nfile_path = \"/tmp\"\nnum = 5\n",
        url
    ))
    .unwrap();

    let mut source = HttpProfileSource::new(&config, template).unwrap();
    let profile = source.fetch().unwrap();
    assert_eq!(profile.file.len(), 2);

    let request = requests.recv_timeout(Duration::from_secs(5)).unwrap();
    let envelope: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(
        envelope["query"],
        "{ file(path: \"/tmp\", num: 5) { name } disk(path: \"/\") { path } }"
    );
}

#[test]
fn test_http_source_template_error_skips_request() {
    let config = Config::from_toml_str(&format!(
        "url = \"{}\"\n[gq_param]\nnum = 1\n",
        refused_url()
    ))
    .unwrap();

    let mut source = HttpProfileSource::new(&config, "/nonexistent/template.json".into()).unwrap();
    let err = source.fetch().unwrap_err();

    assert!(matches!(err, GprofError::Template(_)));
}
