//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use crmdesk_domain::constants::{DEFAULT_API_BASE_URL, DEFAULT_STORAGE_FILE};
use crmdesk_infra::config;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "api": { "base_url": "https://crm.example.com", "user_agent": "crmdesk/it" },
        "storage": { "path": "/tmp/crmdesk-it.json" },
        "ui": { "page_size": 40 }
    }"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let config = config::load_from_file(Some(path.clone())).expect("config should load");

    assert_eq!(config.api.base_url, "https://crm.example.com");
    assert_eq!(config.api.user_agent.as_deref(), Some("crmdesk/it"));
    assert_eq!(config.storage.path, "/tmp/crmdesk-it.json");
    assert_eq!(config.ui.page_size, 40);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_with_minimal_fields() {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(b"[ui]\npage_size = 3\n").expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("toml");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let config = config::load_from_file(Some(path.clone())).expect("config should load");

    assert_eq!(config.ui.page_size, 3);
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.api.user_agent, None);
    assert_eq!(config.storage.path, DEFAULT_STORAGE_FILE);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_rejects_wrong_types() {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(br#"{"ui": {"page_size": "lots"}}"#).expect("Failed to write");

    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let result = config::load_from_file(Some(path.clone()));
    assert!(result.is_err(), "string page size should be rejected");

    std::fs::remove_file(path).ok();
}
