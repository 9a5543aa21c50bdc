//! Tests for configuration precedence order

use crate::{ConfigProvider, FileDiscovery, DEFAULT_AUTH_URL};
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ENV_KEYS: [&str; 4] = [
    "DRAGBOARD_API_URL",
    "DRAGBOARD_TIMEOUT_SECS",
    "DRAGBOARD_DRAG__ACTIVATION_DISTANCE",
    "DRAGBOARD_TOKEN",
];

fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

fn provider(project: &Path, global: &Path) -> ConfigProvider {
    ConfigProvider::with_discovery(FileDiscovery::with_dirs(
        Some(project.to_path_buf()),
        Some(global.to_path_buf()),
    ))
}

#[test]
#[serial]
fn test_defaults_without_sources() {
    clear_env();
    let project = TempDir::new().unwrap();
    let global = TempDir::new().unwrap();

    let config = provider(project.path(), global.path()).load().unwrap();

    assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
    assert_eq!(config.drag.activation_distance, 3.0);
}

#[test]
#[serial]
fn test_project_overrides_global() {
    clear_env();
    let project = TempDir::new().unwrap();
    let global = TempDir::new().unwrap();

    fs::write(
        global.path().join("config.toml"),
        r#"
api_url = "http://global.example.com/kanban"
timeout_secs = 5

[drag]
activation_distance = 8.0
"#,
    )
    .unwrap();
    fs::write(
        project.path().join("config.yaml"),
        "api_url: http://project.example.com/kanban\n",
    )
    .unwrap();

    let config = provider(project.path(), global.path()).load().unwrap();

    assert_eq!(config.api_url, "http://project.example.com/kanban");
    // Values only the global file sets survive
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.drag.activation_distance, 8.0);
}

#[test]
#[serial]
fn test_environment_overrides_files() {
    clear_env();
    let project = TempDir::new().unwrap();
    let global = TempDir::new().unwrap();
    fs::write(
        project.path().join("config.json"),
        r#"{"api_url": "http://file.example.com/kanban", "timeout_secs": 12}"#,
    )
    .unwrap();

    std::env::set_var("DRAGBOARD_API_URL", "http://env.example.com/kanban");
    std::env::set_var("DRAGBOARD_DRAG__ACTIVATION_DISTANCE", "6");
    std::env::set_var("DRAGBOARD_TOKEN", "not-a-config-value");

    let result = provider(project.path(), global.path()).load();
    clear_env();
    let config = result.unwrap();

    assert_eq!(config.api_url, "http://env.example.com/kanban");
    assert_eq!(config.timeout_secs, 12);
    assert_eq!(config.drag.activation_distance, 6.0);
}

#[test]
#[serial]
fn test_invalid_file_value_is_rejected() {
    clear_env();
    let project = TempDir::new().unwrap();
    let global = TempDir::new().unwrap();
    fs::write(project.path().join("config.toml"), "timeout_secs = 0\n").unwrap();

    let err = provider(project.path(), global.path()).load().unwrap_err();
    assert!(err.to_string().contains("timeout_secs"));
}

#[test]
#[serial]
fn test_malformed_file_is_a_parse_error() {
    clear_env();
    let project = TempDir::new().unwrap();
    let global = TempDir::new().unwrap();
    fs::write(project.path().join("config.toml"), "timeout_secs = \"soon\"\n").unwrap();

    let err = provider(project.path(), global.path()).load().unwrap_err();
    assert!(matches!(err, crate::ConfigError::ParseError { .. }));
}
