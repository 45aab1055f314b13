use std::fs;
use std::path::Path;

use pintpass::config::{Config, ConfigError};

fn write_config(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.registration.submit_delay_ms, 500);
    assert_eq!(config.profile.default_username, "Guest");
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[registration]
submit_delay_ms = 50
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.registration.submit_delay_ms, 50);
    assert_eq!(config.profile.default_username, "Guest");
}

#[test]
fn full_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[registration]
submit_delay_ms = 1200

[profile]
default_username = "Regular"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.registration.submit_delay_ms, 1200);
    assert_eq!(config.profile.default_username, "Regular");
}

#[test]
fn excessive_delay_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[registration]
submit_delay_ms = 120000
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn blank_username_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[profile]
default_username = "  "
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "registration = not-a-table");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}
