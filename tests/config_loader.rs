mod common;

use common::temp_config;
use staffdesk::config::{Config, ConfigError};
use std::path::Path;
use std::time::Duration;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.service.list_delay(), Duration::from_millis(1000));
    assert_eq!(config.service.mutate_delay(), Duration::from_millis(500));
    assert_eq!(config.ui.page_size, 10);
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    assert_eq!(config.ui.notice_ttl(), Duration::from_millis(3000));
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.logging.file_path().ends_with("staffdesk/staffdesk.log"));
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("staffdesk/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/staffdesk/config.toml"))
        .expect("missing file is not an error");
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[service]
list_delay_ms = 0

[ui]
page_size = 5
"#,
    );
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.service.list_delay_ms, 0);
    assert_eq!(config.service.mutate_delay_ms, 500);
    assert_eq!(config.ui.page_size, 5);
    assert_eq!(config.ui.notice_ttl_ms, 3000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_log_file_is_read() {
    let (_dir, path) = temp_config(
        r#"
[logging]
level = "staffdesk=debug"
file = "/var/tmp/staffdesk.log"
"#,
    );
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.logging.level, "staffdesk=debug");
    assert_eq!(
        config.logging.file_path(),
        Path::new("/var/tmp/staffdesk.log")
    );
}

#[test]
fn test_zero_page_size_fails_validation() {
    let (_dir, path) = temp_config("[ui]\npage_size = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("page_size"));
}

#[test]
fn test_tiny_tick_rate_fails_validation() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 5\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let (_dir, path) = temp_config("[ui\npage_size = ");
    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::ParseError { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_wrong_type_is_a_parse_error() {
    let (_dir, path) = temp_config("[ui]\npage_size = \"ten\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}
