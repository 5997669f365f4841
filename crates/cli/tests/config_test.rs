use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use canteen_cli::config::CliConfig;
use pretty_assertions::assert_eq;
use tracing::Level;

fn config_from(vars: &[(&str, &str)]) -> eyre::Result<CliConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    CliConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]).unwrap();

    assert_eq!(config.data_dir, PathBuf::from("./canteen-data"));
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.upload_delay, Duration::from_millis(1000));
}

#[test]
fn test_custom_values() {
    let config = config_from(&[
        ("CANTEEN_DATA_DIR", "/var/lib/canteen"),
        ("LOG_LEVEL", "DEBUG"),
        ("CANTEEN_UPLOAD_DELAY_MS", "250"),
    ])
    .unwrap();

    assert_eq!(config.data_dir, PathBuf::from("/var/lib/canteen"));
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(config.upload_delay, Duration::from_millis(250));
}

#[test]
fn test_unknown_log_level_falls_back_to_info() {
    let config = config_from(&[("LOG_LEVEL", "chatty")]).unwrap();

    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_blank_data_dir_uses_default() {
    let config = config_from(&[("CANTEEN_DATA_DIR", "  ")]).unwrap();

    assert_eq!(config.data_dir, PathBuf::from("./canteen-data"));
}

#[test]
fn test_invalid_upload_delay_is_an_error() {
    let error = config_from(&[("CANTEEN_UPLOAD_DELAY_MS", "soon")]).unwrap_err();

    assert!(error.to_string().contains("CANTEEN_UPLOAD_DELAY_MS"));
}
