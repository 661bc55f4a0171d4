//! Configuration tests
//!
//! The round-trip tests guard the file template: a field added to `Config`
//! but not to `to_toml()` (or vice versa) shows up here.

use super::*;
use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn no_env(_: &str) -> Option<String> {
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let rebuilt = Config::from_sources(parsed.unwrap(), no_env);
    assert_eq!(rebuilt, config);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let config = Config {
        data_path: PathBuf::from("/data/with \"quotes\"/accidents.csv"),
        theme: "nord".to_string(),
        show_logs: true,
        enable_tui: true,
        logging: LoggingConfig {
            level: "debug".to_string(),
            file_enabled: true,
            file_dir: PathBuf::from("/var/log/dash"),
            file_rotation: LogRotation::Hourly,
            file_prefix: "dash".to_string(),
        },
    };

    let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    assert_eq!(Config::from_sources(parsed, no_env), config);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_defaults_without_file_or_env() {
    let config = Config::from_sources(FileConfig::default(), no_env);
    assert_eq!(config.data_path, PathBuf::from("traffic_accidents.csv"));
    assert_eq!(config.theme, "auto");
    assert!(config.enable_tui);
    assert!(!config.show_logs);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_file_overrides_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
data_path = "from-file.csv"
theme = "gruvbox"

[logging]
level = "warn"
"#,
    )
    .unwrap();

    let config = Config::from_sources(file, no_env);
    assert_eq!(config.data_path, PathBuf::from("from-file.csv"));
    assert_eq!(config.theme, "gruvbox");
    assert_eq!(config.logging.level, "warn");
    // Unset logging keys keep their defaults
    assert_eq!(config.logging.file_prefix, "traffic-dash");
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(r#"data_path = "from-file.csv""#).unwrap();
    let env = env_from(&[(ENV_DATA, "from-env.csv"), (ENV_THEME, "dracula")]);

    let config = Config::from_sources(file, env);
    assert_eq!(config.data_path, PathBuf::from("from-env.csv"));
    assert_eq!(config.theme, "dracula");
}

#[test]
fn test_blank_env_is_ignored() {
    let file: FileConfig = toml::from_str(r#"data_path = "from-file.csv""#).unwrap();
    let config = Config::from_sources(file, env_from(&[(ENV_DATA, "  ")]));
    assert_eq!(config.data_path, PathBuf::from("from-file.csv"));
}

#[test]
fn test_no_tui_env_flag() {
    for value in ["1", "true", "TRUE", "yes"] {
        let config = Config::from_sources(FileConfig::default(), env_from(&[(ENV_NO_TUI, value)]));
        assert!(!config.enable_tui, "{value} should disable the TUI");
    }
    let config = Config::from_sources(FileConfig::default(), env_from(&[(ENV_NO_TUI, "0")]));
    assert!(config.enable_tui);
}

// ─────────────────────────────────────────────────────────────────────────────
// File loading
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = Config::load_file_config(&dir.path().join("absent.toml")).unwrap();
    assert!(file.data_path.is_none());
    assert!(file.logging.is_none());
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "theme = nord\n").unwrap();

    let err = Config::load_file_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_log_rotation_parse() {
    assert_eq!(LogRotation::parse("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("Never"), LogRotation::Never);
    assert_eq!(LogRotation::parse("daily"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}
