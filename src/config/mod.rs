//! Configuration for the dashboard
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (applied by `main`, highest priority)
//! 2. Environment variables
//! 3. Config file (~/.config/traffic-dash/config.toml)
//! 4. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

mod observability;
mod serialization;

#[cfg(test)]
mod tests;

pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_DATA_PATH: &str = "traffic_accidents.csv";
pub const DEFAULT_THEME: &str = "auto";

pub const ENV_DATA: &str = "TRAFFIC_DASH_DATA";
pub const ENV_THEME: &str = "TRAFFIC_DASH_THEME";
pub const ENV_NO_TUI: &str = "TRAFFIC_DASH_NO_TUI";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// CSV file the dashboard loads once at startup
    pub data_path: PathBuf,

    /// Theme name: "auto", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// Open the logs panel on startup
    pub show_logs: bool,

    /// Whether to run the TUI (false prints a report and exits)
    pub enable_tui: bool,

    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            theme: DEFAULT_THEME.to_string(),
            show_logs: false,
            enable_tui: true,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub data_path: Option<String>,
    pub theme: Option<String>,
    pub show_logs: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Config file path: ~/.config/traffic-dash/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("traffic-dash").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }

        // Config is optional; failing to write the template is not an error
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A missing file yields defaults. A file that exists but cannot be read
    /// or parsed is an error; a broken config should fail loudly instead of
    /// silently falling back.
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).with_context(|| {
                format!(
                    "Failed to parse config file {} (check quoting, booleans and section names)",
                    path.display()
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Cannot read config file {}", path.display()))
            }
        }
    }

    /// Merge file values and environment lookups over the defaults
    pub(crate) fn from_sources<F>(file: FileConfig, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // Data path: env > file > default
        let data_path = env(ENV_DATA)
            .filter(|v| !v.trim().is_empty())
            .or(file.data_path)
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        // Theme: env > file > default
        let theme = env(ENV_THEME)
            .filter(|v| !v.trim().is_empty())
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // TUI toggle: env only (runtime flag)
        let enable_tui = env(ENV_NO_TUI)
            .map(|v| !is_truthy(&v))
            .unwrap_or(defaults.enable_tui);

        Self {
            data_path,
            theme,
            show_logs: file.show_logs.unwrap_or(defaults.show_logs),
            enable_tui,
            logging: LoggingConfig::from_file(file.logging),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}
