//! Config serialization to TOML
//!
//! Single source of truth for the config file format.

use super::Config;

impl Config {
    /// Serialize the whole config as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# traffic-dash configuration

# CSV file with one accident per row (TRAFFIC_DASH_DATA overrides)
data_path = "{data_path}"

# Theme: auto, dracula, nord, gruvbox
theme = "{theme}"

# Show the logs panel on startup (toggle with 'l')
show_logs = {show_logs}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            data_path = escape(&self.data_path.display().to_string()),
            theme = escape(&self.theme),
            show_logs = self.show_logs,
            log_level = escape(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = escape(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = escape(&self.logging.file_prefix),
        )
    }
}

/// Escape a value for a TOML basic string
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
