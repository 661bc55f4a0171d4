// CLI module - command-line argument parsing and handlers
//
// Top-level flags override config values for a single run. The `config`
// subcommand manages the config file:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use crate::selector::ViewSelector;
use crate::topic::InvalidTopicError;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Traffic accident dashboard
#[derive(Debug, Parser)]
#[command(name = "traffic-dash")]
#[command(version = VERSION)]
#[command(about = "Interactive dashboard over a traffic accident table", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// CSV file to load (overrides TRAFFIC_DASH_DATA and the config file)
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Theme: auto, dracula, nord, gruvbox
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Print one topic's report and exit (slug or label, e.g. weather, peak-hours)
    #[arg(long, value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Print the report as JSON instead of text (implies headless)
    #[arg(long)]
    pub json: bool,

    /// Run without the TUI
    #[arg(long)]
    pub no_tui: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(data) = &self.data {
            config.data_path = data.clone();
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if self.headless() {
            config.enable_tui = false;
        }
    }

    /// Selector positioned on the `--topic` value, or on the default topic
    pub fn selector(&self) -> Result<ViewSelector, InvalidTopicError> {
        let mut selector = ViewSelector::new();
        if let Some(name) = &self.topic {
            selector.select_label(name)?;
        }
        Ok(selector)
    }

    /// Any of these flags means "print a report and exit"
    pub fn headless(&self) -> bool {
        self.no_tui || self.json || self.topic.is_some()
    }
}

/// Handle the config subcommand
pub fn handle_config(show: bool, path: bool, reset: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show()
    } else if reset {
        handle_config_reset()
    } else {
        println!("Usage: traffic-dash config [--show|--path|--reset]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --reset   Reset config file to defaults");
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    let Some(path) = Config::config_path() else {
        bail!("Could not determine config path");
    };
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let Some(path) = Config::config_path() else {
        bail!("Could not determine config path");
    };

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topic::Topic;

    #[test]
    fn plain_invocation_runs_the_tui() {
        let cli = Cli::try_parse_from(["traffic-dash"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.headless());
    }

    #[test]
    fn topic_flag_selects_by_slug_or_label() {
        let cli = Cli::try_parse_from(["traffic-dash", "--topic", "peak-hours"]).unwrap();
        assert!(cli.headless());
        assert_eq!(
            cli.selector().unwrap().current_topic(),
            Topic::PeakHoursAnalysis
        );

        let cli =
            Cli::try_parse_from(["traffic-dash", "--topic", "Weather Based Analysis"]).unwrap();
        assert_eq!(cli.selector().unwrap().current_topic(), Topic::WeatherAnalysis);
    }

    #[test]
    fn no_topic_flag_starts_on_overall() {
        let cli = Cli::try_parse_from(["traffic-dash", "--json"]).unwrap();
        assert_eq!(cli.selector().unwrap().current_topic(), Topic::OverallAnalysis);
    }

    #[test]
    fn unknown_topic_is_rejected() {
        let cli = Cli::try_parse_from(["traffic-dash", "--topic", "Bicycle Analysis"]).unwrap();
        let err = cli.selector().unwrap_err();
        assert!(err.to_string().contains("Bicycle Analysis"));
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "traffic-dash",
            "--data",
            "other.csv",
            "--theme",
            "nord",
            "--json",
        ])
        .unwrap();

        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.data_path, PathBuf::from("other.csv"));
        assert_eq!(config.theme, "nord");
        assert!(!config.enable_tui);
    }

    #[test]
    fn config_subcommand() {
        let cli = Cli::try_parse_from(["traffic-dash", "config", "--path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                path: true,
                show: false,
                reset: false
            })
        ));
    }
}
