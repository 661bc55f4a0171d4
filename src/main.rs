// Traffic Dash - interactive dashboard over a traffic accident table
//
// Loads a CSV of accident records once, then renders one of six topic views
// chosen from a menu.
//
// Architecture:
// - Dataset: CSV loading, time normalization, process-wide cache
// - Analysis: one pure aggregation per topic
// - Selector: the active topic and its render request
// - TUI (ratatui): menu, charts, logs panel
// - Report: text/JSON rendering for headless runs and the copy action

mod analysis;
mod cli;
mod config;
mod dataset;
mod logging;
mod report;
mod selector;
mod theme;
mod topic;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use dataset::DatasetCache;
use logging::LogBuffer;
use std::process::ExitCode;
use selector::ViewSelector;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Some(Commands::Config { show, path, reset }) = &cli.command {
        cli::handle_config(*show, *path, *reset)?;
        return Ok(ExitCode::SUCCESS);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::load()?;
    cli.apply(&mut config);

    // In TUI mode logs go to the in-memory buffer; the guard flushes the
    // file writer on drop
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, config.enable_tui, &log_buffer);

    tracing::info!("traffic-dash v{} starting", config::VERSION);
    tracing::debug!("Data path: {}", config.data_path.display());

    let cache = DatasetCache::new(config.data_path.clone());

    if !config.enable_tui {
        let selector = cli.selector()?;
        return run_headless(&cache, &selector, cli.json);
    }

    let app = tui::app::App::new(&cache, &config, log_buffer);
    tui::run_tui(app)?;
    Ok(ExitCode::SUCCESS)
}

/// Print one topic's report to stdout
fn run_headless(cache: &DatasetCache, selector: &ViewSelector, json: bool) -> Result<ExitCode> {
    let topic = selector.current_topic();
    let dataset = match cache.get_or_load() {
        Ok(ds) => ds,
        Err(e) => {
            tracing::error!("Dataset load failed: {}", e);
            eprintln!("{}", tui::components::error_banner::banner_message(&e));
            return Ok(ExitCode::FAILURE);
        }
    };
    tracing::info!("Loaded {} records", dataset.len());

    let aggregation = match analysis::aggregate(topic, &dataset) {
        Ok(aggregation) => aggregation,
        Err(e) => {
            eprintln!("{}", tui::components::error_banner::banner_message(&e));
            return Ok(ExitCode::FAILURE);
        }
    };

    let output = if json {
        report::render_json(&aggregation)?
    } else {
        report::render_text(&aggregation)
    };
    print!("{}", output);
    if json {
        println!();
    }
    Ok(ExitCode::SUCCESS)
}
