// Report module - plain-text and JSON rendering of an aggregation
//
// Used by headless mode (printed to stdout) and by the TUI's copy action.

use crate::analysis::{Aggregation, CrossTab, HeatMatrix, Hierarchy, HourlyCounts, OverallSummary};
use crate::tui::components::format_number;
use anyhow::{Context, Result};
use std::fmt::Write;

/// Render an aggregation as a human-readable text block
pub fn render_text(aggregation: &Aggregation) -> String {
    let topic = aggregation.topic();
    let mut out = String::new();
    let _ = writeln!(out, "{}", topic.title());
    let _ = writeln!(out, "{}", topic.chart().subtitle);
    out.push('\n');

    match aggregation {
        Aggregation::Overall(summary) => write_overall(&mut out, summary),
        Aggregation::DrunkDriver(tab) | Aggregation::Weather(tab) => write_crosstab(&mut out, tab),
        Aggregation::Roads(tree) => write_hierarchy(&mut out, tree),
        Aggregation::WeeklyHours(matrix) => write_heat_matrix(&mut out, matrix),
        Aggregation::PeakHours(hourly) => write_hourly(&mut out, hourly),
    }

    out
}

/// Render an aggregation as pretty-printed JSON
pub fn render_json(aggregation: &Aggregation) -> Result<String> {
    serde_json::to_string_pretty(aggregation).context("Failed to serialize aggregation")
}

/// Format an hour as the dashboard shows it ("17:00")
pub fn format_hour(hour: u8) -> String {
    format!("{}:00", hour)
}

fn write_overall(out: &mut String, summary: &OverallSummary) {
    let _ = writeln!(
        out,
        "Total Records: {}",
        format_number(summary.total_records as u64)
    );
    let _ = writeln!(out, "Top Weather:   {}", summary.top_weather);
    let _ = writeln!(out, "Peak Hour:     {}", format_hour(summary.peak_hour));

    out.push_str("\nSeverity Breakdown\n");
    for slice in &summary.severity {
        let _ = writeln!(
            out,
            "  {:<24} {:>8}  {:5.1}%",
            slice.value, slice.count, slice.percent
        );
    }

    out.push_str("\nWeekly Frequency\n");
    for day in &summary.weekly {
        let _ = writeln!(out, "  {:<24} {:>8}", day.value, day.count);
    }
}

fn write_crosstab(out: &mut String, tab: &CrossTab) {
    let width = tab
        .rows
        .iter()
        .map(|r| r.chars().count())
        .max()
        .unwrap_or(0)
        .max(tab.row_field.len());

    let _ = write!(out, "{:<width$}", tab.row_field);
    for column in &tab.columns {
        let _ = write!(out, "  {:>w$}", column, w = column.chars().count().max(6));
    }
    let _ = writeln!(out, "  {:>6}", "Total");

    for (r, row) in tab.rows.iter().enumerate() {
        let _ = write!(out, "{:<width$}", row);
        for (c, column) in tab.columns.iter().enumerate() {
            let _ = write!(
                out,
                "  {:>w$}",
                tab.get(r, c),
                w = column.chars().count().max(6)
            );
        }
        let _ = writeln!(out, "  {:>6}", tab.row_total(r));
    }

    let _ = writeln!(out, "\nTotal: {}", format_number(tab.total() as u64));
}

fn write_hierarchy(out: &mut String, tree: &Hierarchy) {
    for branch in &tree.branches {
        let _ = writeln!(
            out,
            "{} ({}, {:.1}%)",
            branch.label, branch.count, branch.percent
        );
        let last = branch.leaves.len().saturating_sub(1);
        for (i, leaf) in branch.leaves.iter().enumerate() {
            let connector = if i == last { "└─" } else { "├─" };
            let _ = writeln!(
                out,
                "  {} {} ({}, {:.1}% of entry)",
                connector, leaf.label, leaf.count, leaf.percent
            );
        }
    }
}

fn write_heat_matrix(out: &mut String, matrix: &HeatMatrix) {
    let width = matrix
        .days
        .iter()
        .map(|d| d.chars().count())
        .max()
        .unwrap_or(3)
        .max(3);

    let _ = write!(out, "{:<width$}", "Day");
    for hour in 0..24 {
        let _ = write!(out, " {:>3}", hour);
    }
    out.push('\n');

    for (d, day) in matrix.days.iter().enumerate() {
        let _ = write!(out, "{:<width$}", day);
        for hour in 0..24 {
            let _ = write!(out, " {:>3}", matrix.get(d, hour));
        }
        out.push('\n');
    }

    let _ = writeln!(out, "\nTotal: {}", format_number(matrix.total() as u64));
}

fn write_hourly(out: &mut String, hourly: &HourlyCounts) {
    let _ = writeln!(out, "{:>5}  {:>9}", "Hour", "Accidents");
    for bucket in &hourly.buckets {
        let _ = writeln!(out, "{:>5}  {:>9}", bucket.hour, bucket.accidents);
    }
    let _ = writeln!(out, "\nTotal: {}", format_number(hourly.total() as u64));
}
