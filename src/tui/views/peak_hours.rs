// Peak hours view - accidents over the 24 hours of the day
//
// A filled profile (bar dataset) under a line, with the busiest hour marked.

use crate::analysis::HourlyCounts;
use crate::report::format_hour;
use crate::theme::Theme;
use crate::tui::components::{format_compact_number, format_number};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, hourly: &HourlyCounts, theme: &Theme) {
    let points = points(hourly);
    let peak = hourly.peak();
    let peak_point: Vec<(f64, f64)> = peak
        .iter()
        .map(|b| (f64::from(b.hour), b.accidents as f64))
        .collect();

    let y_max = y_bound(hourly);

    let datasets = vec![
        Dataset::default()
            .marker(Marker::HalfBlock)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(theme.heat[1]))
            .data(&points),
        Dataset::default()
            .name("Accidents")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.series_color(0)))
            .data(&points),
        Dataset::default()
            .name("Peak")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            )
            .data(&peak_point),
    ];

    let title = match peak {
        Some(b) => Line::from(vec![
            Span::styled(" Peak: ", Style::default().fg(theme.muted)),
            Span::styled(
                format!(
                    "{} ({} accidents) ",
                    format_hour(b.hour),
                    format_number(b.accidents as u64)
                ),
                Style::default().fg(theme.highlight),
            ),
        ]),
        None => Line::from(Span::styled(
            " No accidents recorded ",
            Style::default().fg(theme.muted),
        )),
    };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border))
                .title(title),
        )
        .x_axis(
            Axis::default()
                .title("Hour of Day")
                .style(Style::default().fg(theme.muted))
                .bounds([0.0, 23.0])
                .labels(
                    ["0:00", "6:00", "12:00", "18:00", "23:00"]
                        .into_iter()
                        .map(Span::from)
                        .collect::<Vec<_>>(),
                ),
        )
        .y_axis(
            Axis::default()
                .title("Accidents")
                .style(Style::default().fg(theme.muted))
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::from("0"),
                    Span::from(format_compact_number((y_max / 2.0) as u64)),
                    Span::from(format_compact_number(y_max as u64)),
                ]),
        );

    f.render_widget(chart, area);
}

fn points(hourly: &HourlyCounts) -> Vec<(f64, f64)> {
    hourly
        .buckets
        .iter()
        .map(|b| (f64::from(b.hour), b.accidents as f64))
        .collect()
}

/// Upper y bound with a little headroom over the peak
fn y_bound(hourly: &HourlyCounts) -> f64 {
    let max = hourly.buckets.iter().map(|b| b.accidents).max().unwrap_or(0);
    (max + (max / 10).max(1)) as f64
}
