// Overview view - headline metrics, severity shares, weekly frequency

use crate::analysis::OverallSummary;
use crate::report::format_hour;
use crate::theme::Theme;
use crate::tui::components::formatters::{share_bar, slot_count, truncate_to_width};
use crate::tui::components::{format_compact_number, format_number};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, summary: &OverallSummary, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(area);

    render_metric_cards(f, rows[0], summary, theme);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    render_severity(f, panels[0], summary, theme);
    render_weekly(f, panels[1], summary, theme);
}

fn render_metric_cards(f: &mut Frame, area: Rect, summary: &OverallSummary, theme: &Theme) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let metrics = [
        ("Total Records", format_number(summary.total_records as u64)),
        ("Top Weather", summary.top_weather.clone()),
        ("Peak Hour", format_hour(summary.peak_hour)),
    ];

    for ((label, value), card) in metrics.into_iter().zip(cards.iter()) {
        let width = card.width.saturating_sub(4) as usize;
        let text = vec![
            Line::from(Span::styled(
                truncate_to_width(&value, width),
                Style::default()
                    .fg(theme.metric)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(theme.muted))),
        ];

        let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border)),
        );
        f.render_widget(paragraph, *card);
    }
}

fn render_severity(f: &mut Frame, area: Rect, summary: &OverallSummary, theme: &Theme) {
    let label_width = summary
        .severity
        .iter()
        .map(|s| s.value.len())
        .max()
        .unwrap_or(0)
        .min(18);
    // label, space, bar, percentage
    let bar_width = (area.width as usize).saturating_sub(label_width + 12).max(4);

    let lines: Vec<Line> = summary
        .severity
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<w$} ", truncate_to_width(&slice.value, label_width), w = label_width),
                    Style::default().fg(theme.foreground),
                ),
                Span::styled(
                    format!("{:<w$}", share_bar(slice.percent, bar_width), w = bar_width),
                    Style::default().fg(theme.series_color(i)),
                ),
                Span::styled(
                    format!(" {:5.1}%", slice.percent),
                    Style::default().fg(theme.muted),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" Severity Breakdown "),
    );
    f.render_widget(paragraph, area);
}

fn render_weekly(f: &mut Frame, area: Rect, summary: &OverallSummary, theme: &Theme) {
    let bars: Vec<Bar> = summary
        .weekly
        .iter()
        .enumerate()
        .map(|(i, day)| {
            Bar::default()
                .label(Line::from(day_abbrev(&day.value)))
                .value(day.count as u64)
                .text_value(format_compact_number(day.count as u64))
                .style(Style::default().fg(theme.series_color(i)))
        })
        .collect();

    let slots = slot_count(summary.weekly.len());
    let bar_width = (area.width.saturating_sub(2) / slots).saturating_sub(1).clamp(3, 9);

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(" Weekly Frequency "),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .style(Style::default().fg(theme.foreground));

    f.render_widget(chart, area);
}

/// "Wednesday" -> "Wed"
fn day_abbrev(day: &str) -> String {
    day.chars().take(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_abbreviations() {
        assert_eq!(day_abbrev("Wednesday"), "Wed");
        assert_eq!(day_abbrev("Fr"), "Fr");
    }
}
