// Severity bar charts - category × severity counts
//
// Driver fitness renders as vertical grouped bars, weather as horizontal
// bars. Heights are log-scaled when the topic asks for it; labels always
// show the real count.

use crate::analysis::CrossTab;
use crate::theme::Theme;
use crate::topic::Topic;
use crate::tui::components::format_compact_number;
use crate::tui::components::formatters::{log_height, slot_count, truncate_to_width};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Vertical grouped bars, one group per row category
pub fn render_grouped(f: &mut Frame, area: Rect, tab: &CrossTab, topic: Topic, theme: &Theme) {
    let Some(chart_area) = render_frame(f, area, tab, theme) else {
        return;
    };
    let log_scale = topic.chart().log_scale;

    let groups = build_groups(tab, theme, log_scale, 10);
    let columns = slot_count(tab.columns.len());
    let rows = slot_count(tab.rows.len());
    let group_gap: u16 = 2;
    let per_group = chart_area.width.saturating_sub(group_gap.saturating_mul(rows)) / rows;
    let bar_width = (per_group / columns).clamp(1, 7);

    let mut chart = BarChart::default()
        .max(bar_value(tab.max(), log_scale))
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(group_gap)
        .style(Style::default().fg(theme.foreground));
    for group in groups {
        chart = chart.data(group);
    }

    f.render_widget(chart, chart_area);
}

/// Horizontal bars, one block of bars per row category
pub fn render_horizontal(f: &mut Frame, area: Rect, tab: &CrossTab, topic: Topic, theme: &Theme) {
    let Some(chart_area) = render_frame(f, area, tab, theme) else {
        return;
    };
    let log_scale = topic.chart().log_scale;

    let label_width = chart_area.width.saturating_sub(10) as usize / 3;
    let mut chart = BarChart::default()
        .direction(Direction::Horizontal)
        .max(bar_value(tab.max(), log_scale))
        .bar_width(1)
        .bar_gap(0)
        .group_gap(1)
        .style(Style::default().fg(theme.foreground));
    for group in build_groups(tab, theme, log_scale, label_width.max(6)) {
        chart = chart.data(group);
    }

    f.render_widget(chart, chart_area);
}

/// Outer block plus severity legend; returns the chart area, or None when
/// there is nothing to draw
fn render_frame(f: &mut Frame, area: Rect, tab: &CrossTab, theme: &Theme) -> Option<Rect> {
    if tab.is_empty() {
        let placeholder = Paragraph::new("No records with a severity")
            .style(Style::default().fg(theme.muted));
        f.render_widget(placeholder, area);
        return None;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    f.render_widget(Paragraph::new(legend(tab, theme)), chunks[0]);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border))
        .title(format!(" {} ", tab.row_field.replace('_', " ")));
    let inner = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);
    Some(inner)
}

fn legend(tab: &CrossTab, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{}: ", tab.column_field.replace('_', " ")),
        Style::default().fg(theme.muted),
    )];
    for (c, column) in tab.columns.iter().enumerate() {
        spans.push(Span::styled("■ ", Style::default().fg(theme.series_color(c))));
        spans.push(Span::styled(
            format!("{}  ", column),
            Style::default().fg(theme.foreground),
        ));
    }
    Line::from(spans)
}

fn build_groups(
    tab: &CrossTab,
    theme: &Theme,
    log_scale: bool,
    label_width: usize,
) -> Vec<BarGroup<'static>> {
    tab.rows
        .iter()
        .enumerate()
        .map(|(r, row)| {
            let bars: Vec<Bar> = (0..tab.columns.len())
                .map(|c| {
                    let count = tab.get(r, c);
                    Bar::default()
                        .value(bar_value(count, log_scale))
                        .text_value(format_compact_number(count as u64))
                        .style(Style::default().fg(theme.series_color(c)))
                        .value_style(Style::default().fg(theme.foreground))
                })
                .collect();
            BarGroup::default()
                .label(Line::from(truncate_to_width(row, label_width)))
                .bars(&bars)
        })
        .collect()
}

/// Bar length: log-scaled when requested, raw count otherwise
pub fn bar_value(count: usize, log_scale: bool) -> u64 {
    if log_scale {
        log_height(count)
    } else {
        count as u64
    }
}
