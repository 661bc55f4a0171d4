// Weekly hours view - day × hour heatmap
//
// One row per day, one cell per hour. Cell background encodes the count on
// the theme's heat scale and the count itself is printed when it fits; a
// legend row maps colors back to counts.

use crate::analysis::hourly::HOURS_PER_DAY;
use crate::analysis::HeatMatrix;
use crate::theme::Theme;
use crate::tui::components::format_compact_number;
use crate::tui::components::formatters::truncate_to_width;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

const DAY_LABEL_WIDTH: usize = 10;

/// Cell width in columns for the available width: 3, 2 or 1
pub fn cell_width(available: u16) -> usize {
    let cells = (available as usize).saturating_sub(DAY_LABEL_WIDTH);
    (cells / HOURS_PER_DAY).clamp(1, 3)
}

pub fn lines(matrix: &HeatMatrix, theme: &Theme, available: u16) -> Vec<Line<'static>> {
    if matrix.days.is_empty() {
        return vec![Line::from(Span::styled(
            "No records with a day of week",
            Style::default().fg(theme.muted),
        ))];
    }

    let cell = cell_width(available);
    let max = matrix.max();
    let mut lines = Vec::with_capacity(matrix.days.len() + 4);

    lines.push(hour_axis(cell, theme));

    for (d, day) in matrix.days.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!(
                "{:<w$}",
                truncate_to_width(day, DAY_LABEL_WIDTH - 1),
                w = DAY_LABEL_WIDTH
            ),
            Style::default().fg(theme.foreground),
        )];
        for hour in 0..HOURS_PER_DAY {
            let count = matrix.get(d, hour);
            spans.push(Span::styled(
                cell_text(count, cell),
                Style::default()
                    .fg(theme.background)
                    .bg(theme.heat_color(count, max)),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(legend(max, theme));
    lines
}

/// Count printed inside the cell when it fits, blank otherwise
fn cell_text(count: usize, cell: usize) -> String {
    let label = format_compact_number(count as u64);
    if count > 0 && label.len() <= cell {
        format!("{:>w$}", label, w = cell)
    } else {
        " ".repeat(cell)
    }
}

/// Hour labels every 3 hours, aligned over the cells
fn hour_axis(cell: usize, theme: &Theme) -> Line<'static> {
    let mut axis = " ".repeat(DAY_LABEL_WIDTH);
    let step = 3;
    for hour in (0..HOURS_PER_DAY).step_by(step) {
        axis.push_str(&format!("{:<w$}", hour, w = cell * step));
    }
    Line::from(Span::styled(axis, Style::default().fg(theme.muted)))
}

fn legend(max: usize, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:<w$}", "Accidents", w = DAY_LABEL_WIDTH),
        Style::default().fg(theme.muted),
    )];
    spans.push(Span::styled("0 ", Style::default().fg(theme.muted)));
    for color in theme.heat {
        spans.push(Span::styled("  ", Style::default().bg(color)));
    }
    spans.push(Span::styled(
        format!(" {}", format_compact_number(max as u64)),
        Style::default().fg(theme.muted),
    ));
    Line::from(spans)
}
