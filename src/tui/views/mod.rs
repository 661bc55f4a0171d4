// Views module - screen-level rendering
//
// The shell (title, sidebar, status, optional logs) is drawn every frame.
// The content area dispatches on the active aggregation:
// - Overview: metric cards, severity shares, weekly bars
// - Severity bars: grouped (driver fitness) or horizontal (weather)
// - Roads: surface → light tree
// - Weekly: day × hour heatmap
// - Peak hours: 24-hour profile
// A dataset load error replaces the whole body with a banner.

mod overview;
mod peak_hours;
mod roads;
mod severity_bars;
mod weekly;

use super::app::App;
use super::components::{
    error_banner, logs_panel, scrollbar::render_scrollbar, sidebar, status_bar, title_bar,
};
use super::layout::Breakpoint;
use super::scroll::FocusablePanel;
use super::traits::Scrollable;
use crate::analysis::Aggregation;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const LOGS_HEIGHT: u16 = 8;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(8)];
    if app.show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let body = chunks[1];
    let status_area = chunks[chunks.len() - 1];

    title_bar::render(f, chunks[0], app);

    if let Some(err) = app.load_error() {
        error_banner::render(
            f,
            body,
            &app.theme,
            err,
            &format!(
                "Check the data path ({}) and restart. Press q to quit.",
                app.data_path().display()
            ),
        );
    } else {
        let bp = Breakpoint::from_width(f.area().width);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(bp.sidebar_width()), Constraint::Min(0)])
            .split(body);

        sidebar::render(f, columns[0], app);
        draw_content(f, columns[1], app);
    }

    if app.show_logs {
        logs_panel::render(f, chunks[2], app);
    }
    status_bar::render(f, status_area, app);

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}

fn draw_content(f: &mut Frame, area: Rect, app: &mut App) {
    let topic = app.current_topic();
    let focused = app.is_focused(FocusablePanel::Content);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(
            Style::default().fg(app.theme.panel_border(FocusablePanel::Content, focused)),
        )
        .title(format!(" {} ", topic.title()))
        .title_bottom(Line::from(format!(" {} ", topic.chart().subtitle)).right_aligned());
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Line-based views scroll; charts are fitted to the area
    let scroll_lines = match app.current_view() {
        None => None,
        Some(Err(e)) => {
            error_banner::render(f, inner, &app.theme, e, "Pick another topic with 1-6.");
            None
        }
        Some(Ok(aggregation)) => match aggregation {
            Aggregation::Overall(summary) => {
                overview::render(f, inner, summary, &app.theme);
                None
            }
            Aggregation::DrunkDriver(tab) => {
                severity_bars::render_grouped(f, inner, tab, topic, &app.theme);
                None
            }
            Aggregation::Weather(tab) => {
                severity_bars::render_horizontal(f, inner, tab, topic, &app.theme);
                None
            }
            Aggregation::Roads(tree) => Some(roads::lines(tree, &app.theme)),
            Aggregation::WeeklyHours(matrix) => {
                Some(weekly::lines(matrix, &app.theme, inner.width))
            }
            Aggregation::PeakHours(hourly) => {
                peak_hours::render(f, inner, hourly, &app.theme);
                None
            }
        },
    };

    match scroll_lines {
        Some(lines) => {
            let (start, end) = app.content.sync(lines.len(), inner.height as usize);
            let visible: Vec<Line> = lines.into_iter().skip(start).take(end - start).collect();
            f.render_widget(Paragraph::new(visible), inner);
            render_scrollbar(f, area, app.content.scroll_state());
        }
        None => {
            app.content.sync(0, inner.height as usize);
        }
    }
}
