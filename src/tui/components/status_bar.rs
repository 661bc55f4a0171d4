// Status bar component
//
// Record count, active topic, global keys and the focused panel's hint.

use super::formatters::{format_compact_number, format_number};
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let hint = app.focus_hint().unwrap_or("");

    let status_text = match app.record_count() {
        None => format!(" ✗ {} │ q:quit", app.data_path().display()),
        Some(count) if !bp.at_least(Breakpoint::Wide) => format!(
            " 📄 {} │ {} │ 1-6 Tab y q │ {}",
            format_compact_number(count as u64),
            app.current_topic().icon(),
            hint
        ),
        Some(count) => format!(
            " 📄 {} records │ {} │ 1-6:topic  Tab:focus  l:logs  y:copy  q:quit │ {}",
            format_number(count as u64),
            app.current_topic().title(),
            hint
        ),
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
