// Title bar component
//
// App name plus the active topic, with the key-help hint on the right.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const APP_TITLE: &str = "Traffic Accident Dashboard";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title_text = match app.load_error() {
        Some(_) => format!(" 🚦 {}", APP_TITLE),
        None => {
            let topic = app.current_topic();
            format!(" 🚦 {} ──── {} {}", APP_TITLE, topic.icon(), topic.label())
        }
    };

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" q:quit ").right_aligned()),
        );

    f.render_widget(title, area);
}
