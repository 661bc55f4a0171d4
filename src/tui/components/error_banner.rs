//! Full-width error banner
//!
//! Replaces the content area when the dataset cannot be loaded or a topic
//! cannot be aggregated. The process stays up; only quitting works while a
//! load error is shown.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn banner_message(error: &dyn std::fmt::Display) -> String {
    format!("Something went wrong: {}", error)
}

pub fn render(f: &mut Frame, area: Rect, theme: &Theme, error: &dyn std::fmt::Display, hint: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            banner_message(error),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(hint.to_string(), Style::default().fg(theme.muted))),
    ];

    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.error))
                .title(" Error "),
        );

    f.render_widget(banner, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DataLoadError;
    use std::path::PathBuf;

    #[test]
    fn banner_names_the_failure() {
        let err = DataLoadError::NotFound {
            path: PathBuf::from("traffic_accidents.csv"),
        };
        let msg = banner_message(&err);
        assert!(msg.starts_with("Something went wrong: "));
        assert!(msg.contains("traffic_accidents.csv"));
    }
}
