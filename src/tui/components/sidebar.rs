//! Topic menu
//!
//! One entry per topic in menu order. The number prefix doubles as the
//! direct-select shortcut.

use crate::selector::ViewSelector;
use crate::topic::Topic;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::scroll::FocusablePanel;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

impl Interactive for ViewSelector {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home => self.select(Topic::ALL[0]),
            KeyCode::End => self.select(Topic::ALL[Topic::ALL.len() - 1]),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:topic")
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let active = app.current_topic();
    let bp = Breakpoint::from_width(f.area().width);
    let focused = app.is_focused(FocusablePanel::Menu);

    let lines: Vec<Line> = Topic::ALL
        .iter()
        .map(|&topic| {
            let is_active = topic == active;
            let style = if is_active {
                Style::default()
                    .fg(theme.selection_fg)
                    .bg(theme.selection)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.foreground)
            };

            let text = if bp.shows_labels() {
                format!(" {} {} {}", topic.index() + 1, topic.icon(), topic.label())
            } else {
                format!(" {}", topic.icon())
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    let title = if bp.shows_labels() { " Topics " } else { "" };
    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.panel_border(FocusablePanel::Menu, focused)))
            .title(title),
    );

    f.render_widget(menu, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrow_keys_walk_the_menu() {
        let mut selector = ViewSelector::new();
        selector.take_render_request();

        assert!(selector.handle_key(key(KeyCode::Down)).was_handled());
        assert_eq!(selector.current_topic(), Topic::DrunkDriverAnalysis);
        assert!(selector.take_render_request());

        selector.handle_key(key(KeyCode::Char('k')));
        assert_eq!(selector.current_topic(), Topic::OverallAnalysis);

        selector.handle_key(key(KeyCode::End));
        assert_eq!(selector.current_topic(), Topic::PeakHoursAnalysis);
        selector.handle_key(key(KeyCode::Home));
        assert_eq!(selector.current_topic(), Topic::OverallAnalysis);
    }

    #[test]
    fn other_keys_fall_through() {
        let mut selector = ViewSelector::new();
        assert!(!selector.handle_key(key(KeyCode::Char('x'))).was_handled());
    }
}
