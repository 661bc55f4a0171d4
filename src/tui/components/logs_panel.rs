//! Logs panel component
//!
//! Shows the tail of the in-memory log buffer. Follows new entries until the
//! user scrolls up; Esc or End resumes following.

use super::scrollbar::render_scrollbar;
use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::scroll::{FocusablePanel, ScrollState};
use crate::tui::traits::{Handled, Interactive, Scrollable};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    scroll: ScrollState,
}

impl LogsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
        }
    }

    /// Sync with the current buffer size; call each frame
    pub fn sync_entries(&mut self, count: usize, viewport_height: usize) {
        self.scroll.update_dimensions(count, viewport_height);
    }

    pub fn is_following(&self) -> bool {
        self.scroll.auto_follow
    }

    pub fn render_with_entries(
        &self,
        f: &mut Frame,
        area: Rect,
        entries: &[LogEntry],
        theme: &Theme,
        focused: bool,
    ) {
        let (start, end) = self.scroll.visible_range();

        let items: Vec<ListItem> = entries[start..end]
            .iter()
            .map(|entry| {
                let mut style = Style::default().fg(theme.log_color(entry.level));
                if entry.level == LogLevel::Error {
                    style = style.add_modifier(Modifier::BOLD);
                }
                ListItem::new(format_log_entry(entry)).style(style)
            })
            .collect();

        let title = if self.is_following() {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(
                    Style::default().fg(theme.panel_border(FocusablePanel::Logs, focused)),
                )
                .title(title),
        );

        f.render_widget(list, area);
        render_scrollbar(f, area, &self.scroll);
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if key.code == KeyCode::Esc && !self.scroll.auto_follow {
            self.scroll_to_bottom();
            return Handled::Yes;
        }
        self.handle_scroll_keys(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:scroll  Esc:follow")
    }
}

/// Events from dependencies carry their target; ours don't
fn format_log_entry(entry: &LogEntry) -> String {
    let time = entry.timestamp.format("%H:%M:%S");
    let level = entry.level.as_str();
    if entry.target.starts_with(env!("CARGO_CRATE_NAME")) {
        format!("[{}] {:5} {}", time, level, entry.message)
    } else {
        format!("[{}] {:5} {}: {}", time, level, entry.target, entry.message)
    }
}

/// Render the logs panel owned by App
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let height = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.get_all();
    let focused = app.is_focused(FocusablePanel::Logs);

    app.logs_panel.sync_entries(entries.len(), height);
    app.logs_panel
        .render_with_entries(f, area, &entries, &app.theme, focused);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn scrolling_up_pauses_follow_and_esc_resumes() {
        let mut panel = LogsPanel::new();
        panel.sync_entries(50, 6);
        assert!(panel.is_following());

        assert!(panel.handle_key(key(KeyCode::Up)).was_handled());
        assert!(!panel.is_following());

        assert!(panel.handle_key(key(KeyCode::Esc)).was_handled());
        assert!(panel.is_following());
        assert_eq!(panel.scroll_state().offset(), 44);

        // Already following: Esc falls through to the app
        assert!(!panel.handle_key(key(KeyCode::Esc)).was_handled());
    }

    #[test]
    fn foreign_targets_are_shown() {
        let mut entry = LogEntry {
            timestamp: chrono::Local::now(),
            level: LogLevel::Warn,
            target: format!("{}::dataset", env!("CARGO_CRATE_NAME")),
            message: "slow load".to_string(),
        };
        assert!(format_log_entry(&entry).ends_with("WARN  slow load"));

        entry.target = "arboard".to_string();
        assert!(format_log_entry(&entry).ends_with("WARN  arboard: slow load"));
    }
}
