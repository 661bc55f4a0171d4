//! Scrollable trait for panels with more content than fits
//!
//! Panels own a `ScrollState` and expose it here; navigation defaults
//! delegate to it.

use super::Handled;
use crate::tui::scroll::ScrollState;
use crossterm::event::{KeyCode, KeyEvent};

pub trait Scrollable {
    fn scroll_state(&self) -> &ScrollState;

    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    fn scroll_up(&mut self) {
        self.scroll_state_mut().scroll_up();
    }

    fn scroll_down(&mut self) {
        self.scroll_state_mut().scroll_down();
    }

    fn scroll_to_top(&mut self) {
        self.scroll_state_mut().scroll_to_top();
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_state_mut().scroll_to_bottom();
    }

    fn page_up(&mut self) {
        self.scroll_state_mut().page_up();
    }

    fn page_down(&mut self) {
        self.scroll_state_mut().page_down();
    }

    /// Standard scroll keys: ↑↓/jk, Home/End, PageUp/PageDown
    fn handle_scroll_keys(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Home => self.scroll_to_top(),
            KeyCode::End => self.scroll_to_bottom(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            _ => return Handled::No,
        }
        Handled::Yes
    }
}
