//! Scroll state for the active topic's content
//!
//! Charts are fitted to the viewport; only the line-based views (roads tree,
//! heatmap rows) overflow and scroll.

use crate::tui::scroll::ScrollState;
use crate::tui::traits::{Handled, Interactive, Scrollable};
use crossterm::event::KeyEvent;

pub struct ContentPanel {
    scroll: ScrollState,
}

impl ContentPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
        }
    }

    /// Sync with the rendered line count; returns the visible range
    pub fn sync(&mut self, total: usize, viewport: usize) -> (usize, usize) {
        self.scroll.update_dimensions(total, viewport);
        self.scroll.visible_range()
    }

    /// Back to the top, used when the topic changes
    pub fn reset(&mut self) {
        self.scroll.reset();
    }
}

impl Default for ContentPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrollable for ContentPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for ContentPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:scroll  PgUp/PgDn:page")
    }
}
