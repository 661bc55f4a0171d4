//! Interactive trait for panels that handle keyboard input

use crossterm::event::KeyEvent;

/// Result of handling a key event
///
/// `No` lets the event bubble up to App's fallback handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

/// Trait for panels that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (global keys: q, 1-6, Tab, l, y)
///    │ if not handled
///    ▼
/// Focused panel (Interactive::handle_key)
/// ```
pub trait Interactive {
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Keybind hints shown in the status bar while focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
