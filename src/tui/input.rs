// Key debounce for the dashboard
//
// Terminals differ in whether they report key releases and how fast they
// auto-repeat. Each key gets a behavior:
// - StateChange: fires once per press (topic shortcuts, Tab, copy, quit)
// - Repeatable: fires on press, then repeats while held (menu and scroll navigation)

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of a StateChange key when the terminal
/// never sends a release
const STATE_CHANGE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Auto-repeat arrives faster than this; a longer silence means the key was
/// let go, even if no release was reported
const HELD_GAP: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    StateChange,
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(400),
            repeat_interval: Duration::from_millis(60),
        }
    }

    pub fn paging() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(300),
            repeat_interval: Duration::from_millis(30),
        }
    }
}

#[derive(Debug, Default)]
struct KeyState {
    pressed_at: Option<Instant>,
    last_triggered: Option<Instant>,
    last_seen: Option<Instant>,
}

/// Tracks held keys and decides whether a press should trigger an action
#[derive(Debug, Default)]
pub struct InputHandler {
    states: HashMap<KeyCode, KeyState>,
    behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.behaviors.insert(*key, behavior);
        }
    }

    /// Behavior for `key`; unconfigured keys act as StateChange
    pub fn behavior(&self, key: KeyCode) -> KeyBehavior {
        self.behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange)
    }

    /// Handle a key press; returns true if the action should fire
    ///
    /// `repeat` is set for events the terminal itself marks as auto-repeat.
    pub fn handle_key_press(&mut self, key: KeyCode, repeat: bool) -> bool {
        self.press_at(key, Instant::now(), repeat)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.states.remove(&key);
    }

    fn press_at(&mut self, key: KeyCode, now: Instant, repeat: bool) -> bool {
        let behavior = self.behavior(key);
        let state = self.states.entry(key).or_default();

        let previous = state.last_seen.replace(now);
        let held = repeat || previous.is_some_and(|seen| now.duration_since(seen) <= HELD_GAP);

        let (true, Some(pressed_at), Some(last)) = (held, state.pressed_at, state.last_triggered)
        else {
            state.pressed_at = Some(now);
            state.last_triggered = Some(now);
            return true;
        };

        let fire = match behavior {
            KeyBehavior::StateChange => now.duration_since(last) >= STATE_CHANGE_DEBOUNCE,
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                now.duration_since(pressed_at) >= initial_delay
                    && now.duration_since(last) >= repeat_interval
            }
        };
        if fire {
            state.last_triggered = Some(now);
        }
        fire
    }

    /// Key behaviors for the dashboard
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
            ],
            KeyBehavior::navigation(),
        );
        handler.configure_keys(
            &[
                KeyCode::PageUp,
                KeyCode::PageDown,
                KeyCode::Home,
                KeyCode::End,
            ],
            KeyBehavior::paging(),
        );

        // Everything else (1-6, Tab, l, y, q, Esc) is StateChange by default
        handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_change_fires_once_per_press() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Char('2'), t0, false));
        assert!(!handler.press_at(KeyCode::Char('2'), t0 + Duration::from_millis(20), true));

        handler.handle_key_release(KeyCode::Char('2'));
        assert!(handler.press_at(KeyCode::Char('2'), t0 + Duration::from_millis(30), false));
    }

    #[test]
    fn state_change_debounces_without_release() {
        let mut handler = InputHandler::new();
        let t0 = Instant::now();

        // Held Tab auto-repeating every 50ms fires at most every 150ms
        let fired: Vec<u64> = (0..=4)
            .map(|k| k * 50)
            .filter(|&ms| handler.press_at(KeyCode::Tab, t0 + Duration::from_millis(ms), false))
            .collect();
        assert_eq!(fired, vec![0, 150]);
    }

    #[test]
    fn navigation_repeats_after_delay() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        // Auto-repeat every 30ms while ↓ is held
        let fired: Vec<u64> = (0..=20)
            .map(|k| k * 30)
            .filter(|&ms| handler.press_at(KeyCode::Down, t0 + Duration::from_millis(ms), false))
            .collect();
        assert_eq!(fired, vec![0, 420, 480, 540, 600]);
    }

    #[test]
    fn separate_taps_fire_without_release_events() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Down, t0, false));
        assert!(handler.press_at(KeyCode::Down, t0 + Duration::from_millis(180), false));
        assert!(handler.press_at(KeyCode::Char('j'), t0 + Duration::from_millis(200), false));
        assert!(handler.press_at(KeyCode::Char('j'), t0 + Duration::from_millis(350), false));
    }

    #[test]
    fn terminal_repeat_events_count_as_held() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Char('y'), t0, false));
        // First repeat after the OS delay is still the same press
        assert!(!handler.press_at(KeyCode::Char('y'), t0 + Duration::from_millis(140), true));
        // The same gap without the repeat flag reads as a second tap
        assert!(handler.press_at(KeyCode::Char('y'), t0 + Duration::from_millis(400), false));
    }

    #[test]
    fn unconfigured_keys_are_state_change() {
        let handler = InputHandler::with_default_config();
        assert_eq!(handler.behavior(KeyCode::Char('y')), KeyBehavior::StateChange);
        assert_eq!(handler.behavior(KeyCode::Up), KeyBehavior::navigation());
    }
}
