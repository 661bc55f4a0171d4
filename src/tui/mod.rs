// TUI module - Terminal User Interface
//
// This module manages the dashboard UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - The event loop (keyboard and mouse input, redraw ticks)
// - Routing keys to global actions or the focused panel

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod scroll;
pub mod traits;
pub mod views;

use crate::topic::Topic;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Redraw interval while idle; keeps toasts and the logs panel moving
const TICK: Duration = Duration::from_millis(200);

/// Run the dashboard until the user quits
///
/// Sets up the terminal, runs the event loop and restores the terminal
/// even when the loop fails.
pub fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.refresh();
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        if event::poll(TICK).context("Failed to poll terminal events")? {
            match event::read().context("Failed to read terminal event")? {
                Event::Key(key_event) => handle_key_event(app, key_event),
                Event::Mouse(mouse_event) => handle_mouse_event(app, mouse_event),
                _ => {}
            }
        }

        if app.should_quit {
            tracing::info!("Quit requested");
            break;
        }
    }

    Ok(())
}

pub(crate) fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    let key = key_event.code;

    match key_event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {
            let repeat = key_event.kind == KeyEventKind::Repeat;
            if !app.handle_key_press(key, repeat) {
                return;
            }
            if handle_global_keys(app, &key_event) {
                return;
            }
            // Only quitting works while the dataset failed to load
            if app.load_error().is_some() {
                return;
            }
            if !app.dispatch_to_focused(key_event).was_handled() {
                tracing::trace!("Unhandled key {:?}", key);
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key);
        }
    }
}

/// Handle keys that act the same regardless of focus; returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        _ if app.load_error().is_some() => return false,
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            if let Some(topic) = Topic::from_index(index) {
                app.select_topic(topic);
            }
        }
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Char('l') | KeyCode::Char('L') => app.toggle_logs(),
        KeyCode::Char('y') => app.copy_report(),
        _ => return false,
    }
    true
}

fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.load_error().is_some() {
        return;
    }
    // Synthesize arrow keys so the focused panel scrolls
    let code = match mouse_event.kind {
        MouseEventKind::ScrollUp => KeyCode::Up,
        MouseEventKind::ScrollDown => KeyCode::Down,
        _ => return,
    };
    app.dispatch_to_focused(KeyEvent::new(code, KeyModifiers::NONE));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::dataset_from;
    use crate::dataset::DataLoadError;
    use crate::logging::LogBuffer;
    use crate::theme::Theme;
    use crossterm::event::KeyEventState;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use super::scroll::FocusablePanel;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn tap(app: &mut App, code: KeyCode) {
        handle_key_event(app, press(code));
        handle_key_event(app, release(code));
    }

    fn sample_app() -> App {
        let ds = dataset_from(&["17:02:00,Monday,Asphalt roads,Daylight,Normal,Normal,Slight Injury"]);
        App::with_dataset(
            Path::new("test.csv"),
            Ok(Arc::new(ds)),
            Theme::default(),
            LogBuffer::new(),
        )
    }

    #[test]
    fn number_keys_select_topics() {
        let mut app = sample_app();
        tap(&mut app, KeyCode::Char('4'));
        assert_eq!(app.current_topic(), Topic::RoadsAnalysis);
        tap(&mut app, KeyCode::Char('6'));
        assert_eq!(app.current_topic(), Topic::PeakHoursAnalysis);

        // Out of range digits do nothing
        tap(&mut app, KeyCode::Char('9'));
        assert_eq!(app.current_topic(), Topic::PeakHoursAnalysis);
    }

    #[test]
    fn tab_cycles_focus_and_arrows_follow_it() {
        let mut app = sample_app();
        tap(&mut app, KeyCode::Down);
        assert_eq!(app.current_topic(), Topic::DrunkDriverAnalysis);

        tap(&mut app, KeyCode::Tab);
        assert!(app.is_focused(FocusablePanel::Content));

        // Content focus scrolls instead of changing topic
        tap(&mut app, KeyCode::Down);
        assert_eq!(app.current_topic(), Topic::DrunkDriverAnalysis);
    }

    #[test]
    fn quick_taps_without_release_events_each_move() {
        let mut app = sample_app();
        handle_key_event(&mut app, press(KeyCode::Down));
        std::thread::sleep(std::time::Duration::from_millis(150));
        handle_key_event(&mut app, press(KeyCode::Down));
        assert_eq!(app.current_topic(), Topic::WeatherAnalysis);
    }

    #[test]
    fn q_quits() {
        let mut app = sample_app();
        tap(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn load_error_only_allows_quit() {
        let mut app = App::with_dataset(
            Path::new("missing.csv"),
            Err(DataLoadError::NotFound {
                path: PathBuf::from("missing.csv"),
            }),
            Theme::default(),
            LogBuffer::new(),
        );

        tap(&mut app, KeyCode::Char('3'));
        tap(&mut app, KeyCode::Down);
        tap(&mut app, KeyCode::Tab);
        assert_eq!(app.current_topic(), Topic::OverallAnalysis);
        assert!(app.is_focused(FocusablePanel::Menu));

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
