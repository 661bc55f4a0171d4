// TUI application state
//
// App owns the loaded dataset (or the reason it failed to load), the view
// selector, the current aggregation and the panel components. Views read
// from it; the event loop mutates it.

use super::clipboard;
use super::components::content_panel::ContentPanel;
use super::components::logs_panel::LogsPanel;
use super::components::Toast;
use super::input::InputHandler;
use super::scroll::FocusablePanel;
use super::traits::{Handled, Interactive};
use crate::analysis::{self, Aggregation, AnalysisError};
use crate::config::Config;
use crate::dataset::{DataLoadError, Dataset, DatasetCache};
use crate::logging::LogBuffer;
use crate::report;
use crate::selector::ViewSelector;
use crate::theme::Theme;
use crate::topic::Topic;
use crossterm::event::{KeyCode, KeyEvent};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct App {
    data_path: PathBuf,

    /// Loaded table, or the error that replaces every view
    dataset: Result<Arc<Dataset>, DataLoadError>,

    pub selector: ViewSelector,

    /// Aggregation for the active topic; None until the first refresh
    current: Option<Result<Aggregation, AnalysisError>>,

    pub theme: Theme,

    pub log_buffer: LogBuffer,
    pub logs_panel: LogsPanel,
    pub content: ContentPanel,

    pub show_logs: bool,
    pub focused: FocusablePanel,
    pub toast: Option<Toast>,
    pub should_quit: bool,

    input_handler: InputHandler,
}

impl App {
    /// Build the app from the shared dataset cache
    ///
    /// A load failure is kept, not returned: the dashboard starts anyway and
    /// shows the error banner.
    pub fn new(cache: &DatasetCache, config: &Config, log_buffer: LogBuffer) -> Self {
        let dataset = cache.get_or_load();
        match &dataset {
            Ok(ds) => tracing::info!(
                "Loaded {} records from {}",
                ds.len(),
                cache.path().display()
            ),
            Err(e) => tracing::error!("Dataset load failed: {}", e),
        }

        let mut app = Self::with_dataset(
            cache.path(),
            dataset,
            Theme::by_name(&config.theme),
            log_buffer,
        );
        app.show_logs = config.show_logs;
        tracing::debug!("Theme: {}", app.theme.name);
        app
    }

    pub fn with_dataset(
        data_path: &Path,
        dataset: Result<Arc<Dataset>, DataLoadError>,
        theme: Theme,
        log_buffer: LogBuffer,
    ) -> Self {
        Self {
            data_path: data_path.to_path_buf(),
            dataset,
            selector: ViewSelector::new(),
            current: None,
            theme,
            log_buffer,
            logs_panel: LogsPanel::new(),
            content: ContentPanel::new(),
            show_logs: false,
            focused: FocusablePanel::default(),
            toast: None,
            should_quit: false,
            input_handler: InputHandler::with_default_config(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn load_error(&self) -> Option<&DataLoadError> {
        self.dataset.as_ref().err()
    }

    pub fn record_count(&self) -> Option<usize> {
        self.dataset.as_ref().ok().map(|ds| ds.len())
    }

    pub fn current_topic(&self) -> Topic {
        self.selector.current_topic()
    }

    /// Aggregation currently on screen
    pub fn current_view(&self) -> Option<&Result<Aggregation, AnalysisError>> {
        self.current.as_ref()
    }

    /// Recompute the aggregation if the selector asked for a render
    ///
    /// Returns true when the content changed.
    pub fn refresh(&mut self) -> bool {
        if !self.selector.take_render_request() {
            return false;
        }
        let Ok(dataset) = &self.dataset else {
            return false;
        };

        let topic = self.selector.current_topic();
        let result = analysis::aggregate(topic, dataset);
        match &result {
            Ok(_) => tracing::debug!("Rendered {}", topic.label()),
            Err(e) => tracing::warn!("{} failed: {}", topic.label(), e),
        }

        self.current = Some(result);
        self.content.reset();
        true
    }

    pub fn select_topic(&mut self, topic: Topic) {
        self.selector.select(topic);
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next(self.show_logs);
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev(self.show_logs);
    }

    pub fn is_focused(&self, panel: FocusablePanel) -> bool {
        self.focused == panel
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if !self.show_logs && self.focused == FocusablePanel::Logs {
            self.focused = FocusablePanel::Content;
        }
    }

    /// Route a key to the focused panel
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.focused {
            FocusablePanel::Menu => self.selector.handle_key(key),
            FocusablePanel::Content => self.content.handle_key(key),
            FocusablePanel::Logs => self.logs_panel.handle_key(key),
        }
    }

    /// Key hint for the focused panel, shown in the status bar
    pub fn focus_hint(&self) -> Option<&'static str> {
        match self.focused {
            FocusablePanel::Menu => self.selector.focus_hint(),
            FocusablePanel::Content => self.content.focus_hint(),
            FocusablePanel::Logs => self.logs_panel.focus_hint(),
        }
    }

    /// Text report of the aggregation on screen
    pub fn copy_report_text(&self) -> Option<String> {
        match self.current.as_ref()? {
            Ok(aggregation) => Some(report::render_text(aggregation)),
            Err(_) => None,
        }
    }

    pub fn copy_report(&mut self) {
        let message = match self.copy_report_text() {
            Some(text) => clipboard::copy_with_feedback(&text, "report"),
            None => "Nothing to copy".to_string(),
        };
        self.show_toast(message);
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Returns true if the action for this press should fire
    pub fn handle_key_press(&mut self, key: KeyCode, repeat: bool) -> bool {
        self.input_handler.handle_key_press(key, repeat)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}
