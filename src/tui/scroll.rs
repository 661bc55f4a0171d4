// Scroll state and focus targets for TUI panels
//
// Each panel owns its ScrollState; App only routes input to the focused one.
// Logs auto-follow new entries, the content view scrolls manually.

/// Scroll state for a single panel
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Line/item index at top of viewport
    offset: usize,
    total: usize,
    viewport: usize,

    /// Keep the view pinned to the bottom as content grows
    ///
    /// Scrolling up disables this; reaching the bottom re-enables it.
    pub auto_follow: bool,

    /// Whether reaching the bottom turns auto-follow back on
    follows: bool,
}

impl ScrollState {
    /// Create new scroll state with auto-follow enabled
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
            follows: true,
        }
    }

    /// Create scroll state that stays where the user left it
    pub fn manual() -> Self {
        Self {
            auto_follow: false,
            follows: false,
            ..Self::new()
        }
    }

    /// Update content and viewport dimensions; call each render frame
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;

        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    pub fn scroll_up(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
            self.auto_follow = false;
        }
    }

    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
        if self.total > 0 && self.offset >= self.max_offset() && self.follows {
            self.auto_follow = true;
        }
    }

    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.viewport.max(1));
        self.auto_follow = false;
    }

    pub fn page_down(&mut self) {
        self.offset = (self.offset + self.viewport.max(1)).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        if self.follows {
            self.auto_follow = true;
        }
    }

    /// Back to the top with no remembered dimensions
    pub fn reset(&mut self) {
        self.offset = 0;
        self.total = 0;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Visible range as (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let end = (self.offset + self.viewport).min(self.total);
        (self.offset.min(end), end)
    }

    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Panels that can be focused for input routing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusablePanel {
    /// Topic menu (default focus)
    #[default]
    Menu,
    /// Active chart or table
    Content,
    /// System logs panel (only while visible)
    Logs,
}

impl FocusablePanel {
    /// Tab order; Logs is skipped while the panel is hidden
    pub fn next(self, logs_visible: bool) -> Self {
        match self {
            Self::Menu => Self::Content,
            Self::Content if logs_visible => Self::Logs,
            Self::Content | Self::Logs => Self::Menu,
        }
    }

    pub fn prev(self, logs_visible: bool) -> Self {
        match self {
            Self::Menu if logs_visible => Self::Logs,
            Self::Menu => Self::Content,
            Self::Content => Self::Menu,
            Self::Logs => Self::Content,
        }
    }
}
