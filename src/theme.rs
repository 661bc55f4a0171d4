// Theme support for the TUI
//
// Color palettes selected by name from the config file or --theme.
// "auto" uses the terminal's ANSI palette, named themes use true color (RGB).

use crate::logging::LogLevel;
use crate::tui::scroll::FocusablePanel;
use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Theme names accepted by [`Theme::by_name`]
pub const THEME_NAMES: [&str; 4] = ["auto", "dracula", "nord", "gruvbox"];

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub border_type: BorderType,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub title: Color,
    pub status_bar: Color,
    pub highlight: Color,
    pub error: Color,

    // Active menu entry
    pub selection: Color,
    pub selection_fg: Color,

    // Panel identity colors (used when focused)
    pub panel_menu: Color,
    pub panel_content: Color,
    pub panel_logs: Color,

    /// Metric card values
    pub metric: Color,

    /// One color per series (severity level, day, ...), cycled
    pub series: [Color; 6],

    /// Heatmap ramp, coldest first
    pub heat: [Color; 5],
}

impl Theme {
    /// Load theme by name; unknown names fall back to "auto"
    pub fn by_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            other => {
                if !THEME_NAMES.contains(&other) {
                    tracing::warn!("Unknown theme '{}', using auto", name);
                }
                Self::auto()
            }
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            border_type: BorderType::Rounded,
            background: Color::Reset,
            foreground: Color::Reset,
            muted: Color::DarkGray,
            border: Color::Gray,
            title: Color::Cyan,
            status_bar: Color::Green,
            highlight: Color::Yellow,
            error: Color::Red,
            selection: Color::Cyan,
            selection_fg: Color::Black,
            panel_menu: Color::Cyan,
            panel_content: Color::Yellow,
            panel_logs: Color::DarkGray,
            metric: Color::LightCyan,
            series: [
                Color::Cyan,
                Color::Yellow,
                Color::Red,
                Color::Green,
                Color::Magenta,
                Color::Blue,
            ],
            heat: [
                Color::DarkGray,
                Color::Blue,
                Color::Green,
                Color::Yellow,
                Color::Red,
            ],
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            border_type: BorderType::Rounded,
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            muted: Color::Rgb(0x62, 0x72, 0xa4),        // comment
            border: Color::Rgb(0x62, 0x72, 0xa4),       // comment
            title: Color::Rgb(0x8b, 0xe9, 0xfd),        // cyan
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b),   // green
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),    // yellow
            error: Color::Rgb(0xff, 0x55, 0x55),        // red
            selection: Color::Rgb(0xbd, 0x93, 0xf9),    // purple
            selection_fg: Color::Rgb(0x28, 0x2a, 0x36), // background
            panel_menu: Color::Rgb(0x8b, 0xe9, 0xfd),
            panel_content: Color::Rgb(0xf1, 0xfa, 0x8c),
            panel_logs: Color::Rgb(0x62, 0x72, 0xa4),
            metric: Color::Rgb(0xff, 0x79, 0xc6), // pink
            series: [
                Color::Rgb(0x8b, 0xe9, 0xfd),
                Color::Rgb(0xff, 0xb8, 0x6c),
                Color::Rgb(0xff, 0x55, 0x55),
                Color::Rgb(0x50, 0xfa, 0x7b),
                Color::Rgb(0xbd, 0x93, 0xf9),
                Color::Rgb(0xff, 0x79, 0xc6),
            ],
            heat: [
                Color::Rgb(0x44, 0x47, 0x5a),
                Color::Rgb(0x62, 0x72, 0xa4),
                Color::Rgb(0xbd, 0x93, 0xf9),
                Color::Rgb(0xff, 0x79, 0xc6),
                Color::Rgb(0xff, 0x55, 0x55),
            ],
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            border_type: BorderType::Plain,
            background: Color::Rgb(0x2e, 0x34, 0x40),
            foreground: Color::Rgb(0xec, 0xef, 0xf4),
            muted: Color::Rgb(0x4c, 0x56, 0x6a),        // polar night
            border: Color::Rgb(0x4c, 0x56, 0x6a),       // polar night
            title: Color::Rgb(0x88, 0xc0, 0xd0),        // frost cyan
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c),   // aurora green
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),    // aurora yellow
            error: Color::Rgb(0xbf, 0x61, 0x6a),        // aurora red
            selection: Color::Rgb(0x81, 0xa1, 0xc1),    // frost blue
            selection_fg: Color::Rgb(0x2e, 0x34, 0x40), // background
            panel_menu: Color::Rgb(0x88, 0xc0, 0xd0),
            panel_content: Color::Rgb(0xeb, 0xcb, 0x8b),
            panel_logs: Color::Rgb(0x4c, 0x56, 0x6a),
            metric: Color::Rgb(0x8f, 0xbc, 0xbb), // frost teal
            series: [
                Color::Rgb(0x88, 0xc0, 0xd0),
                Color::Rgb(0xd0, 0x87, 0x70),
                Color::Rgb(0xbf, 0x61, 0x6a),
                Color::Rgb(0xa3, 0xbe, 0x8c),
                Color::Rgb(0xb4, 0x8e, 0xad),
                Color::Rgb(0xeb, 0xcb, 0x8b),
            ],
            heat: [
                Color::Rgb(0x3b, 0x42, 0x52),
                Color::Rgb(0x5e, 0x81, 0xac),
                Color::Rgb(0x88, 0xc0, 0xd0),
                Color::Rgb(0xeb, 0xcb, 0x8b),
                Color::Rgb(0xbf, 0x61, 0x6a),
            ],
        }
    }

    /// Gruvbox theme - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            border_type: BorderType::Plain,
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            muted: Color::Rgb(0x92, 0x83, 0x74),        // gray
            border: Color::Rgb(0x92, 0x83, 0x74),       // gray
            title: Color::Rgb(0x83, 0xa5, 0x98),        // aqua
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26),   // green
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),    // yellow
            error: Color::Rgb(0xfb, 0x49, 0x34),        // red
            selection: Color::Rgb(0xd7, 0x99, 0x21),    // dark yellow
            selection_fg: Color::Rgb(0x28, 0x28, 0x28), // background
            panel_menu: Color::Rgb(0x83, 0xa5, 0x98),
            panel_content: Color::Rgb(0xfa, 0xbd, 0x2f),
            panel_logs: Color::Rgb(0x92, 0x83, 0x74),
            metric: Color::Rgb(0xfe, 0x80, 0x19), // orange
            series: [
                Color::Rgb(0x83, 0xa5, 0x98),
                Color::Rgb(0xfe, 0x80, 0x19),
                Color::Rgb(0xfb, 0x49, 0x34),
                Color::Rgb(0xb8, 0xbb, 0x26),
                Color::Rgb(0xd3, 0x86, 0x9b),
                Color::Rgb(0xfa, 0xbd, 0x2f),
            ],
            heat: [
                Color::Rgb(0x3c, 0x38, 0x36),
                Color::Rgb(0x45, 0x85, 0x88),
                Color::Rgb(0x98, 0x97, 0x1a),
                Color::Rgb(0xd7, 0x99, 0x21),
                Color::Rgb(0xcc, 0x24, 0x1d),
            ],
        }
    }
}

impl Theme {
    /// Color for the `index`-th series, wrapping around the palette
    pub fn series_color(&self, index: usize) -> Color {
        self.series[index % self.series.len()]
    }

    /// Heatmap color for `count` on a `0..=max` scale
    ///
    /// Zero always maps to the coldest step; the hottest step is reserved
    /// for the maximum.
    pub fn heat_color(&self, count: usize, max: usize) -> Color {
        self.heat[heat_step(count, max, self.heat.len())]
    }

    /// Border color for a panel based on focus state
    pub fn panel_border(&self, panel: FocusablePanel, focused: bool) -> Color {
        if !focused {
            return self.border;
        }
        match panel {
            FocusablePanel::Menu => self.panel_menu,
            FocusablePanel::Content => self.panel_content,
            FocusablePanel::Logs => self.panel_logs,
        }
    }

    pub fn log_color(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Error => self.error,
            LogLevel::Warn => self.highlight,
            LogLevel::Info => self.title,
            LogLevel::Debug | LogLevel::Trace => self.muted,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}

fn heat_step(count: usize, max: usize, steps: usize) -> usize {
    if count == 0 || max == 0 || steps < 2 {
        return 0;
    }
    if count >= max {
        return steps - 1;
    }
    // Non-zero, below max: spread over the middle steps
    let warm = steps - 2;
    1 + (count * warm).saturating_sub(1) / max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_is_case_insensitive_with_fallback() {
        assert_eq!(Theme::by_name("Nord").name, "nord");
        assert_eq!(Theme::by_name(" gruvbox ").name, "gruvbox");
        assert_eq!(Theme::by_name("solarized").name, "auto");
        for name in THEME_NAMES {
            assert_eq!(Theme::by_name(name).name, name);
        }
    }

    #[test]
    fn heat_ramp_bounds() {
        assert_eq!(heat_step(0, 10, 5), 0);
        assert_eq!(heat_step(10, 10, 5), 4);
        assert_eq!(heat_step(1, 10, 5), 1);
        assert_eq!(heat_step(9, 10, 5), 3);
        assert_eq!(heat_step(5, 0, 5), 0);
    }

    #[test]
    fn heat_ramp_is_monotonic() {
        let steps: Vec<usize> = (0..=20).map(|c| heat_step(c, 20, 5)).collect();
        assert!(steps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn series_colors_wrap() {
        let theme = Theme::auto();
        assert_eq!(theme.series_color(0), theme.series_color(6));
    }
}
