/// Responsive breakpoints for the dashboard layout.
///
/// Width thresholds live here so render code never hardcodes column counts.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 70 cols: sidebar shows icons only
    Compact,
    /// 70-119 cols: labelled sidebar
    Normal,
    /// 120+ cols: labelled sidebar with key numbers
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=69 => Breakpoint::Compact,
            70..=119 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    pub fn at_least(self, min: Breakpoint) -> bool {
        self >= min
    }

    /// Sidebar width including borders
    pub fn sidebar_width(self) -> u16 {
        match self {
            Breakpoint::Compact => 6,
            Breakpoint::Normal => 30,
            Breakpoint::Wide => 34,
        }
    }

    /// Whether menu entries show their label next to the icon
    pub fn shows_labels(self) -> bool {
        self.at_least(Breakpoint::Normal)
    }
}
