// Analysis topics - the fixed menu of dashboard views
//
// A closed enum: every place that dispatches on a topic uses an exhaustive
// match, so adding a topic fails to compile until every view handles it.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a string does not name one of the six topics
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown analysis topic `{0}` (expected one of: overall, drunk-driver, weather, roads, weekly-hours, peak-hours)")]
pub struct InvalidTopicError(pub String);

/// One of the six dashboard views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    #[default]
    OverallAnalysis,
    DrunkDriverAnalysis,
    WeatherAnalysis,
    RoadsAnalysis,
    WeeklyHoursAnalysis,
    PeakHoursAnalysis,
}

/// How a topic's aggregation is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Metric cards plus severity and weekday breakdowns
    Summary,
    /// Vertical bars grouped by category, coloured by severity
    GroupedBars,
    /// Horizontal bars grouped by category, coloured by severity
    HorizontalBars,
    /// Two-level ring/tree of counts
    Sunburst,
    /// Hour × weekday density grid
    Heatmap,
    /// Filled line over the 24 hours
    Area,
}

/// Rendering hints paired with each topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub subtitle: &'static str,
    /// Bar heights use a log scale so small categories stay visible
    pub log_scale: bool,
}

impl Topic {
    /// Menu order
    pub const ALL: [Topic; 6] = [
        Topic::OverallAnalysis,
        Topic::DrunkDriverAnalysis,
        Topic::WeatherAnalysis,
        Topic::RoadsAnalysis,
        Topic::WeeklyHoursAnalysis,
        Topic::PeakHoursAnalysis,
    ];

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            Topic::OverallAnalysis => "Overall Accident Analysis",
            Topic::DrunkDriverAnalysis => "Drunk Driver Analysis",
            Topic::WeatherAnalysis => "Weather Based Analysis",
            Topic::RoadsAnalysis => "Roads Based Analysis",
            Topic::WeeklyHoursAnalysis => "Weekly Hours Analysis",
            Topic::PeakHoursAnalysis => "Accident Peak Hours",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Topic::OverallAnalysis => "📊",
            Topic::DrunkDriverAnalysis => "🍺",
            Topic::WeatherAnalysis => "🌦️",
            Topic::RoadsAnalysis => "🛣️",
            Topic::WeeklyHoursAnalysis => "📅",
            Topic::PeakHoursAnalysis => "⏰",
        }
    }

    /// Short name used on the command line
    pub fn slug(self) -> &'static str {
        match self {
            Topic::OverallAnalysis => "overall",
            Topic::DrunkDriverAnalysis => "drunk-driver",
            Topic::WeatherAnalysis => "weather",
            Topic::RoadsAnalysis => "roads",
            Topic::WeeklyHoursAnalysis => "weekly-hours",
            Topic::PeakHoursAnalysis => "peak-hours",
        }
    }

    /// Page title: icon followed by label
    pub fn title(self) -> String {
        format!("{} {}", self.icon(), self.label())
    }

    pub fn chart(self) -> ChartSpec {
        match self {
            Topic::OverallAnalysis => ChartSpec {
                kind: ChartKind::Summary,
                subtitle: "Severity Breakdown & Weekly Frequency",
                log_scale: false,
            },
            Topic::DrunkDriverAnalysis => ChartSpec {
                kind: ChartKind::GroupedBars,
                subtitle: "Driver Fitness Analysis",
                log_scale: true,
            },
            Topic::WeatherAnalysis => ChartSpec {
                kind: ChartKind::HorizontalBars,
                subtitle: "Accidents by Weather",
                log_scale: true,
            },
            Topic::RoadsAnalysis => ChartSpec {
                kind: ChartKind::Sunburst,
                subtitle: "Road & Light Condition Distribution",
                log_scale: false,
            },
            Topic::WeeklyHoursAnalysis => ChartSpec {
                kind: ChartKind::Heatmap,
                subtitle: "Accident Intensity Heatmap",
                log_scale: false,
            },
            Topic::PeakHoursAnalysis => ChartSpec {
                kind: ChartKind::Area,
                subtitle: "Hourly Accident Trends",
                log_scale: false,
            },
        }
    }

    /// Position in the menu (0-based)
    pub fn index(self) -> usize {
        match self {
            Topic::OverallAnalysis => 0,
            Topic::DrunkDriverAnalysis => 1,
            Topic::WeatherAnalysis => 2,
            Topic::RoadsAnalysis => 3,
            Topic::WeeklyHoursAnalysis => 4,
            Topic::PeakHoursAnalysis => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next topic in menu order (wraps)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous topic in menu order (wraps)
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Topic {
    type Err = InvalidTopicError;

    /// Accepts the slug or the full label, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.slug().eq_ignore_ascii_case(wanted) || t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InvalidTopicError(s.to_string()))
    }
}
