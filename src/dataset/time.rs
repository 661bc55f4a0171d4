//! Timestamp parsing for the `Time` column
//!
//! The source tables mix bare clock times ("17:02:00") with full datetimes,
//! so a value is tried against a fixed list of formats, most specific first.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Datetime layouts, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
];

/// Clock-only layouts, tried after the datetime ones
const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S%.f",
    "%H:%M",
    "%I:%M:%S %p",
    "%I:%M %p",
];

/// Date-only layouts (midnight)
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// A parsed `Time` cell
///
/// `date` is `None` when the source only carried a clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub date: Option<NaiveDate>,
    pub time: NaiveTime,
}

impl Timestamp {
    /// Hour component, always in 0..=23
    pub fn hour(&self) -> u8 {
        // NaiveTime::hour() is bounded by construction
        self.time.hour() as u8
    }

    /// Parse a raw cell, returning `None` if no known layout matches
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            let naive = dt.naive_local();
            return Some(Self::from_datetime(naive));
        }

        for fmt in DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Some(Self::from_datetime(naive));
            }
        }

        for fmt in TIME_FORMATS {
            if let Ok(time) = NaiveTime::parse_from_str(raw, fmt) {
                return Some(Self { date: None, time });
            }
        }

        DATE_FORMATS.iter().find_map(|fmt| {
            NaiveDate::parse_from_str(raw, fmt)
                .ok()
                .map(|date| Self {
                    date: Some(date),
                    time: NaiveTime::MIN,
                })
        })
    }

    fn from_datetime(naive: NaiveDateTime) -> Self {
        Self {
            date: Some(naive.date()),
            time: naive.time(),
        }
    }
}
