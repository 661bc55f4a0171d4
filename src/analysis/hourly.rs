//! Hour-of-day aggregations: weekday heat matrix and the 24-hour profile

use serde::Serialize;
use std::collections::HashMap;

pub const HOURS_PER_DAY: usize = 24;

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Accident counts for every (hour, day) cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatMatrix {
    /// Calendar weekdays first, then any other labels in first-appearance order
    pub days: Vec<String>,
    /// `counts[day][hour]`; cells with no accidents are zero
    pub counts: Vec<[usize; HOURS_PER_DAY]>,
}

impl HeatMatrix {
    /// Tally `(hour, day)` pairs; rows without a day are skipped
    pub fn build<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u8, Option<&'a str>)>,
    {
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut days: Vec<&str> = Vec::new();
        let mut counts: Vec<[usize; HOURS_PER_DAY]> = Vec::new();

        for (hour, day) in pairs {
            let Some(day) = day else {
                continue;
            };
            let slot = *slots.entry(day).or_insert_with(|| {
                days.push(day);
                counts.push([0; HOURS_PER_DAY]);
                days.len() - 1
            });
            counts[slot][usize::from(hour).min(HOURS_PER_DAY - 1)] += 1;
        }

        // Stable sort on weekday rank keeps unknown labels in first-seen order
        let mut order: Vec<usize> = (0..days.len()).collect();
        order.sort_by_key(|&i| weekday_rank(days[i]));

        Self {
            days: order.iter().map(|&i| days[i].to_string()).collect(),
            counts: order.iter().map(|&i| counts[i]).collect(),
        }
    }

    pub fn get(&self, day: usize, hour: usize) -> usize {
        self.counts
            .get(day)
            .and_then(|row| row.get(hour))
            .copied()
            .unwrap_or(0)
    }

    pub fn max(&self) -> usize {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

fn weekday_rank(day: &str) -> usize {
    let day = day.trim();
    WEEKDAYS
        .iter()
        .position(|w| w.eq_ignore_ascii_case(day))
        .unwrap_or(WEEKDAYS.len())
}

/// One bar of the hourly profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourBucket {
    pub hour: u8,
    pub accidents: usize,
}

/// Accidents per hour, always 24 buckets in ascending hour order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyCounts {
    pub buckets: Vec<HourBucket>,
}

impl HourlyCounts {
    pub fn build<I>(hours: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let mut counts = [0usize; HOURS_PER_DAY];
        for hour in hours {
            counts[usize::from(hour).min(HOURS_PER_DAY - 1)] += 1;
        }

        Self {
            buckets: (0u8..)
                .zip(counts)
                .map(|(hour, accidents)| HourBucket { hour, accidents })
                .collect(),
        }
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.accidents).sum()
    }

    /// Busiest hour; the earliest wins a tie
    pub fn peak(&self) -> Option<HourBucket> {
        self.buckets
            .iter()
            .copied()
            .filter(|b| b.accidents > 0)
            .fold(None, |best: Option<HourBucket>, b| match best {
                Some(cur) if cur.accidents >= b.accidents => Some(cur),
                _ => Some(b),
            })
    }
}
