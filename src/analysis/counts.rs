//! Counting primitives shared by the topic aggregations

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// A distinct value with its frequency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
    /// Share of all counted values, 0.0..=100.0
    pub percent: f64,
}

/// Count distinct values, most frequent first
///
/// Equal counts keep the order in which values first appeared.
pub fn value_counts<'a, I>(values: I) -> Vec<ValueCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut total = 0usize;

    for value in values {
        total += 1;
        match slots.get(value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }

    // sort_by is stable, so ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
            percent: percent(count, total),
        })
        .collect()
}

/// Most frequent value
///
/// Ties resolve to the smallest value in natural order, the same answer a
/// sorted mode gives. `None` for an empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let max = counts.values().copied().max()?;
    counts
        .into_iter()
        .find(|(_, count)| *count == max)
        .map(|(value, _)| value)
}

/// `part` as a percentage of `whole` (0.0 when `whole` is zero)
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
