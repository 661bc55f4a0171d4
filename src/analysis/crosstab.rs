//! Two-way count tables (category × severity)

use serde::Serialize;
use std::collections::HashMap;

/// Counts for every (row, column) pair seen in the data
///
/// Every cell is present, including zeros, so a log-scaled chart never has
/// a hole where a category exists but a severity does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossTab {
    pub row_field: &'static str,
    pub column_field: &'static str,
    /// Row categories in first-appearance order
    pub rows: Vec<String>,
    /// Column categories in first-appearance order
    pub columns: Vec<String>,
    /// `counts[row][column]`
    pub counts: Vec<Vec<usize>>,
}

impl CrossTab {
    /// Tally `(row, column)` pairs; pairs with no column value are skipped
    pub fn build<'a, I>(row_field: &'static str, column_field: &'static str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut row_slots: HashMap<&str, usize> = HashMap::new();
        let mut column_slots: HashMap<&str, usize> = HashMap::new();
        let mut rows: Vec<String> = Vec::new();
        let mut columns: Vec<String> = Vec::new();
        let mut counts: Vec<Vec<usize>> = Vec::new();

        for (row, column) in pairs {
            let Some(column) = column else {
                continue;
            };

            let r = *row_slots.entry(row).or_insert_with(|| {
                rows.push(row.to_string());
                counts.push(vec![0; columns.len()]);
                rows.len() - 1
            });

            let c = *column_slots.entry(column).or_insert_with(|| {
                columns.push(column.to_string());
                for cells in counts.iter_mut() {
                    cells.push(0);
                }
                columns.len() - 1
            });

            counts[r][c] += 1;
        }

        Self {
            row_field,
            column_field,
            rows,
            columns,
            counts,
        }
    }

    pub fn get(&self, row: usize, column: usize) -> usize {
        self.counts
            .get(row)
            .and_then(|cells| cells.get(column))
            .copied()
            .unwrap_or(0)
    }

    pub fn row_total(&self, row: usize) -> usize {
        self.counts.get(row).map(|cells| cells.iter().sum()).unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Largest single cell
    pub fn max(&self) -> usize {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
