//! Two-level count hierarchy (road surface → light conditions)

use super::counts::percent;
use serde::Serialize;
use std::collections::HashMap;

/// Root of the hierarchy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hierarchy {
    pub total: usize,
    pub branches: Vec<Branch>,
}

/// First-level node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Branch {
    pub label: String,
    pub count: usize,
    /// Share of the whole table
    pub percent: f64,
    pub leaves: Vec<Leaf>,
}

/// Second-level node; only non-zero leaves exist
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaf {
    pub label: String,
    pub count: usize,
    /// Share of the parent branch
    pub percent: f64,
}

impl Hierarchy {
    /// Build from `(parent, child)` pairs
    ///
    /// Branches and leaves are ordered by count, largest first, with ties in
    /// first-appearance order.
    pub fn build<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        // (label, leaves as (label, count)) in first-appearance order
        let mut branch_slots: HashMap<&str, usize> = HashMap::new();
        let mut branches: Vec<(&str, Vec<(&str, usize)>)> = Vec::new();
        let mut total = 0usize;

        for (parent, child) in pairs {
            total += 1;
            let slot = *branch_slots.entry(parent).or_insert_with(|| {
                branches.push((parent, Vec::new()));
                branches.len() - 1
            });

            let leaves = &mut branches[slot].1;
            match leaves.iter_mut().find(|(label, _)| *label == child) {
                Some((_, count)) => *count += 1,
                None => leaves.push((child, 1)),
            }
        }

        let mut built: Vec<Branch> = branches
            .into_iter()
            .map(|(label, mut leaves)| {
                leaves.sort_by(|a, b| b.1.cmp(&a.1));
                let count: usize = leaves.iter().map(|(_, c)| c).sum();
                Branch {
                    label: label.to_string(),
                    count,
                    percent: percent(count, total),
                    leaves: leaves
                        .into_iter()
                        .map(|(label, c)| Leaf {
                            label: label.to_string(),
                            count: c,
                            percent: percent(c, count),
                        })
                        .collect(),
                }
            })
            .collect();
        built.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            total,
            branches: built,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}
