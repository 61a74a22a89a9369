//! Extreme value listings
//!
//! Each tail lists at most `cap` cases beyond the inner fence. Extremes
//! are taken first, most distant first; outliers fill the remaining slots.

use crate::fences::{Classification, Fences};
use explore_core::{Observation, ValidCase};
use serde::Serialize;
use std::cmp::Ordering;

/// Default number of cases listed per tail
pub const DEFAULT_EXTREME_COUNT: usize = 5;

/// A listed case
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtremeValueEntry {
    pub value: f64,
    pub case_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    pub classification: Classification,
}

/// Highest and lowest flagged cases with the fences used
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtremeValues {
    pub highest: Vec<ExtremeValueEntry>,
    pub lowest: Vec<ExtremeValueEntry>,
    pub fences: Fences,
}

impl ExtremeValues {
    pub fn is_empty(&self) -> bool {
        self.highest.is_empty() && self.lowest.is_empty()
    }

    /// Every listed entry, highest tail first
    pub fn entries(&self) -> impl Iterator<Item = &ExtremeValueEntry> {
        self.highest.iter().chain(&self.lowest)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tail {
    High,
    Low,
}

/// Flag and list the cases beyond the fences
///
/// `None` when the fences are degenerate (IQR zero or undefined).
/// `observations` supplies case identifiers and may be empty.
pub fn extreme_values(
    cases: &[ValidCase],
    observations: &[Observation],
    fences: Fences,
    cap: usize,
) -> Option<ExtremeValues> {
    if fences.is_degenerate() {
        return None;
    }
    let entry = |case: &ValidCase, classification| ExtremeValueEntry {
        value: case.value,
        case_index: case.index,
        case_id: observations.get(case.index).and_then(|o| o.case_id.clone()),
        classification,
    };

    let mut highest = Vec::new();
    let mut lowest = Vec::new();
    for case in cases {
        if let Some(class) = fences.classify(case.value) {
            if case.value > fences.q3 {
                highest.push(entry(case, class));
            } else {
                lowest.push(entry(case, class));
            }
        }
    }

    Some(ExtremeValues {
        highest: fill_tail(highest, Tail::High, cap),
        lowest: fill_tail(lowest, Tail::Low, cap),
        fences,
    })
}

fn fill_tail(mut candidates: Vec<ExtremeValueEntry>, tail: Tail, cap: usize) -> Vec<ExtremeValueEntry> {
    candidates.sort_by(|a, b| {
        let by_value = match tail {
            Tail::High => b.value.total_cmp(&a.value),
            Tail::Low => a.value.total_cmp(&b.value),
        };
        match by_value {
            Ordering::Equal => a.case_index.cmp(&b.case_index),
            other => other,
        }
    });

    let (extremes, outliers): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .partition(|e| e.classification == Classification::Extreme);

    extremes.into_iter().chain(outliers).take(cap).collect()
}
