//! Modes and frequency tables

use explore_core::{VariableDefinition, WeightedDistribution};
use serde::Serialize;
use std::fmt;

/// Round to one decimal place
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// One row of a frequency table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyRow {
    pub label: String,
    pub value: f64,
    pub frequency: f64,
    /// Percent of all cases, missing included (one decimal)
    pub percent: f64,
    /// Percent of valid cases (one decimal)
    pub valid_percent: f64,
    /// Running sum of the rounded valid percents
    pub cumulative_valid_percent: f64,
}

/// Frequency table of the valid values
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyTable {
    pub rows: Vec<FrequencyRow>,
    pub valid: f64,
    pub missing: f64,
    pub total: f64,
}

impl FrequencyTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<16} {:>10} {:>8} {:>8} {:>8}", "Value", "Frequency", "Percent", "Valid", "Cum")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<16} {:>10} {:>8.1} {:>8.1} {:>8.1}",
                row.label, row.frequency, row.percent, row.valid_percent, row.cumulative_valid_percent
            )?;
        }
        write!(f, "{:<16} {:>10}", "Total", self.valid)
    }
}

/// Summary block reported next to the frequency table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencySummary {
    pub n: f64,
    pub valid: f64,
    pub missing: f64,
    pub modes: Vec<f64>,
    pub multiple_modes: bool,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub range: Option<f64>,
    pub sum: f64,
}

/// Builds modes and frequency tables from a distribution
#[derive(Debug, Clone, Copy)]
pub struct FrequencyTableBuilder<'a> {
    dist: &'a WeightedDistribution,
    variable: &'a VariableDefinition,
}

impl<'a> FrequencyTableBuilder<'a> {
    pub fn new(dist: &'a WeightedDistribution, variable: &'a VariableDefinition) -> Self {
        Self { dist, variable }
    }

    /// All values sharing the largest weight, ascending
    pub fn modes(&self) -> Vec<f64> {
        let Some(max) = self.dist.weights().iter().copied().reduce(f64::max) else {
            return Vec::new();
        };
        self.dist
            .values()
            .iter()
            .zip(self.dist.weights())
            .filter(|(_, &w)| w == max)
            .map(|(&x, _)| x)
            .collect()
    }

    /// Frequency table with percentages of `total_n` (missing included)
    ///
    /// `None` when there is no valid weight. Percent columns are rounded
    /// to one decimal and the cumulative column accumulates the rounded
    /// valid percents row by row.
    pub fn frequency_table(&self, total_n: f64) -> Option<FrequencyTable> {
        let valid = self.dist.total_weight();
        if valid <= 0.0 {
            return None;
        }
        let total = if total_n > 0.0 { total_n } else { valid };

        let mut cumulative = 0.0;
        let rows = self
            .dist
            .values()
            .iter()
            .zip(self.dist.weights())
            .map(|(&value, &frequency)| {
                let valid_percent = round1(frequency / valid * 100.0);
                cumulative = round1(cumulative + valid_percent);
                FrequencyRow {
                    label: self.label(value),
                    value,
                    frequency,
                    percent: round1(frequency / total * 100.0),
                    valid_percent,
                    cumulative_valid_percent: cumulative,
                }
            })
            .collect();

        Some(FrequencyTable {
            rows,
            valid,
            missing: (total - valid).max(0.0),
            total,
        })
    }

    /// Summary with N, valid/missing counts, modes and range
    pub fn summary(&self, total_n: f64) -> FrequencySummary {
        let valid = self.dist.total_weight();
        let n = total_n.max(valid);
        let modes = self.modes();
        let (minimum, maximum) = (self.dist.min(), self.dist.max());
        FrequencySummary {
            n,
            valid,
            missing: n - valid,
            multiple_modes: modes.len() > 1,
            modes,
            minimum,
            maximum,
            range: minimum.zip(maximum).map(|(lo, hi)| hi - lo),
            sum: self.dist.sum(),
        }
    }

    fn label(&self, value: f64) -> String {
        self.variable
            .label_for(value)
            .map_or_else(|| value.to_string(), str::to_string)
    }
}
