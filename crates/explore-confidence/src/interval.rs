//! Confidence interval for the mean

use crate::t_table;
use explore_core::{BaseDescriptives, Error, Result};
use serde::Serialize;
use tracing::debug;

/// Level used when none is configured
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 95.0;

/// Two-sided interval around the mean
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    /// Confidence level in percent
    pub level: f64,
    pub critical_value: f64,
    pub df: f64,
}

impl ConfidenceInterval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

/// Interval estimator at a fixed confidence level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceIntervalEstimator {
    level: f64,
}

impl ConfidenceIntervalEstimator {
    /// Estimator at `level` percent, which must be in `(0, 100)`
    pub fn new(level: f64) -> Result<Self> {
        if !(level > 0.0 && level < 100.0) {
            return Err(Error::invalid_confidence_level(level));
        }
        Ok(Self { level })
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn alpha(&self) -> f64 {
        (100.0 - self.level) / 100.0
    }

    /// Interval `mean ± t·se` with `df = valid_weight − 1`
    ///
    /// `None` when `valid_weight ≤ 1` or `mean`/`se_mean` are not finite.
    pub fn estimate(&self, mean: f64, se_mean: f64, valid_weight: f64) -> Option<ConfidenceInterval> {
        if !(mean.is_finite() && se_mean.is_finite() && valid_weight > 1.0) {
            return None;
        }
        let df = valid_weight - 1.0;
        let alpha = self.alpha();
        let critical_value = t_table::critical_value(alpha, df)?;
        let margin = critical_value * se_mean;

        debug!(
            level = self.level,
            df,
            critical_value,
            tabulated = t_table::is_tabulated(alpha),
            "confidence interval"
        );

        Some(ConfidenceInterval {
            lower: mean - margin,
            upper: mean + margin,
            level: self.level,
            critical_value,
            df,
        })
    }

    /// Interval from externally computed descriptives
    pub fn from_descriptives(&self, base: &BaseDescriptives) -> Option<ConfidenceInterval> {
        self.estimate(base.mean?, base.se_mean?, base.valid)
    }
}

impl Default for ConfidenceIntervalEstimator {
    fn default() -> Self {
        Self {
            level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

/// Interval at `level` percent, `None` for a level outside `(0, 100)`
pub fn confidence_interval(mean: f64, se_mean: f64, valid_weight: f64, level: f64) -> Option<ConfidenceInterval> {
    ConfidenceIntervalEstimator::new(level)
        .ok()?
        .estimate(mean, se_mean, valid_weight)
}
