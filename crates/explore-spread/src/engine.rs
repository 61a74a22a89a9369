//! Robust statistics for scale and ordinal variables

use crate::extremes::{self, ExtremeValues};
use crate::fences::Fences;
use crate::hinges::{self, TukeyHinges};
use crate::m_estimators::{self, MEstimators};
use crate::trimmed;
use explore_core::{Observation, VariableDefinition, WeightedDistribution, WeightedSampleBuilder};
use explore_quantile::{PercentileEngine, PercentileMethod};
use tracing::trace;

/// Robust location and spread of one variable
///
/// Every statistic is `None` unless the variable is measured on a scale
/// or ordinal level and is not a date.
#[derive(Debug, Clone, Copy)]
pub struct RobustStatisticsEngine<'a> {
    dist: &'a WeightedDistribution,
    variable: &'a VariableDefinition,
}

impl<'a> RobustStatisticsEngine<'a> {
    pub fn new(dist: &'a WeightedDistribution, variable: &'a VariableDefinition) -> Self {
        Self { dist, variable }
    }

    pub fn is_active(&self) -> bool {
        let active = self.variable.supports_robust_statistics();
        if !active {
            trace!(
                variable = %self.variable.name,
                measurement = ?self.variable.measurement,
                core_type = ?self.variable.core_type,
                "robust statistics skipped"
            );
        }
        active
    }

    /// Weighted trimmed mean with `trim_percent` removed from each tail
    pub fn trimmed_mean(&self, trim_percent: f64) -> Option<f64> {
        self.is_active()
            .then(|| trimmed::trimmed_mean(self.dist, trim_percent))
            .flatten()
    }

    pub fn tukey_hinges(&self) -> Option<TukeyHinges> {
        self.is_active().then(|| hinges::tukey_hinges(self.dist)).flatten()
    }

    /// IQR from the hinges
    pub fn iqr(&self) -> Option<f64> {
        self.tukey_hinges().map(|h| h.iqr)
    }

    /// Fences from the hinges, or from the quartiles of `method`
    pub fn fences(&self, use_hinges: bool, method: PercentileMethod) -> Option<Fences> {
        if !self.is_active() {
            return None;
        }
        if use_hinges {
            hinges::tukey_hinges(self.dist).map(|h| Fences::from_quartiles(h.q1, h.q3))
        } else {
            Fences::from_percentiles(&PercentileEngine::new(self.dist), method)
        }
    }

    /// Highest and lowest cases beyond `fences`, at most `cap` per tail
    ///
    /// `observations` and `weights` must be the arrays the distribution
    /// was built from so that case indices line up.
    pub fn extreme_values(
        &self,
        observations: &[Observation],
        weights: Option<&[f64]>,
        fences: Fences,
        cap: usize,
    ) -> Option<ExtremeValues> {
        if !self.is_active() {
            return None;
        }
        let cases = WeightedSampleBuilder::new(self.variable).valid_cases(observations, weights);
        let result = extremes::extreme_values(&cases, observations, fences, cap);
        if result.is_none() {
            trace!(iqr = fences.iqr, "extreme values undefined for degenerate fences");
        }
        result
    }

    /// M-estimator stand-ins, falling back to `mean`
    pub fn m_estimators(&self, mean: Option<f64>) -> Option<MEstimators> {
        self.is_active()
            .then(|| m_estimators::m_estimators(self.dist, mean))
            .flatten()
    }
}
