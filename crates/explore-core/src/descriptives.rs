//! Base descriptive statistics supplied by the descriptives collaborator

use crate::distribution::WeightedDistribution;
use serde::{Deserialize, Serialize};

/// N, mean and dispersion of the active variable
///
/// Counts are weighted: `n` includes missing cases, `valid` is `W`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseDescriptives {
    pub n: f64,
    pub valid: f64,
    pub missing: f64,
    pub mean: Option<f64>,
    pub std_deviation: Option<f64>,
    pub se_mean: Option<f64>,
}

impl BaseDescriptives {
    /// Weighted descriptives computed directly from a distribution
    ///
    /// Variance uses the frequency-weight denominator `W - 1`, so the
    /// standard deviation and standard error need `W > 1`.
    pub fn from_distribution(dist: &WeightedDistribution) -> Self {
        let w = dist.total_weight();
        let mean = dist.mean();
        let std_deviation = mean.filter(|_| w > 1.0).map(|m| {
            let ss: f64 = dist
                .values()
                .iter()
                .zip(dist.weights())
                .map(|(x, wi)| wi * (x - m).powi(2))
                .sum();
            (ss / (w - 1.0)).sqrt()
        });
        Self {
            n: w + dist.missing_weight(),
            valid: w,
            missing: dist.missing_weight(),
            mean,
            std_deviation,
            se_mean: std_deviation.map(|sd| sd / w.sqrt()),
        }
    }

    pub fn variance(&self) -> Option<f64> {
        self.std_deviation.map(|sd| sd * sd)
    }
}
