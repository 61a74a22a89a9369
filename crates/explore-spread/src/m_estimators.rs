//! Robust location estimates
//!
//! The four M-estimators are reported with the 5 % trimmed mean as a
//! shared stand-in; no iterative reweighting is performed.

use crate::trimmed::TrimmedMean;
use explore_core::WeightedDistribution;
use serde::Serialize;

/// Huber, Tukey biweight, Hampel and Andrews wave location estimates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MEstimators {
    pub huber: f64,
    pub tukey: f64,
    pub hampel: f64,
    pub andrews: f64,
}

impl MEstimators {
    fn uniform(location: f64) -> Self {
        Self {
            huber: location,
            tukey: location,
            hampel: location,
            andrews: location,
        }
    }
}

/// Location estimates, falling back to `mean` when the trimmed mean is undefined
pub fn m_estimators(dist: &WeightedDistribution, mean: Option<f64>) -> Option<MEstimators> {
    TrimmedMean::default()
        .estimate(dist)
        .or(mean)
        .map(MEstimators::uniform)
}
