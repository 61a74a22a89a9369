//! Tukey hinges by depth over the rank-expanded sample
//!
//! Each distinct value is repeated `round(weight)` times. For fractional
//! weights this is an approximation: weights below 0.5 vanish and the
//! expanded length can drift from `W`, so both hinge indices are clamped to
//! the expanded sample.

use explore_core::WeightedDistribution;
use serde::Serialize;

/// Lower/upper hinges and their spread
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TukeyHinges {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub method: &'static str,
    pub w: f64,
}

/// Hinges of a distribution, `None` when the expanded sample is empty
pub fn tukey_hinges(dist: &WeightedDistribution) -> Option<TukeyHinges> {
    let expanded = dist.expanded();
    if expanded.is_empty() {
        return None;
    }
    let w = dist.total_weight();
    let len = expanded.len() as f64;

    let depth_median = (w + 1.0) / 2.0;
    let depth_hinge = (depth_median.floor() + 1.0) / 2.0;
    let lower = depth_hinge.round().max(1.0).min(len);
    let upper = (w - lower + 1.0).round().max(1.0).min(len);

    let q1 = expanded[lower as usize - 1];
    let q3 = expanded[upper as usize - 1];
    Some(TukeyHinges {
        q1,
        q3,
        iqr: q3 - q1,
        method: "tukey",
        w,
    })
}
