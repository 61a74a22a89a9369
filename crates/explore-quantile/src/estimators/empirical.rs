//! Empirical distribution function definitions
//!
//! These methods pick a distinct value instead of interpolating: the
//! weighted rank `p·W/100` becomes a 1-based position into the distinct
//! values, clamped to `[1, n]`. The rank is snapped to the nearest integer
//! when it is within floating-point noise of it, so `30 % of 10` is rank 3
//! and not `3.0000000000000004`.

use explore_core::WeightedDistribution;

const RANK_FUZZ: f64 = 1e-9;

fn weighted_rank(dist: &WeightedDistribution, p: f64) -> f64 {
    let rank = p * dist.total_weight() / 100.0;
    let nearest = rank.round();
    if (rank - nearest).abs() < RANK_FUZZ {
        nearest
    } else {
        rank
    }
}

/// Distinct value at 1-based position `k`, clamped to `[1, n]`
fn value_at(values: &[f64], k: f64) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }
    let k = k.max(1.0).min(n as f64) as usize;
    Some(values[k - 1])
}

/// Empirical distribution function with averaging
///
/// With `k = floor(p·W/100)`: a whole rank averages `values[k-1]` and
/// `values[k]`, otherwise `values[k]`. Positions are clamped to the
/// distinct values.
pub fn aempirical(dist: &WeightedDistribution, p: f64) -> Option<f64> {
    let values = dist.values();
    let rank = weighted_rank(dist, p);
    let k = rank.floor();
    if rank - k == 0.0 {
        let a = value_at(values, k)?;
        let b = value_at(values, k + 1.0)?;
        Some((a + b) / 2.0)
    } else {
        value_at(values, k + 1.0)
    }
}

/// Empirical distribution function: `values[ceil(p·W/100) - 1]`
pub fn empirical(dist: &WeightedDistribution, p: f64) -> Option<f64> {
    value_at(dist.values(), weighted_rank(dist, p).ceil())
}

/// Distinct value at position `round(p·W/100)`
pub fn round_nearest(dist: &WeightedDistribution, p: f64) -> Option<f64> {
    value_at(dist.values(), weighted_rank(dist, p).round())
}
