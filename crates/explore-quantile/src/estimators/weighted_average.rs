//! Weighted-average percentile definitions
//!
//! Both definitions locate a target weight-rank `t` in the cumulative
//! weights and interpolate between the bucket below and the bucket that
//! contains `t`. They differ only in the target: `W·p` for definition 1
//! and `(W+1)·p` for definition 4.

use explore_core::WeightedDistribution;

/// Definition 1: target `t = W·p/100`
pub fn waverage(dist: &WeightedDistribution, p: f64) -> Option<f64> {
    interpolate_at(dist, dist.total_weight() * p / 100.0)
}

/// Definition 4: target `t = (W+1)·p/100`
pub fn haverage(dist: &WeightedDistribution, p: f64) -> Option<f64> {
    interpolate_at(dist, (dist.total_weight() + 1.0) * p / 100.0)
}

/// Interpolate at weight-rank `t`
///
/// With `k` the first bucket whose cumulative weight reaches `t` and
/// `g* = t - cumWeight[k-1]`:
/// - `weight[k] >= 1`: blend with `g*` directly, `g* >= 1` gives `values[k]`
/// - `weight[k] < 1`: blend with `g* / weight[k]`
///
/// Capping at `g* >= 1` rather than `g* >= weight[k]` keeps an aggregated
/// bucket of weight above 1 from extrapolating past `values[k]`.
pub(crate) fn interpolate_at(dist: &WeightedDistribution, t: f64) -> Option<f64> {
    let values = dist.values();
    let first = *values.first()?;
    let last = *values.last()?;
    if t <= 0.0 {
        return Some(first);
    }
    if t >= dist.total_weight() {
        return Some(last);
    }

    let cum = dist.cum_weights();
    let Some(k) = cum.iter().position(|&c| c >= t) else {
        return Some(last);
    };
    let prev_cum = if k == 0 { 0.0 } else { cum[k - 1] };
    let g_star = t - prev_cum;
    let wk = dist.weights()[k];
    let lower = if k == 0 { first } else { values[k - 1] };
    let upper = values[k];
    if lower == upper {
        return Some(upper);
    }

    let frac = if wk >= 1.0 { g_star } else { g_star / wk };
    if frac >= 1.0 {
        return Some(upper);
    }
    Some((1.0 - frac) * lower + frac * upper)
}
