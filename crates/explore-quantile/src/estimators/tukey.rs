//! Tukey's hinges as a percentile definition
//!
//! Only the 25th, 50th and 75th percentiles are defined, and only for
//! unweighted data. Everything else falls back to weighted average
//! definition 1.

use super::weighted_average::waverage;
use explore_core::WeightedDistribution;
use tracing::trace;

/// Median of a sorted, non-empty slice
fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Lower hinge, median and upper hinge of a sorted, non-empty slice
///
/// The halves share the middle element when `n` is odd.
pub fn hinges_sorted(sorted: &[f64]) -> (f64, f64, f64) {
    let n = sorted.len();
    let half = (n + 1) / 2;
    (
        median_sorted(&sorted[..half]),
        median_sorted(sorted),
        median_sorted(&sorted[n - half..]),
    )
}

/// Tukey hinge percentile, falling back to definition 1
pub fn tukey(dist: &WeightedDistribution, p: f64) -> Option<f64> {
    if dist.is_empty() {
        return None;
    }
    let which = if p == 25.0 {
        0
    } else if p == 50.0 {
        1
    } else if p == 75.0 {
        2
    } else {
        trace!(p, "tukey hinges undefined for percentile, using waverage");
        return waverage(dist, p);
    };
    if !dist.has_unit_weights() {
        trace!(p, "weighted data, tukey hinges fall back to waverage");
        return waverage(dist, p);
    }

    let (lower, median, upper) = hinges_sorted(&dist.expanded());
    Some([lower, median, upper][which])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_length() {
        let dist = WeightedDistribution::from_values(&[2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(tukey(&dist, 25.0), Some(4.0));
        assert_eq!(tukey(&dist, 50.0), Some(6.0));
        assert_eq!(tukey(&dist, 75.0), Some(8.0));
    }

    #[test]
    fn test_even_length() {
        let dist = WeightedDistribution::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(tukey(&dist, 25.0), Some(2.0));
        assert_eq!(tukey(&dist, 50.0), Some(3.5));
        assert_eq!(tukey(&dist, 75.0), Some(5.0));
    }

    #[test]
    fn test_duplicates_are_expanded() {
        let dist = WeightedDistribution::from_values(&[1.0, 1.0, 1.0, 5.0, 9.0]);
        assert_eq!(tukey(&dist, 25.0), Some(1.0));
        assert_eq!(tukey(&dist, 50.0), Some(1.0));
        assert_eq!(tukey(&dist, 75.0), Some(5.0));
    }

    #[test]
    fn test_single_value() {
        let dist = WeightedDistribution::from_values(&[7.0]);
        assert_eq!(tukey(&dist, 25.0), Some(7.0));
        assert_eq!(tukey(&dist, 75.0), Some(7.0));
    }

    #[test]
    fn test_other_percentiles_fall_back() {
        let dist = WeightedDistribution::from_values(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(tukey(&dist, 60.0), waverage(&dist, 60.0));
        assert_eq!(tukey(&dist, 10.0), waverage(&dist, 10.0));
    }

    #[test]
    fn test_weighted_data_falls_back() {
        let dist = WeightedDistribution::from_weighted(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 1.0, 1.0]);
        assert_eq!(tukey(&dist, 50.0), waverage(&dist, 50.0));
    }
}
