//! Property-based tests for robust spread measures

use approx::assert_relative_eq;
use explore_core::{ValidCase, WeightedDistribution};
use explore_spread::{extreme_values, trimmed_mean, tukey_hinges, Classification, Fences};
use proptest::prelude::*;

fn weighted() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((-500i32..500, 1u32..6), 1..120).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(v, w)| (f64::from(v), f64::from(w)))
            .unzip()
    })
}

proptest! {
    // Property: hinges are ordered and lie within the data range
    #[test]
    fn prop_hinges_ordered((values, weights) in weighted()) {
        let dist = WeightedDistribution::from_weighted(&values, &weights);
        let h = tukey_hinges(&dist).unwrap();
        prop_assert!(h.q1 <= h.q3);
        prop_assert!(h.iqr >= 0.0);
        prop_assert!(h.q1 >= dist.min().unwrap() && h.q3 <= dist.max().unwrap());
    }

    // Property: zero trim is the weighted mean
    #[test]
    fn prop_zero_trim_is_mean((values, weights) in weighted()) {
        let dist = WeightedDistribution::from_weighted(&values, &weights);
        let mean = dist.mean().unwrap();
        let trimmed = trimmed_mean(&dist, 0.0).unwrap();
        prop_assert!((trimmed - mean).abs() <= 1e-9 * mean.abs().max(1.0));
    }

    // Property: the trimmed mean stays within the data range
    #[test]
    fn prop_trimmed_mean_bounded((values, weights) in weighted(), trim in 0.0f64..49.0) {
        let dist = WeightedDistribution::from_weighted(&values, &weights);
        if let Some(t) = trimmed_mean(&dist, trim) {
            prop_assert!(t >= dist.min().unwrap() - 1e-9);
            prop_assert!(t <= dist.max().unwrap() + 1e-9);
        }
    }

    // Property: fences nest for any non-negative IQR
    #[test]
    fn prop_fences_nest(q1 in -1e6f64..1e6, iqr in 0.0f64..1e6) {
        let f = Fences::from_quartiles(q1, q1 + iqr);
        prop_assert!(f.lower_outer <= f.lower_inner);
        prop_assert!(f.lower_inner <= f.upper_inner);
        prop_assert!(f.upper_inner <= f.upper_outer);
    }

    // Property: listings respect the cap and every entry is beyond the inner fences
    #[test]
    fn prop_extremes_capped(values in prop::collection::vec(-100.0f64..100.0, 1..80), cap in 0usize..8) {
        let cases: Vec<ValidCase> = values
            .iter()
            .enumerate()
            .map(|(index, &value)| ValidCase { index, value, weight: 1.0 })
            .collect();
        let fences = Fences::from_quartiles(-10.0, 10.0);
        let result = extreme_values(&cases, &[], fences, cap).unwrap();
        prop_assert!(result.highest.len() <= cap && result.lowest.len() <= cap);
        for entry in result.entries() {
            prop_assert!(entry.value < fences.lower_inner || entry.value > fences.upper_inner);
        }
    }
}

#[test]
fn test_reference_sample() {
    let dist = WeightedDistribution::from_values(&[2.0, 4.0, 6.0, 8.0, 10.0]);
    let h = tukey_hinges(&dist).unwrap();
    assert_eq!((h.q1, h.q3, h.iqr), (4.0, 8.0, 4.0));

    let fences = Fences::from_quartiles(h.q1, h.q3);
    assert_eq!((fences.lower_inner, fences.upper_inner), (-2.0, 14.0));
    assert_eq!((fences.lower_outer, fences.upper_outer), (-8.0, 20.0));
    assert_eq!(fences.classify(25.0), Some(Classification::Extreme));
    assert_eq!(fences.classify(15.0), Some(Classification::Outlier));
}

#[test]
fn test_trim_shrinks_toward_mean() {
    let dist = WeightedDistribution::from_values(&[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]);
    let five = trimmed_mean(&dist, 5.0).unwrap();
    assert!(five > 45.5 && five < 55.5);
    assert_relative_eq!(trimmed_mean(&dist, 0.0).unwrap(), 55.0);
}
