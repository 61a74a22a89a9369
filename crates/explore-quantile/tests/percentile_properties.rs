//! Property-based tests for the percentile definitions

use explore_core::WeightedDistribution;
use explore_quantile::{PercentileEngine, PercentileMethod};
use proptest::prelude::*;

fn integer_sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-500i32..500, 1..120)
        .prop_map(|v| v.into_iter().map(f64::from).collect())
}

fn weighted_sample() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((-500i32..500, 1u32..40), 1..80).prop_map(|pairs| {
        let values = pairs.iter().map(|(v, _)| f64::from(*v)).collect();
        let weights = pairs.iter().map(|(_, w)| f64::from(*w) / 4.0).collect();
        (values, weights)
    })
}

proptest! {
    // Property: waverage is pinned to the extremes at p = 0 and p = 100
    #[test]
    fn prop_waverage_endpoints((values, weights) in weighted_sample()) {
        let dist = WeightedDistribution::from_weighted(&values, &weights);
        let engine = PercentileEngine::new(&dist);
        prop_assert_eq!(engine.percentile(PercentileMethod::WeightedAverage1, 0.0), dist.min());
        prop_assert_eq!(engine.percentile(PercentileMethod::WeightedAverage1, 100.0), dist.max());
    }

    // Property: every definition stays within [min, max] and is monotone in p
    #[test]
    fn prop_bounded_and_monotone((values, weights) in weighted_sample()) {
        let dist = WeightedDistribution::from_weighted(&values, &weights);
        let engine = PercentileEngine::new(&dist);
        let (lo, hi) = (dist.min().unwrap(), dist.max().unwrap());
        for method in PercentileMethod::ALL {
            let mut previous = f64::NEG_INFINITY;
            for step in 0..=20 {
                let p = f64::from(step) * 5.0;
                let x = engine.percentile(method, p).unwrap();
                prop_assert!(x >= lo - 1e-9 && x <= hi + 1e-9, "{method} p={p} gave {x}");
                prop_assert!(x >= previous - 1e-9, "{method} not monotone at p={p}");
                previous = x;
            }
        }
    }

    // Property: Q1 <= median <= Q3 under Tukey hinges
    #[test]
    fn prop_tukey_ordering(values in integer_sample()) {
        let dist = WeightedDistribution::from_values(&values);
        let q = PercentileEngine::new(&dist).quartiles(PercentileMethod::TukeyHinges).unwrap();
        prop_assert!(q.q1 <= q.median && q.median <= q.q3);
    }

    // Property: the Tukey median is the textbook median
    #[test]
    fn prop_tukey_median(values in integer_sample()) {
        let mut sorted = values.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let n = sorted.len();
        let expected = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };
        let dist = WeightedDistribution::from_values(&values);
        let median = PercentileEngine::new(&dist).median(PercentileMethod::TukeyHinges).unwrap();
        prop_assert_eq!(median, expected);
    }
}

#[test]
fn test_all_methods_on_reference_sample() {
    let dist = WeightedDistribution::from_values(&[2.0, 4.0, 6.0, 8.0, 10.0]);
    let engine = PercentileEngine::new(&dist);

    // W·p = 2.5 sits halfway between the 2nd and 3rd values
    assert_eq!(engine.median(PercentileMethod::WeightedAverage1), Some(5.0));
    for method in PercentileMethod::ALL.into_iter().skip(1) {
        assert_eq!(engine.median(method), Some(6.0), "{method}");
    }

    assert_eq!(engine.percentile(PercentileMethod::TukeyHinges, 25.0), Some(4.0));
    assert_eq!(engine.percentile(PercentileMethod::TukeyHinges, 75.0), Some(8.0));
}

#[test]
fn test_empirical_family_indexes_distinct_values() {
    // four tied ones and a two: W = 5, distinct values [1, 2]
    let dist = WeightedDistribution::from_values(&[1.0, 1.0, 1.0, 1.0, 2.0]);
    let engine = PercentileEngine::new(&dist);

    assert_eq!(engine.percentile(PercentileMethod::Empirical, 50.0), Some(2.0));
    assert_eq!(engine.percentile(PercentileMethod::RoundNearest, 40.0), Some(2.0));
    assert_eq!(engine.percentile(PercentileMethod::EmpiricalAveraged, 20.0), Some(1.5));

    let weighted = WeightedDistribution::from_weighted(&[1.0, 2.0], &[4.0, 1.0]);
    let engine = PercentileEngine::new(&weighted);
    for method in [
        PercentileMethod::EmpiricalAveraged,
        PercentileMethod::Empirical,
        PercentileMethod::RoundNearest,
    ] {
        for p in [10.0, 20.0, 40.0, 50.0, 90.0] {
            assert_eq!(
                engine.percentile(method, p),
                PercentileEngine::new(&dist).percentile(method, p),
                "{method} p={p}"
            );
        }
    }
}
