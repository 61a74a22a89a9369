//! End-to-end tests of the Explore report

use approx::assert_relative_eq;
use explore_stats::prelude::*;
use explore_stats::ExploreOptions;

fn scores() -> (VariableDefinition, Vec<Observation>) {
    let variable = VariableDefinition::scale("score")
        .with_missing(MissingValueRule::discrete([99.0]))
        .with_value_label(2.0, "Two");
    let observations = vec![
        Observation::with_case_id(2.0, "c1"),
        Observation::with_case_id("4", "c2"),
        Observation::with_case_id(RawValue::Empty, "c3"),
        Observation::with_case_id(6.0, "c4"),
        Observation::with_case_id(99.0, "c5"),
        Observation::with_case_id(8.0, "c6"),
        Observation::with_case_id(" 10 ", "c7"),
        Observation::with_case_id("n/a", "c8"),
    ];
    (variable, observations)
}

#[test]
fn test_reference_report() {
    let (variable, observations) = scores();
    let options = ExploreOptions::default()
        .with_percentile_method(PercentileMethod::TukeyHinges)
        .with_outliers(true);
    let report = ExploreCalculator::new(&variable, &observations, options).report();

    assert_eq!(report.variable, "score");
    assert_eq!(report.summary.valid, 5.0);
    assert_relative_eq!(report.summary.sum, 30.0);
    assert_eq!(report.descriptives.base.mean, Some(6.0));
    assert_eq!(report.descriptives.median, Some(6.0));
    assert_eq!(report.descriptives.iqr, Some(4.0));

    let hinges = report.hinges.unwrap();
    assert_eq!((hinges.q1, hinges.q3), (4.0, 8.0));
    assert_eq!(report.percentiles.get(25.0), Some(4.0));
    assert_eq!(report.percentiles.get(75.0), Some(8.0));

    let table = report.frequency_table.as_ref().unwrap();
    assert_eq!(table.rows[0].label, "Two");
    assert_eq!(table.rows.len(), 5);

    // nothing beyond the fences (-2, 14)
    assert!(report.extreme_values.unwrap().is_empty());
    assert_relative_eq!(report.trimmed_mean.unwrap(), 6.0, epsilon = 1e-12);
}

#[test]
fn test_invalid_cases_excluded() {
    let (variable, observations) = scores();
    let calc = ExploreCalculator::new(&variable, &observations, ExploreOptions::default());
    let dist = calc.distribution();
    // 99 is user-missing; empty and "n/a" fail coercion
    assert_eq!(dist.valid_cases(), 5);
    assert_eq!(dist.values(), &[2.0, 4.0, 6.0, 8.0, 10.0]);
}

#[test]
fn test_confidence_interval_in_report() {
    let variable = VariableDefinition::scale("x");
    let values: Vec<f64> = (1..=11).map(f64::from).collect();
    let observations = observations_from_f64(&values);
    let report = ExploreCalculator::new(&variable, &observations, ExploreOptions::default()).report();

    let base = report.descriptives.base;
    let ci = report.descriptives.confidence_interval.unwrap();
    assert_eq!(ci.df, 10.0);
    assert_eq!(ci.critical_value, 2.228);
    let se = base.se_mean.unwrap();
    assert_relative_eq!(ci.lower, 6.0 - 2.228 * se, epsilon = 1e-12);
    assert_relative_eq!(ci.upper, 6.0 + 2.228 * se, epsilon = 1e-12);
}

#[test]
fn test_empty_variable_degrades_to_none() {
    let variable = VariableDefinition::scale("x");
    let observations = vec![Observation::new(RawValue::Empty), Observation::new("abc")];
    let report = ExploreCalculator::new(&variable, &observations, ExploreOptions::default()).report();

    assert_eq!(report.summary.valid, 0.0);
    assert!(report.frequency_table.is_none());
    assert!(report.hinges.is_none());
    assert!(report.trimmed_mean.is_none());
    assert!(report.m_estimators.is_none());
    assert!(report.descriptives.confidence_interval.is_none());
    assert!(report.percentiles.values.iter().all(|(_, v)| v.is_none()));
}

#[test]
fn test_nominal_variable_skips_robust_statistics() {
    let variable = VariableDefinition::scale("group").with_measurement(MeasurementLevel::Nominal);
    let observations = observations_from_f64(&[1.0, 2.0, 2.0, 3.0, 50.0]);
    let options = ExploreOptions::default().with_outliers(true);
    let report = ExploreCalculator::new(&variable, &observations, options).report();

    assert!(report.hinges.is_none());
    assert!(report.trimmed_mean.is_none());
    assert!(report.extreme_values.is_none());
    assert!(report.m_estimators.is_none());
    assert_eq!(report.summary.modes, vec![2.0]);
    assert!(report.descriptives.iqr.is_some());
}

#[test]
fn test_weighted_report() {
    let variable = VariableDefinition::scale("x");
    let observations = observations_from_f64(&[10.0, 20.0, 30.0]);
    let weights = [2.0, 1.5, 2.0];
    let options = ExploreOptions::default().with_percentile_method(PercentileMethod::WeightedAverage1);
    let calc = ExploreCalculator::new(&variable, &observations, options).with_weights(&weights);
    let report = calc.report();

    assert_eq!(report.summary.valid, 5.5);
    assert_eq!(report.summary.modes, vec![10.0, 30.0]);
    assert_relative_eq!(report.percentiles.get(50.0).unwrap(), 17.5);
}

#[test]
fn test_json_shape() {
    let variable = VariableDefinition::scale("score");
    let observations = observations_from_f64(&[2.0, 4.0, 6.0, 8.0, 10.0, 30.0]);
    let options = ExploreOptions::from_json(r#"{"showOutliers": true, "percentiles": [25, 50, 75]}"#).unwrap();
    let report = ExploreCalculator::new(&variable, &observations, options).report();
    let json = report.to_value().unwrap();

    assert_eq!(json["percentiles"]["method"], "haverage");
    assert!(json["percentiles"]["values"].get("50").is_some());
    assert!(json["descriptives"].get("stdDeviation").is_some());
    assert!(json["descriptives"].get("confidenceInterval").is_some());
    assert!(json["frequencyTable"]["rows"][0].get("cumulativeValidPercent").is_some());
    assert_eq!(json["hinges"]["method"], "tukey");
    assert!(json["extremeValues"]["fences"].get("lowerInner").is_some());
    assert!(json.get("mEstimators").is_some());
    assert!(json.get("trimmedMean").is_some());
}
