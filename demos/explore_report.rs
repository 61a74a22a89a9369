//! Explore report for a small weighted sample
//!
//! Run with `RUST_LOG=debug cargo run --example explore_report` to see the
//! builder and estimator traces.

use explore_stats::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> explore_stats::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let variable = VariableDefinition::scale("reaction_ms")
        .with_missing(MissingValueRule::discrete([-1.0]).with_text_code("timeout"));

    let observations = vec![
        Observation::with_case_id(312.0, "p01"),
        Observation::with_case_id(298.0, "p02"),
        Observation::with_case_id("305", "p03"),
        Observation::with_case_id(-1.0, "p04"),
        Observation::with_case_id(331.0, "p05"),
        Observation::with_case_id(287.0, "p06"),
        Observation::with_case_id(RawValue::Empty, "p07"),
        Observation::with_case_id(944.0, "p08"),
        Observation::with_case_id(301.0, "p09"),
        Observation::with_case_id(318.0, "p10"),
        Observation::with_case_id(295.0, "p11"),
        Observation::with_case_id(309.0, "p12"),
    ];
    let weights = [1.0, 2.0, 1.0, 1.0, 1.0, 1.5, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0];

    let options = ExploreOptions::from_json(
        r#"{
            "percentileMethod": "haverage",
            "showOutliers": true,
            "extremeCount": 3,
            "confidenceInterval": 95
        }"#,
    )?;

    let calculator = ExploreCalculator::new(&variable, &observations, options).with_weights(&weights);
    let report = calculator.report();

    if let Some(table) = &report.frequency_table {
        println!("{table}\n");
    }
    println!("{}", report.to_json_pretty()?);
    Ok(())
}
