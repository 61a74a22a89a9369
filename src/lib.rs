//! # explore-stats
//!
//! Weighted Explore/Descriptives statistics for a single variable:
//! percentiles under six definitions, frequency tables and modes, Tukey
//! hinges, trimmed means, outlier fences and confidence intervals.
//!
//! ## Crate Structure
//!
//! - [`explore_core`]: variable model, coercion and the weighted distribution
//! - [`explore_quantile`]: percentile definitions
//! - [`explore_frequency`]: modes and frequency tables
//! - [`explore_spread`]: trimmed mean, hinges, fences and extreme values
//! - [`explore_confidence`]: tabulated Student-t intervals
//!
//! ## Quick Start
//!
//! ```rust
//! use explore_stats::prelude::*;
//!
//! let variable = VariableDefinition::scale("score");
//! let observations = observations_from_f64(&[2.0, 4.0, 6.0, 8.0, 10.0]);
//! let options = ExploreOptions::from_json(r#"{"percentileMethod": "tukey"}"#).unwrap();
//!
//! let report = ExploreCalculator::new(&variable, &observations, options).report();
//! assert_eq!(report.descriptives.base.mean, Some(6.0));
//! assert_eq!(report.descriptives.iqr, Some(4.0));
//! assert_eq!(report.percentiles.get(50.0), Some(6.0));
//! ```

pub mod calculator;
pub mod options;
pub mod report;

pub use calculator::ExploreCalculator;
pub use options::ExploreOptions;
pub use report::{Descriptives, ExploreReport, Percentiles};

// Re-export workspace crates
pub use explore_confidence;
pub use explore_core;
pub use explore_frequency;
pub use explore_quantile;
pub use explore_spread;

pub use explore_core::{Error, Result};

/// Convenience prelude
pub mod prelude {
    pub use crate::{ExploreCalculator, ExploreOptions, ExploreReport};
    pub use explore_confidence::{ConfidenceInterval, ConfidenceIntervalEstimator};
    pub use explore_core::{
        observations_from_f64, BaseDescriptives, CoreType, MeasurementLevel, MissingValueRule, Observation,
        RawValue, VariableDefinition, WeightedDistribution, WeightedSampleBuilder,
    };
    pub use explore_frequency::FrequencyTableBuilder;
    pub use explore_quantile::{PercentileEngine, PercentileMethod};
    pub use explore_spread::{Classification, Fences, RobustStatisticsEngine, TrimmedMean};
}
