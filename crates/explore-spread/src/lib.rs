//! Robust location and spread for weighted distributions
//!
//! - [`TrimmedMean`]: weighted trimmed mean with partial boundary consumption
//! - [`tukey_hinges`]: hinges by depth over the rank-expanded sample
//! - [`Fences`]: inner (1.5·IQR) and outer (3·IQR) fences
//! - [`extreme_values`]: highest/lowest flagged cases per tail
//! - [`RobustStatisticsEngine`]: the above, gated on the variable's
//!   measurement level
//!
//! # Example
//!
//! ```rust
//! use explore_core::{VariableDefinition, WeightedDistribution};
//! use explore_spread::{Classification, RobustStatisticsEngine};
//!
//! let var = VariableDefinition::scale("score");
//! let dist = WeightedDistribution::from_values(&[2.0, 4.0, 6.0, 8.0, 10.0]);
//! let engine = RobustStatisticsEngine::new(&dist, &var);
//!
//! let hinges = engine.tukey_hinges().unwrap();
//! assert_eq!((hinges.q1, hinges.q3, hinges.iqr), (4.0, 8.0, 4.0));
//!
//! let fences = engine.fences(true, Default::default()).unwrap();
//! assert_eq!(fences.classify(25.0), Some(Classification::Extreme));
//! ```

pub mod engine;
pub mod extremes;
pub mod fences;
pub mod hinges;
pub mod m_estimators;
pub mod trimmed;

pub use engine::RobustStatisticsEngine;
pub use extremes::{extreme_values, ExtremeValueEntry, ExtremeValues, DEFAULT_EXTREME_COUNT};
pub use fences::{Classification, Fences, INNER_FENCE, OUTER_FENCE};
pub use hinges::{tukey_hinges, TukeyHinges};
pub use m_estimators::{m_estimators, MEstimators};
pub use trimmed::{trimmed_mean, TrimmedMean};

/// Trim applied when none is requested
pub const DEFAULT_TRIM_PERCENT: f64 = 5.0;
