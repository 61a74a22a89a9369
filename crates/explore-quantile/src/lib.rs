//! Percentile definitions over weighted distributions
//!
//! This crate implements the five ranking definitions used by the
//! Explore/Frequencies family of analyses, plus Tukey's hinges:
//!
//! | Key | Definition |
//! |-----|------------|
//! | `waverage` | weighted average at `X[W·p]` |
//! | `haverage` | weighted average at `X[(W+1)·p]` (default) |
//! | `tukey` | Tukey's hinges, 25/50/75 only |
//! | `aempirical` | empirical distribution function with averaging |
//! | `empirical` | empirical distribution function |
//! | `round` | observation closest to `W·p` |
//!
//! # Example
//!
//! ```rust
//! use explore_core::WeightedDistribution;
//! use explore_quantile::{PercentileEngine, PercentileMethod};
//!
//! let dist = WeightedDistribution::from_values(&[1.0, 2.0, 3.0, 4.0]);
//! let engine = PercentileEngine::new(&dist);
//!
//! assert_eq!(engine.percentile(PercentileMethod::WeightedAverage4, 50.0), Some(2.5));
//! assert_eq!(engine.percentile(PercentileMethod::Empirical, 50.0), Some(2.0));
//! ```

pub mod engine;
pub mod estimators;
pub mod method;

pub use engine::{PercentileEngine, Quartiles};
pub use method::PercentileMethod;

/// Percentiles reported when the caller does not ask for specific ones
pub const DEFAULT_PERCENTILES: [f64; 7] = [5.0, 10.0, 25.0, 50.0, 75.0, 90.0, 95.0];

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{PercentileEngine, PercentileMethod, Quartiles};
}
