//! Core types for the weighted explore statistics workspace
//!
//! This crate holds the pieces every other crate builds on:
//!
//! - [`error`]: the shared error type (configuration and parameter errors)
//! - [`value`]: raw cell values and numeric coercion
//! - [`variable`]: measurement level, core type, missing-value rules
//! - [`distribution`]: the weighted sample builder and distribution
//! - [`descriptives`]: base N/mean/SD figures from the descriptives layer
//!
//! # Example
//!
//! ```rust
//! use explore_core::{Observation, VariableDefinition, WeightedSampleBuilder, MissingValueRule};
//!
//! let var = VariableDefinition::scale("score").with_missing(MissingValueRule::discrete([99.0]));
//! let obs: Vec<Observation> = [3.0, 1.0, 99.0, 3.0].into_iter().map(Observation::new).collect();
//! let dist = WeightedSampleBuilder::new(&var).build(&obs, None);
//!
//! assert_eq!(dist.values(), &[1.0, 3.0]);
//! assert_eq!(dist.cum_weights(), &[1.0, 3.0]);
//! ```

pub mod descriptives;
pub mod distribution;
pub mod error;
pub mod value;
pub mod variable;

pub use descriptives::BaseDescriptives;
pub use distribution::{ValidCase, WeightedDistribution, WeightedSampleBuilder};
pub use error::{Error, Result};
pub use value::{observations_from_f64, Observation, RawValue};
pub use variable::{
    CoreType, MeasurementLevel, MissingRange, MissingValueRule, ValueLabel, VariableDefinition,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BaseDescriptives, Error, Observation, RawValue, Result, VariableDefinition,
        WeightedDistribution, WeightedSampleBuilder,
    };
}
