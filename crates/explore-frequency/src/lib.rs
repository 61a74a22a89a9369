//! Modes and frequency tables for weighted distributions
//!
//! Percent columns are rounded to one decimal place and the cumulative
//! column compounds the rounded row values, so a table of thirds ends at
//! 99.9 rather than 100.0.
//!
//! # Example
//!
//! ```rust
//! use explore_core::{VariableDefinition, WeightedDistribution};
//! use explore_frequency::FrequencyTableBuilder;
//!
//! let var = VariableDefinition::scale("rating");
//! let dist = WeightedDistribution::from_values(&[1.0, 2.0, 2.0, 3.0]);
//! let builder = FrequencyTableBuilder::new(&dist, &var);
//!
//! assert_eq!(builder.modes(), vec![2.0]);
//! let table = builder.frequency_table(4.0).unwrap();
//! assert_eq!(table.rows[1].valid_percent, 50.0);
//! ```

pub mod table;

pub use table::{round1, FrequencyRow, FrequencySummary, FrequencyTable, FrequencyTableBuilder};
