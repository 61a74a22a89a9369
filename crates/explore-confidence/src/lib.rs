//! Confidence intervals for the mean
//!
//! Critical values come from a three-decimal Student-t table for the
//! common 90/95/99 % levels and from the exact Student-t quantile
//! otherwise.
//!
//! ```rust
//! use explore_confidence::ConfidenceIntervalEstimator;
//!
//! let ci = ConfidenceIntervalEstimator::default()
//!     .estimate(50.0, 2.0, 11.0)
//!     .unwrap();
//! assert_eq!(ci.critical_value, 2.228);
//! assert!((ci.lower - 45.544).abs() < 1e-9);
//! ```

pub mod interval;
pub mod t_table;

pub use interval::{confidence_interval, ConfidenceInterval, ConfidenceIntervalEstimator, DEFAULT_CONFIDENCE_LEVEL};
pub use t_table::critical_value;
