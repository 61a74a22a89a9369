//! Error types for the explore statistics crates
//!
//! Statistics themselves never fail: an undefined statistic is reported as
//! `None`. This error type covers configuration and parameter validation.

use thiserror::Error;

/// Core error type for explore operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Percentile method key that is not recognised
    #[error("Unknown percentile method: {0}")]
    UnknownMethod(String),

    /// Options document could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Report could not be written as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a percentile outside [0, 100]
    pub fn invalid_percentile(p: f64) -> Self {
        Self::InvalidParameter(format!("Percentile {p} must be in [0, 100]"))
    }

    /// Create an error for a confidence level outside (0, 100)
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidParameter(format!("Confidence level {level} must be in (0, 100)"))
    }

    /// Create an error for a trim percentage outside [0, 50)
    pub fn invalid_trim(percent: f64) -> Self {
        Self::InvalidParameter(format!("Trim percentage {percent} must be in [0, 50)"))
    }
}
