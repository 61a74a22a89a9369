//! Percentile definitions

use explore_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Percentile definition
///
/// Keys follow the option values used by the analysis dialogs
/// (`waverage`, `haverage`, `tukey`, `aempirical`, `empirical`, `round`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PercentileMethod {
    /// Weighted average at `X[W·p]`
    WeightedAverage1,
    /// Weighted average at `X[(W+1)·p]`
    #[default]
    WeightedAverage4,
    /// Tukey's hinges (25/50/75 only)
    TukeyHinges,
    /// Empirical distribution function with averaging
    EmpiricalAveraged,
    /// Empirical distribution function
    Empirical,
    /// Observation closest to `W·p`
    RoundNearest,
}

impl PercentileMethod {
    pub const ALL: [PercentileMethod; 6] = [
        PercentileMethod::WeightedAverage1,
        PercentileMethod::WeightedAverage4,
        PercentileMethod::TukeyHinges,
        PercentileMethod::EmpiricalAveraged,
        PercentileMethod::Empirical,
        PercentileMethod::RoundNearest,
    ];

    /// Option key of this method
    pub fn key(&self) -> &'static str {
        match self {
            Self::WeightedAverage1 => "waverage",
            Self::WeightedAverage4 => "haverage",
            Self::TukeyHinges => "tukey",
            Self::EmpiricalAveraged => "aempirical",
            Self::Empirical => "empirical",
            Self::RoundNearest => "round",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::WeightedAverage1 => "Weighted Average (definition 1)",
            Self::WeightedAverage4 => "Weighted Average (definition 4)",
            Self::TukeyHinges => "Tukey's Hinges",
            Self::EmpiricalAveraged => "Empirical Distribution with Averaging",
            Self::Empirical => "Empirical Distribution",
            Self::RoundNearest => "Observation Closest to W·p",
        }
    }
}

impl FromStr for PercentileMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "waverage" => Ok(Self::WeightedAverage1),
            "haverage" => Ok(Self::WeightedAverage4),
            "tukey" | "hinges" => Ok(Self::TukeyHinges),
            "aempirical" => Ok(Self::EmpiricalAveraged),
            "empirical" => Ok(Self::Empirical),
            "round" => Ok(Self::RoundNearest),
            other => Err(Error::UnknownMethod(other.to_string())),
        }
    }
}

impl TryFrom<String> for PercentileMethod {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<PercentileMethod> for String {
    fn from(method: PercentileMethod) -> Self {
        method.key().to_string()
    }
}

impl fmt::Display for PercentileMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
