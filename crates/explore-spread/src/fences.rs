//! Tukey fences and outlier classification

use explore_quantile::{PercentileEngine, PercentileMethod};
use serde::Serialize;
use std::fmt;

/// Multiplier of the IQR for the inner fences
pub const INNER_FENCE: f64 = 1.5;
/// Multiplier of the IQR for the outer fences
pub const OUTER_FENCE: f64 = 3.0;

/// How far outside the fences a value lies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Beyond an inner fence, within the outer fence
    Outlier,
    /// Beyond an outer fence
    Extreme,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outlier => f.write_str("outlier"),
            Self::Extreme => f.write_str("extreme"),
        }
    }
}

/// Inner and outer fences around the quartiles
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fences {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_inner: f64,
    pub upper_inner: f64,
    pub lower_outer: f64,
    pub upper_outer: f64,
}

impl Fences {
    pub fn from_quartiles(q1: f64, q3: f64) -> Self {
        let iqr = q3 - q1;
        Self {
            q1,
            q3,
            iqr,
            lower_inner: q1 - INNER_FENCE * iqr,
            upper_inner: q3 + INNER_FENCE * iqr,
            lower_outer: q1 - OUTER_FENCE * iqr,
            upper_outer: q3 + OUTER_FENCE * iqr,
        }
    }

    /// Fences from the 25th/75th percentiles of a percentile definition
    pub fn from_percentiles(engine: &PercentileEngine<'_>, method: PercentileMethod) -> Option<Self> {
        let q = engine.quartiles(method)?;
        Some(Self::from_quartiles(q.q1, q.q3))
    }

    /// Classification of `x`, `None` when inside the inner fences
    pub fn classify(&self, x: f64) -> Option<Classification> {
        if x < self.lower_outer || x > self.upper_outer {
            Some(Classification::Extreme)
        } else if x < self.lower_inner || x > self.upper_inner {
            Some(Classification::Outlier)
        } else {
            None
        }
    }

    /// Whether the fences can separate anything
    pub fn is_degenerate(&self) -> bool {
        !(self.iqr.is_finite() && self.iqr > 0.0)
    }
}
