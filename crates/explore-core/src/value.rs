//! Raw observation values and numeric coercion

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw scalar as delivered by the data store
///
/// Deserializes untagged, so `12.5`, `"12.5"` and `null` are all accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum RawValue {
    /// Numeric cell
    Number(f64),
    /// Text cell, possibly holding a number
    Text(String),
    /// Empty cell (system-missing)
    #[default]
    Empty,
}

impl RawValue {
    /// Coerce to a finite number
    ///
    /// Text is trimmed before parsing. Empty cells, unparseable text and
    /// non-finite numbers all coerce to `None`.
    pub fn to_number(&self) -> Option<f64> {
        let x = match self {
            RawValue::Number(x) => *x,
            RawValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
            RawValue::Empty => return None,
        };
        x.is_finite().then_some(x)
    }

    /// Text content of the cell, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s.trim()),
            _ => None,
        }
    }

    /// Whether the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, RawValue::Empty)
    }
}

impl From<f64> for RawValue {
    fn from(x: f64) -> Self {
        RawValue::Number(x)
    }
}

impl From<i32> for RawValue {
    fn from(x: i32) -> Self {
        RawValue::Number(f64::from(x))
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<Option<f64>> for RawValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(RawValue::Empty, RawValue::Number)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(x) => write!(f, "{x}"),
            RawValue::Text(s) => write!(f, "{s}"),
            RawValue::Empty => write!(f, "."),
        }
    }
}

/// One case of the active variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Cell value
    pub value: RawValue,
    /// Optional case identifier carried through to extreme value listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
}

impl Observation {
    pub fn new(value: impl Into<RawValue>) -> Self {
        Self {
            value: value.into(),
            case_id: None,
        }
    }

    pub fn with_case_id(value: impl Into<RawValue>, case_id: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            case_id: Some(case_id.into()),
        }
    }
}

/// Wrap a slice of numbers as observations
pub fn observations_from_f64(values: &[f64]) -> Vec<Observation> {
    values.iter().map(|&x| Observation::new(x)).collect()
}
