//! Variable definitions: measurement level, core type and missing values

use crate::value::RawValue;
use serde::{Deserialize, Serialize};

/// Measurement level of a variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementLevel {
    #[default]
    Scale,
    Ordinal,
    Nominal,
}

/// Storage type of a variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CoreType {
    #[default]
    Numeric,
    String,
    Date,
}

/// Inclusive numeric range of user-missing values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissingRange {
    pub low: f64,
    pub high: f64,
}

impl MissingRange {
    pub fn contains(&self, x: f64) -> bool {
        x >= self.low && x <= self.high
    }
}

/// User-missing value rule
///
/// A value is missing when it equals one of the discrete codes or falls
/// inside the range. For string variables the raw text is also compared
/// against `text_codes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct MissingValueRule {
    pub codes: Vec<f64>,
    pub range: Option<MissingRange>,
    pub text_codes: Vec<String>,
}

impl MissingValueRule {
    /// No user-missing values
    pub fn none() -> Self {
        Self::default()
    }

    /// Discrete numeric sentinels
    pub fn discrete(codes: impl Into<Vec<f64>>) -> Self {
        Self {
            codes: codes.into(),
            ..Self::default()
        }
    }

    /// Inclusive range, optionally combined with discrete codes later
    pub fn range(low: f64, high: f64) -> Self {
        Self {
            range: Some(MissingRange { low, high }),
            ..Self::default()
        }
    }

    /// Add a discrete code
    pub fn with_code(mut self, code: f64) -> Self {
        self.codes.push(code);
        self
    }

    /// Add a discrete text code (string variables)
    pub fn with_text_code(mut self, code: impl Into<String>) -> Self {
        self.text_codes.push(code.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty() && self.range.is_none() && self.text_codes.is_empty()
    }

    /// Whether a coerced numeric value is user-missing
    pub fn matches_number(&self, x: f64) -> bool {
        self.codes.iter().any(|&c| c == x) || self.range.is_some_and(|r| r.contains(x))
    }

    /// Whether the raw cell text is user-missing
    pub fn matches_text(&self, raw: &RawValue) -> bool {
        raw.as_text()
            .is_some_and(|s| self.text_codes.iter().any(|c| c.trim() == s))
    }
}

/// A value label attached to a code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueLabel {
    pub value: f64,
    pub label: String,
}

/// Definition of the analysed variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct VariableDefinition {
    pub name: String,
    pub label: Option<String>,
    pub measurement: MeasurementLevel,
    pub core_type: CoreType,
    pub missing: MissingValueRule,
    pub value_labels: Vec<ValueLabel>,
}

impl VariableDefinition {
    /// Numeric scale variable without missing values
    pub fn scale(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_measurement(mut self, level: MeasurementLevel) -> Self {
        self.measurement = level;
        self
    }

    pub fn with_core_type(mut self, core_type: CoreType) -> Self {
        self.core_type = core_type;
        self
    }

    pub fn with_missing(mut self, missing: MissingValueRule) -> Self {
        self.missing = missing;
        self
    }

    pub fn with_value_label(mut self, value: f64, label: impl Into<String>) -> Self {
        self.value_labels.push(ValueLabel {
            value,
            label: label.into(),
        });
        self
    }

    /// Coerce a raw cell to a valid value for this variable
    ///
    /// Returns `None` when the cell fails coercion or is user-missing.
    pub fn valid_value(&self, raw: &RawValue) -> Option<f64> {
        if self.core_type == CoreType::String && self.missing.matches_text(raw) {
            return None;
        }
        let x = raw.to_number()?;
        (!self.missing.matches_number(x)).then_some(x)
    }

    /// Robust statistics (hinges, trimmed mean, extremes) only apply to
    /// scale or ordinal variables that are not dates.
    pub fn supports_robust_statistics(&self) -> bool {
        matches!(
            self.measurement,
            MeasurementLevel::Scale | MeasurementLevel::Ordinal
        ) && self.core_type != CoreType::Date
    }

    /// Label for a value, if one is defined
    pub fn label_for(&self, value: f64) -> Option<&str> {
        self.value_labels
            .iter()
            .find(|l| l.value == value)
            .map(|l| l.label.as_str())
    }

    /// Display name: the label when present, else the name
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}
