//! Result object of an Explore analysis

use explore_confidence::ConfidenceInterval;
use explore_core::{BaseDescriptives, Error, Result};
use explore_frequency::{FrequencySummary, FrequencyTable};
use explore_quantile::PercentileMethod;
use explore_spread::{ExtremeValues, MEstimators, TukeyHinges};
use serde::ser::Serializer;
use serde::Serialize;

/// Base descriptives extended with the statistics computed here
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptives {
    #[serde(flatten)]
    pub base: BaseDescriptives,
    pub iqr: Option<f64>,
    pub median: Option<f64>,
    pub confidence_interval: Option<ConfidenceInterval>,
}

/// Requested percentiles under one definition
///
/// Serializes `values` as a map keyed by the percentile, in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Percentiles {
    pub method: PercentileMethod,
    #[serde(serialize_with = "percentile_map")]
    pub values: Vec<(f64, Option<f64>)>,
}

impl Percentiles {
    /// Value at percentile `p`, if it was requested and is defined
    pub fn get(&self, p: f64) -> Option<f64> {
        self.values.iter().find(|(q, _)| *q == p).and_then(|(_, v)| *v)
    }
}

fn percentile_map<S: Serializer>(values: &[(f64, Option<f64>)], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(values.iter().map(|(p, v)| (p.to_string(), v)))
}

/// Full Explore result for one variable
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreReport {
    pub variable: String,
    pub summary: FrequencySummary,
    pub descriptives: Descriptives,
    pub frequency_table: Option<FrequencyTable>,
    pub percentiles: Percentiles,
    pub hinges: Option<TukeyHinges>,
    pub trimmed_mean: Option<f64>,
    pub extreme_values: Option<ExtremeValues>,
    pub m_estimators: Option<MEstimators>,
}

impl ExploreReport {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Serialization)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Serialization)
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(Error::Serialization)
    }
}
