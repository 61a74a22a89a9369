//! Analysis options

use explore_core::{Error, Result};
use explore_quantile::{PercentileMethod, DEFAULT_PERCENTILES};
use explore_spread::{DEFAULT_EXTREME_COUNT, DEFAULT_TRIM_PERCENT};
use serde::{Deserialize, Serialize};

/// Options for one Explore analysis
///
/// Every field is optional in JSON and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExploreOptions {
    pub percentile_method: PercentileMethod,
    /// Whether to list extreme values
    pub show_outliers: bool,
    /// Fences from Tukey hinges rather than the selected percentiles
    pub use_hinges_for_outliers: bool,
    /// Cases listed per tail
    pub extreme_count: usize,
    /// Confidence level in percent
    pub confidence_interval: f64,
    pub percentiles: Vec<f64>,
    pub trim_percent: f64,
    pub frequency_table: bool,
}

impl Default for ExploreOptions {
    fn default() -> Self {
        Self {
            percentile_method: PercentileMethod::default(),
            show_outliers: false,
            use_hinges_for_outliers: true,
            extreme_count: DEFAULT_EXTREME_COUNT,
            confidence_interval: 95.0,
            percentiles: DEFAULT_PERCENTILES.to_vec(),
            trim_percent: DEFAULT_TRIM_PERCENT,
            frequency_table: true,
        }
    }
}

impl ExploreOptions {
    /// Parse and validate options from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.confidence_interval > 0.0 && self.confidence_interval < 100.0) {
            return Err(Error::invalid_confidence_level(self.confidence_interval));
        }
        if !(0.0..50.0).contains(&self.trim_percent) {
            return Err(Error::invalid_trim(self.trim_percent));
        }
        if let Some(&p) = self.percentiles.iter().find(|p| !(0.0..=100.0).contains(*p)) {
            return Err(Error::invalid_percentile(p));
        }
        Ok(())
    }

    pub fn with_percentile_method(mut self, method: PercentileMethod) -> Self {
        self.percentile_method = method;
        self
    }

    pub fn with_outliers(mut self, show: bool) -> Self {
        self.show_outliers = show;
        self
    }

    pub fn with_confidence_interval(mut self, level: f64) -> Self {
        self.confidence_interval = level;
        self
    }
}
