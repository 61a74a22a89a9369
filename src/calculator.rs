//! Orchestration of one Explore analysis

use crate::options::ExploreOptions;
use crate::report::{Descriptives, ExploreReport, Percentiles};
use explore_confidence::{ConfidenceInterval, ConfidenceIntervalEstimator};
use explore_core::{BaseDescriptives, Observation, VariableDefinition, WeightedDistribution, WeightedSampleBuilder};
use explore_frequency::FrequencyTableBuilder;
use explore_quantile::{PercentileEngine, PercentileMethod};
use explore_spread::{ExtremeValues, RobustStatisticsEngine};
use std::cell::OnceCell;
use tracing::{debug, instrument, trace};

/// Computes every Explore statistic for one variable
///
/// The weighted distribution is built on first use and reused for the
/// lifetime of the calculator. Create one calculator per request.
#[derive(Debug)]
pub struct ExploreCalculator<'a> {
    variable: &'a VariableDefinition,
    observations: &'a [Observation],
    weights: Option<&'a [f64]>,
    base: Option<BaseDescriptives>,
    options: ExploreOptions,
    distribution: OnceCell<WeightedDistribution>,
}

impl<'a> ExploreCalculator<'a> {
    pub fn new(variable: &'a VariableDefinition, observations: &'a [Observation], options: ExploreOptions) -> Self {
        Self {
            variable,
            observations,
            weights: None,
            base: None,
            options,
            distribution: OnceCell::new(),
        }
    }

    /// Per-case weights parallel to the observations
    pub fn with_weights(mut self, weights: &'a [f64]) -> Self {
        self.weights = Some(weights);
        self.distribution = OnceCell::new();
        self
    }

    /// Mean, standard deviation and N computed elsewhere
    pub fn with_descriptives(mut self, base: BaseDescriptives) -> Self {
        self.base = Some(base);
        self
    }

    pub fn options(&self) -> &ExploreOptions {
        &self.options
    }

    pub fn distribution(&self) -> &WeightedDistribution {
        self.distribution.get_or_init(|| {
            WeightedSampleBuilder::new(self.variable).build(self.observations, self.weights)
        })
    }

    /// Supplied descriptives, or the weighted ones of the distribution
    pub fn descriptives(&self) -> BaseDescriptives {
        self.base
            .unwrap_or_else(|| BaseDescriptives::from_distribution(self.distribution()))
    }

    pub fn percentile_engine(&self) -> PercentileEngine<'_> {
        PercentileEngine::new(self.distribution())
    }

    pub fn robust(&self) -> RobustStatisticsEngine<'_> {
        RobustStatisticsEngine::new(self.distribution(), self.variable)
    }

    pub fn frequencies(&self) -> FrequencyTableBuilder<'_> {
        FrequencyTableBuilder::new(self.distribution(), self.variable)
    }

    /// Interquartile range
    ///
    /// Tukey hinges for scale and ordinal variables; otherwise the spread
    /// of the weighted-average quartiles.
    pub fn iqr(&self) -> Option<f64> {
        let robust = self.robust();
        if robust.is_active() {
            robust.iqr()
        } else {
            self.percentile_engine().iqr(PercentileMethod::WeightedAverage1)
        }
    }

    /// Median under the configured percentile definition
    pub fn median(&self) -> Option<f64> {
        self.percentile_engine().median(self.options.percentile_method)
    }

    pub fn percentiles(&self) -> Percentiles {
        let method = self.options.percentile_method;
        let engine = self.percentile_engine();
        Percentiles {
            method,
            values: self
                .options
                .percentiles
                .iter()
                .map(|&p| (p, engine.percentile(method, p)))
                .collect(),
        }
    }

    pub fn confidence_interval(&self) -> Option<ConfidenceInterval> {
        let base = self.descriptives();
        let estimator = ConfidenceIntervalEstimator::new(self.options.confidence_interval).ok()?;
        estimator.estimate(base.mean?, base.se_mean?, self.distribution().total_weight())
    }

    /// Extreme values when outliers were requested
    pub fn extreme_values(&self) -> Option<ExtremeValues> {
        if !self.options.show_outliers {
            return None;
        }
        let robust = self.robust();
        let fences = robust.fences(self.options.use_hinges_for_outliers, self.options.percentile_method)?;
        robust.extreme_values(self.observations, self.weights, fences, self.options.extreme_count)
    }

    /// Total case count for percentages, missing included
    fn total_n(&self, base: &BaseDescriptives) -> f64 {
        if base.n > 0.0 {
            base.n
        } else {
            let dist = self.distribution();
            dist.total_weight() + dist.missing_weight()
        }
    }

    #[instrument(skip_all, fields(variable = %self.variable.name))]
    pub fn report(&self) -> ExploreReport {
        let dist = self.distribution();
        let base = self.descriptives();
        let total_n = self.total_n(&base);
        let robust = self.robust();
        let frequencies = self.frequencies();

        debug!(
            valid = dist.valid_cases(),
            skipped = dist.skipped_cases(),
            total_weight = dist.total_weight(),
            method = %self.options.percentile_method,
            robust = robust.is_active(),
            "assembling explore report"
        );

        let frequency_table = if self.options.frequency_table {
            frequencies.frequency_table(total_n)
        } else {
            trace!("frequency table disabled");
            None
        };

        ExploreReport {
            variable: self.variable.display_name().to_string(),
            summary: frequencies.summary(total_n),
            descriptives: Descriptives {
                base,
                iqr: self.iqr(),
                median: self.median(),
                confidence_interval: self.confidence_interval(),
            },
            frequency_table,
            percentiles: self.percentiles(),
            hinges: robust.tukey_hinges(),
            trimmed_mean: robust.trimmed_mean(self.options.trim_percent),
            extreme_values: self.extreme_values(),
            m_estimators: robust.m_estimators(base.mean),
        }
    }
}
