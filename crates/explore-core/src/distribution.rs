//! Weighted empirical distribution
//!
//! [`WeightedSampleBuilder`] turns a raw value/weight stream into a
//! [`WeightedDistribution`]: distinct valid values in ascending order, the
//! total weight per value, and the running cumulative weight. Every other
//! statistic in the workspace is computed from this structure.

use crate::value::Observation;
use crate::variable::VariableDefinition;
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;
use tracing::debug;

/// A valid case: its position in the input and its coerced value/weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidCase {
    pub index: usize,
    pub value: f64,
    pub weight: f64,
}

/// Sorted weighted distribution of the valid values of one variable
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeightedDistribution {
    values: Vec<f64>,
    weights: Vec<f64>,
    cum_weights: Vec<f64>,
    unit_weights: bool,
    valid_cases: usize,
    skipped_cases: usize,
    missing_weight: f64,
}

impl WeightedDistribution {
    /// Unweighted distribution of finite values
    pub fn from_values(values: &[f64]) -> Self {
        WeightedSampleBuilder::new(&VariableDefinition::default())
            .build(&crate::value::observations_from_f64(values), None)
    }

    /// Weighted distribution of finite values
    pub fn from_weighted(values: &[f64], weights: &[f64]) -> Self {
        WeightedSampleBuilder::new(&VariableDefinition::default())
            .build(&crate::value::observations_from_f64(values), Some(weights))
    }

    /// Distinct valid values, strictly ascending
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Aggregate weight of each distinct value
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Running sum of `weights`
    pub fn cum_weights(&self) -> &[f64] {
        &self.cum_weights
    }

    /// Total valid weight `W`
    pub fn total_weight(&self) -> f64 {
        self.cum_weights.last().copied().unwrap_or(0.0)
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when there is no valid weight at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when every accepted case carried weight exactly 1
    pub fn has_unit_weights(&self) -> bool {
        self.unit_weights
    }

    /// Number of accepted cases
    pub fn valid_cases(&self) -> usize {
        self.valid_cases
    }

    /// Number of rejected cases (missing value or unusable weight)
    pub fn skipped_cases(&self) -> usize {
        self.skipped_cases
    }

    /// Weight of cases rejected for a missing value (their weight was usable)
    pub fn missing_weight(&self) -> f64 {
        self.missing_weight
    }

    pub fn min(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn max(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Weighted sum of values
    pub fn sum(&self) -> f64 {
        self.values
            .iter()
            .zip(&self.weights)
            .map(|(x, w)| x * w)
            .sum()
    }

    /// Weighted arithmetic mean
    pub fn mean(&self) -> Option<f64> {
        let w = self.total_weight();
        (w > 0.0).then(|| self.sum() / w)
    }

    /// Rank-expanded sample: each value repeated `round(weight)` times
    pub fn expanded(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.total_weight().round().max(0.0) as usize);
        for (&x, &w) in self.values.iter().zip(&self.weights) {
            let copies = w.round().max(0.0) as usize;
            out.extend(std::iter::repeat(x).take(copies));
        }
        out
    }
}

/// Builds a [`WeightedDistribution`] for one variable
#[derive(Debug, Clone, Copy)]
pub struct WeightedSampleBuilder<'a> {
    variable: &'a VariableDefinition,
}

impl<'a> WeightedSampleBuilder<'a> {
    pub fn new(variable: &'a VariableDefinition) -> Self {
        Self { variable }
    }

    /// Valid cases in input order
    ///
    /// A case is rejected when its weight is not finite and positive, or
    /// its value fails coercion or the variable's missing-value rule. A
    /// shorter weight array truncates the iteration.
    pub fn valid_cases(
        &self,
        observations: &[Observation],
        weights: Option<&[f64]>,
    ) -> Vec<ValidCase> {
        self.scan(observations, weights).0
    }

    /// Build the distribution
    pub fn build(
        &self,
        observations: &[Observation],
        weights: Option<&[f64]>,
    ) -> WeightedDistribution {
        let (cases, skipped_cases, missing_weight) = self.scan(observations, weights);

        let mut buckets: BTreeMap<OrderedFloat<f64>, f64> = BTreeMap::new();
        let mut unit_weights = true;
        for case in &cases {
            unit_weights &= case.weight == 1.0;
            *buckets.entry(OrderedFloat(case.value)).or_insert(0.0) += case.weight;
        }

        let mut values = Vec::with_capacity(buckets.len());
        let mut bucket_weights = Vec::with_capacity(buckets.len());
        let mut cum_weights = Vec::with_capacity(buckets.len());
        let mut running = 0.0;
        for (value, weight) in buckets {
            running += weight;
            values.push(value.into_inner());
            bucket_weights.push(weight);
            cum_weights.push(running);
        }

        debug!(
            variable = %self.variable.name,
            valid = cases.len(),
            skipped = skipped_cases,
            distinct = values.len(),
            total_weight = running,
            "built weighted distribution"
        );

        WeightedDistribution {
            values,
            weights: bucket_weights,
            cum_weights,
            unit_weights,
            valid_cases: cases.len(),
            skipped_cases,
            missing_weight,
        }
    }

    fn scan(
        &self,
        observations: &[Observation],
        weights: Option<&[f64]>,
    ) -> (Vec<ValidCase>, usize, f64) {
        let len = weights.map_or(observations.len(), |w| w.len().min(observations.len()));
        let mut cases = Vec::with_capacity(len);
        let mut skipped = 0;
        let mut missing_weight = 0.0;

        for (index, obs) in observations.iter().take(len).enumerate() {
            let weight = weights.map_or(1.0, |w| w[index]);
            if !(weight.is_finite() && weight > 0.0) {
                skipped += 1;
                continue;
            }
            match self.variable.valid_value(&obs.value) {
                Some(value) => cases.push(ValidCase {
                    index,
                    value,
                    weight,
                }),
                None => {
                    skipped += 1;
                    missing_weight += weight;
                }
            }
        }
        (cases, skipped, missing_weight)
    }
}
