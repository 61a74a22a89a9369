//! Weighted trimmed mean

use explore_core::{Error, Result, WeightedDistribution};

const MIN_REMAINING_WEIGHT: f64 = 1e-12;

/// Trimmed mean estimator
///
/// Removes `trim_percent` of the total weight from each tail. A boundary
/// value is consumed partially rather than dropped, so trimming 5 % of ten
/// unit-weight cases keeps half of the smallest and half of the largest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimmedMean {
    trim_percent: f64,
}

impl TrimmedMean {
    /// Create with a trim percentage per tail in `[0, 50)`
    pub fn new(trim_percent: f64) -> Result<Self> {
        if !(0.0..50.0).contains(&trim_percent) {
            return Err(Error::invalid_trim(trim_percent));
        }
        Ok(Self { trim_percent })
    }

    pub fn trim_percent(&self) -> f64 {
        self.trim_percent
    }

    /// Trimmed mean of a distribution, `None` when no weight remains
    pub fn estimate(&self, dist: &WeightedDistribution) -> Option<f64> {
        let total = dist.total_weight();
        if total <= 0.0 {
            return None;
        }
        let trim_weight = self.trim_percent / 100.0 * total;

        let mut remaining = dist.weights().to_vec();
        consume(remaining.iter_mut(), trim_weight);
        consume(remaining.iter_mut().rev(), trim_weight);

        let kept: f64 = remaining.iter().sum();
        if kept <= MIN_REMAINING_WEIGHT {
            return None;
        }
        let weighted: f64 = remaining
            .iter()
            .zip(dist.values())
            .map(|(w, x)| w * x)
            .sum();
        Some(weighted / kept)
    }
}

impl Default for TrimmedMean {
    /// 5 % from each tail
    fn default() -> Self {
        Self {
            trim_percent: crate::DEFAULT_TRIM_PERCENT,
        }
    }
}

/// Take up to `amount` weight from successive buckets
fn consume<'w>(buckets: impl Iterator<Item = &'w mut f64>, mut amount: f64) {
    for w in buckets {
        if amount <= 0.0 {
            break;
        }
        let cut = w.min(amount);
        *w -= cut;
        amount -= cut;
    }
}

/// Trimmed mean with `trim_percent` removed from each tail
///
/// `None` for an empty distribution or a percentage outside `[0, 50)`.
pub fn trimmed_mean(dist: &WeightedDistribution, trim_percent: f64) -> Option<f64> {
    TrimmedMean::new(trim_percent).ok()?.estimate(dist)
}
