//! Percentile engine over a weighted distribution

use crate::estimators;
use crate::method::PercentileMethod;
use explore_core::WeightedDistribution;

/// Quartiles under one percentile definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl Quartiles {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Computes percentiles of one distribution
#[derive(Debug, Clone, Copy)]
pub struct PercentileEngine<'a> {
    dist: &'a WeightedDistribution,
}

impl<'a> PercentileEngine<'a> {
    pub fn new(dist: &'a WeightedDistribution) -> Self {
        Self { dist }
    }

    pub fn distribution(&self) -> &'a WeightedDistribution {
        self.dist
    }

    /// Percentile `p` (0–100) under `method`
    ///
    /// `None` when there is no valid weight or `p` is NaN.
    pub fn percentile(&self, method: PercentileMethod, p: f64) -> Option<f64> {
        if p.is_nan() {
            return None;
        }
        match method {
            PercentileMethod::WeightedAverage1 => estimators::waverage(self.dist, p),
            PercentileMethod::WeightedAverage4 => estimators::haverage(self.dist, p),
            PercentileMethod::TukeyHinges => estimators::tukey(self.dist, p),
            PercentileMethod::EmpiricalAveraged => estimators::aempirical(self.dist, p),
            PercentileMethod::Empirical => estimators::empirical(self.dist, p),
            PercentileMethod::RoundNearest => estimators::round_nearest(self.dist, p),
        }
    }

    /// Several percentiles under the same method
    pub fn percentiles(&self, method: PercentileMethod, ps: &[f64]) -> Vec<Option<f64>> {
        ps.iter().map(|&p| self.percentile(method, p)).collect()
    }

    pub fn median(&self, method: PercentileMethod) -> Option<f64> {
        self.percentile(method, 50.0)
    }

    pub fn quartiles(&self, method: PercentileMethod) -> Option<Quartiles> {
        Some(Quartiles {
            q1: self.percentile(method, 25.0)?,
            median: self.percentile(method, 50.0)?,
            q3: self.percentile(method, 75.0)?,
        })
    }

    /// Interquartile range under `method`
    pub fn iqr(&self, method: PercentileMethod) -> Option<f64> {
        self.quartiles(method).map(|q| q.iqr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dispatch_matches_estimators() {
        let dist = WeightedDistribution::from_values(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]);
        let engine = PercentileEngine::new(&dist);
        for p in [0.0, 10.0, 25.0, 50.0, 75.0, 90.0, 100.0] {
            assert_eq!(engine.percentile(PercentileMethod::WeightedAverage1, p), estimators::waverage(&dist, p));
            assert_eq!(engine.percentile(PercentileMethod::WeightedAverage4, p), estimators::haverage(&dist, p));
            assert_eq!(engine.percentile(PercentileMethod::Empirical, p), estimators::empirical(&dist, p));
        }
    }

    #[test]
    fn test_quartiles() {
        let dist = WeightedDistribution::from_values(&[2.0, 4.0, 6.0, 8.0, 10.0]);
        let engine = PercentileEngine::new(&dist);
        let q = engine.quartiles(PercentileMethod::TukeyHinges).unwrap();
        assert_eq!((q.q1, q.median, q.q3), (4.0, 6.0, 8.0));
        assert_eq!(q.iqr(), 4.0);

        let h = engine.quartiles(PercentileMethod::WeightedAverage4).unwrap();
        assert_relative_eq!(h.q1, 3.0);
        assert_relative_eq!(h.q3, 9.0);
    }

    #[test]
    fn test_nan_and_empty() {
        let dist = WeightedDistribution::from_values(&[1.0]);
        let engine = PercentileEngine::new(&dist);
        assert_eq!(engine.percentile(PercentileMethod::Empirical, f64::NAN), None);

        let empty = WeightedDistribution::from_values(&[]);
        let engine = PercentileEngine::new(&empty);
        for method in PercentileMethod::ALL {
            assert_eq!(engine.percentile(method, 50.0), None);
        }
        assert_eq!(engine.quartiles(PercentileMethod::WeightedAverage4), None);
    }

    #[test]
    fn test_percentiles_batch() {
        let dist = WeightedDistribution::from_values(&[10.0, 20.0, 30.0, 40.0]);
        let engine = PercentileEngine::new(&dist);
        let out = engine.percentiles(PercentileMethod::RoundNearest, &[0.0, 50.0, 100.0]);
        assert_eq!(out, vec![Some(10.0), Some(20.0), Some(40.0)]);
    }
}
