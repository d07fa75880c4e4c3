//! Quantiles by linear interpolation on the weighted empirical CDF

use crate::WeightedQuantileEstimator;
use tracing::instrument;
use weighted_core::{CumulativeWeightTable, Estimate, SortedSample};

/// Weighted empirical-CDF quantile estimator
///
/// Finds the first observation whose cumulative weight reaches `p · total`
/// and interpolates linearly towards it from its predecessor. Always defined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empirical;

impl Empirical {
    pub fn new() -> Self {
        Self
    }

    fn level(sample: &SortedSample, table: &CumulativeWeightTable, p: f64) -> f64 {
        let obs = sample.observations();
        if p <= 0.0 {
            return sample.min();
        }
        if p >= 1.0 {
            return sample.max();
        }

        let cumulative = table.as_slice();
        let target = p * sample.total_weight();
        if target <= cumulative[0] {
            return obs[0].value;
        }

        let i = table.search(target);
        if i == 0 || cumulative[i] == target {
            return obs[i].value;
        }

        let below = cumulative[i - 1];
        let span = cumulative[i] - below;
        if span <= 0.0 {
            return obs[i].value;
        }
        let fraction = (target - below) / span;
        obs[i - 1].value + fraction * (obs[i].value - obs[i - 1].value)
    }
}

impl WeightedQuantileEstimator for Empirical {
    fn name(&self) -> &'static str {
        "empirical"
    }

    #[instrument(skip(self, sample, levels), fields(len = sample.len(), levels = levels.len()))]
    fn quantiles_sorted(&self, sample: &SortedSample, levels: &[f64]) -> Vec<Estimate> {
        if sample.is_empty() {
            return vec![Estimate::Value(0.0); levels.len()];
        }
        let table = CumulativeWeightTable::new(sample);
        levels
            .iter()
            .map(|&p| Estimate::Value(Self::level(sample, &table, p)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn estimate(values: &[f64], weights: &[f64], levels: &[f64]) -> Vec<f64> {
        Empirical
            .quantiles(values, weights, levels)
            .unwrap()
            .iter()
            .map(|e| e.value().unwrap())
            .collect()
    }

    #[test]
    fn test_equal_weights_interpolate() {
        // Cumulative weights 0.25, 0.5, 0.75, 1.0
        let q = estimate(&[1.0, 2.0, 3.0, 4.0], &[0.25; 4], &[0.5, 0.625, 0.3]);
        assert_relative_eq!(q[0], 2.0);
        assert_relative_eq!(q[1], 2.5);
        assert_relative_eq!(q[2], 1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_boundaries_are_extremes() {
        let q = estimate(&[5.0, -3.0, 9.0], &[0.2, 0.3, 0.1], &[0.0, 1.0]);
        // The implicit zero sits between -3 and 5
        assert_eq!(q, vec![-3.0, 9.0]);
    }

    #[test]
    fn test_target_below_first_weight() {
        let q = estimate(&[10.0, 20.0], &[0.5, 0.5], &[0.1, 0.5]);
        assert_eq!(q, vec![10.0, 10.0]);
    }

    #[test]
    fn test_implicit_zero_mass() {
        // Sorted: (0, 0.6), (10, 0.4)
        let q = estimate(&[10.0], &[0.4], &[0.5, 0.8]);
        assert_eq!(q[0], 0.0);
        assert_relative_eq!(q[1], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_input_is_zero() {
        let q = estimate(&[], &[], &[0.0, 0.3, 1.0]);
        assert_eq!(q, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_no_levels() {
        assert!(Empirical.quantiles(&[1.0], &[0.5], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_level_fails_whole_call() {
        let err = Empirical.quantiles(&[1.0], &[0.5], &[0.5, 1.2]).unwrap_err();
        assert_eq!(err, Error::InvalidProbability { p: 1.2 });
    }

    #[test]
    fn test_overweight_normalizes_by_total() {
        // Total weight 4, no implicit zero
        let q = estimate(&[1.0, 3.0], &[2.0, 2.0], &[0.5, 0.75]);
        assert_eq!(q[0], 1.0);
        assert_relative_eq!(q[1], 2.0);
    }

    proptest! {
        #[test]
        fn prop_monotone_in_level(
            pairs in prop::collection::vec((-100.0..100.0f64, 0.0..0.2f64), 0..40),
            mut levels in prop::collection::vec(0.0..=1.0f64, 1..20),
        ) {
            levels.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let (values, weights): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            let q = estimate(&values, &weights, &levels);
            for w in q.windows(2) {
                prop_assert!(w[1] >= w[0] - 1e-9, "{:?}", q);
            }
        }
    }
}
