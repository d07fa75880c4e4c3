//! Sparse weighted samples
//!
//! A sparse sample stores only the observations with positive weight. When the
//! explicit weights sum to less than one, the missing probability mass belongs
//! to an implicit observation at value `0.0`. Completing the sample makes that
//! observation explicit so that every estimator sees a proper distribution
//! without the zeros ever being materialized one by one.

use crate::error::{Error, Result};
use crate::sort::{sort_observations_with, SortConfig};
use serde::{Deserialize, Serialize};

/// A single `(value, weight)` observation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub value: f64,
    pub weight: f64,
}

impl Observation {
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// A completed sparse sample owned by a single computation
///
/// # Examples
///
/// ```
/// use weighted_core::sparse::WeightedSample;
///
/// // 0.4 of the mass is explicit, 0.6 sits on the implicit zero
/// let sample = WeightedSample::from_slices(&[10.0], &[0.4]).unwrap();
/// assert_eq!(sample.len(), 2);
/// assert!((sample.implicit_weight() - 0.6).abs() < 1e-12);
/// assert!((sample.total_weight() - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedSample {
    observations: Vec<Observation>,
    /// Sum of the explicit positive weights
    explicit_weight: f64,
    /// Weight assigned to the implicit zero (0.0 when none was added)
    implicit_weight: f64,
}

impl WeightedSample {
    /// Validate raw sequences and build the completed sample
    ///
    /// Fails if the lengths differ, if any weight is negative, or if any value
    /// or weight is NaN or infinite. Pairs with zero weight are dropped.
    pub fn from_slices(values: &[f64], weights: &[f64]) -> Result<Self> {
        validate(values, weights)?;

        let mut observations = Vec::with_capacity(values.len() + 1);
        let mut explicit_weight = 0.0;
        for (&value, &weight) in values.iter().zip(weights) {
            if weight > 0.0 {
                observations.push(Observation { value, weight });
                explicit_weight += weight;
            }
        }

        let implicit_weight = if explicit_weight < 1.0 {
            let remainder = 1.0 - explicit_weight;
            observations.push(Observation {
                value: 0.0,
                weight: remainder,
            });
            remainder
        } else {
            0.0
        };

        Ok(Self {
            observations,
            explicit_weight,
            implicit_weight,
        })
    }

    /// Number of observations, including the implicit zero
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// A completed sample always holds at least one observation
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn explicit_weight(&self) -> f64 {
        self.explicit_weight
    }

    pub fn implicit_weight(&self) -> f64 {
        self.implicit_weight
    }

    /// Whether an implicit zero observation was appended
    pub fn has_implicit_zero(&self) -> bool {
        self.implicit_weight > 0.0
    }

    /// Total weight after completion
    ///
    /// Exactly the explicit sum when it reaches one, otherwise one.
    pub fn total_weight(&self) -> f64 {
        self.explicit_weight + self.implicit_weight
    }

    /// Kish's effective sample size `(Σw)² / Σw²`
    ///
    /// Weights are normalized by the total before squaring so large finite
    /// weights cannot overflow.
    pub fn effective_sample_size(&self) -> f64 {
        let total = self.total_weight();
        let sum_sq: f64 = self
            .observations
            .iter()
            .map(|o| (o.weight / total).powi(2))
            .sum();
        1.0 / sum_sq
    }

    /// Sort by value with the default adaptive policy
    pub fn into_sorted(self) -> SortedSample {
        self.into_sorted_with(&SortConfig::default())
    }

    /// Sort by value with an explicit policy
    pub fn into_sorted_with(mut self, config: &SortConfig) -> SortedSample {
        sort_observations_with(&mut self.observations, config);
        SortedSample { sample: self }
    }
}

/// A completed sample whose observations are in non-decreasing value order
#[derive(Clone, Debug, PartialEq)]
pub struct SortedSample {
    sample: WeightedSample,
}

impl SortedSample {
    pub fn len(&self) -> usize {
        self.sample.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        self.sample.observations()
    }

    pub fn total_weight(&self) -> f64 {
        self.sample.total_weight()
    }

    pub fn effective_sample_size(&self) -> f64 {
        self.sample.effective_sample_size()
    }

    /// Smallest value in the completed sample
    pub fn min(&self) -> f64 {
        self.observations().first().map_or(0.0, |o| o.value)
    }

    /// Largest value in the completed sample
    pub fn max(&self) -> f64 {
        self.observations().last().map_or(0.0, |o| o.value)
    }

    /// Borrow the underlying (unsorted view) sample
    pub fn as_sample(&self) -> &WeightedSample {
        &self.sample
    }
}

/// Inclusive prefix sums of weights over a sorted sample
///
/// `cumulative[i] = Σ_{j ≤ i} weight[j]`. Built once per call and shared
/// across all requested levels.
#[derive(Clone, Debug, PartialEq)]
pub struct CumulativeWeightTable {
    cumulative: Vec<f64>,
}

impl CumulativeWeightTable {
    pub fn new(sample: &SortedSample) -> Self {
        let mut running = 0.0;
        let cumulative = sample
            .observations()
            .iter()
            .map(|o| {
                running += o.weight;
                running
            })
            .collect();
        Self { cumulative }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.cumulative
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Smallest index whose cumulative weight reaches `target`
    ///
    /// Clamped to the last index when rounding leaves the final prefix sum
    /// just below `target`.
    pub fn search(&self, target: f64) -> usize {
        let pos = self.cumulative.partition_point(|&c| c < target);
        pos.min(self.cumulative.len().saturating_sub(1))
    }
}

/// Normalized cumulative probabilities with a leading zero
///
/// `grid[0] = 0` and `grid[i + 1] = grid[i] + weight[i] / total`, so that
/// observation `i` owns the probability interval `[grid[i], grid[i + 1]]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityGrid {
    grid: Vec<f64>,
}

impl ProbabilityGrid {
    pub fn new(sample: &SortedSample) -> Self {
        let total = sample.total_weight();
        let mut grid = Vec::with_capacity(sample.len() + 1);
        let mut running = 0.0;
        grid.push(running);
        for o in sample.observations() {
            running += o.weight / total;
            grid.push(running);
        }
        Self { grid }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.grid
    }

    /// Probability interval `[lower, upper]` owned by each observation
    pub fn intervals(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.grid.windows(2).map(|w| (w[0], w[1]))
    }
}

fn validate(values: &[f64], weights: &[f64]) -> Result<()> {
    if values.len() != weights.len() {
        return Err(Error::size_mismatch(values.len(), weights.len()));
    }
    for (index, (&value, &weight)) in values.iter().zip(weights).enumerate() {
        if !weight.is_finite() {
            return Err(Error::non_finite("weights", index));
        }
        if weight < 0.0 {
            return Err(Error::negative_weight(index, weight));
        }
        if !value.is_finite() {
            return Err(Error::non_finite("values", index));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sparse_completion_appends_implicit_zero() {
        let sample = WeightedSample::from_slices(&[10.0, 20.0], &[0.2, 0.3]).unwrap();

        assert_eq!(sample.len(), 3);
        assert!(sample.has_implicit_zero());
        assert_relative_eq!(sample.explicit_weight(), 0.5);
        assert_relative_eq!(sample.implicit_weight(), 0.5);
        assert_eq!(sample.observations()[2], Observation::new(0.0, 0.5));
    }

    #[test]
    fn test_full_weight_needs_no_completion() {
        let sample = WeightedSample::from_slices(&[1.0, 1.0], &[0.5, 0.5]).unwrap();

        assert_eq!(sample.len(), 2);
        assert!(!sample.has_implicit_zero());
        assert_eq!(sample.total_weight(), 1.0);
    }

    #[test]
    fn test_overweight_sample_keeps_its_total() {
        let sample = WeightedSample::from_slices(&[1.0, 2.0], &[1.0, 2.0]).unwrap();

        assert_eq!(sample.len(), 2);
        assert_eq!(sample.total_weight(), 3.0);
    }

    #[test]
    fn test_zero_weights_are_dropped() {
        let sample =
            WeightedSample::from_slices(&[5.0, 6.0, 7.0], &[0.0, 0.25, 0.0]).unwrap();

        assert_eq!(sample.len(), 2);
        assert_eq!(sample.observations()[0], Observation::new(6.0, 0.25));
    }

    #[test]
    fn test_empty_input_is_single_implicit_zero() {
        let sample = WeightedSample::from_slices(&[], &[]).unwrap();

        assert_eq!(sample.observations(), &[Observation::new(0.0, 1.0)]);
        assert_eq!(sample.effective_sample_size(), 1.0);
    }

    #[test]
    fn test_validation_failures() {
        assert!(matches!(
            WeightedSample::from_slices(&[1.0, 2.0], &[0.5]),
            Err(Error::InvalidInput(_))
        ));
        assert!(WeightedSample::from_slices(&[1.0], &[-0.1]).is_err());
        assert!(WeightedSample::from_slices(&[f64::NAN], &[0.1]).is_err());
        assert!(WeightedSample::from_slices(&[1.0], &[f64::INFINITY]).is_err());
        assert!(WeightedSample::from_slices(&[1.0], &[f64::NAN]).is_err());
        // Dropped pairs are still validated
        assert!(WeightedSample::from_slices(&[f64::INFINITY], &[0.0]).is_err());
    }

    #[test]
    fn test_effective_sample_size() {
        // Equal weights: n_eff equals the count
        let sample = WeightedSample::from_slices(&[1.0, 2.0, 3.0, 4.0], &[0.25; 4]).unwrap();
        assert_relative_eq!(sample.effective_sample_size(), 4.0, epsilon = 1e-12);

        // Implicit zero participates: weights 0.4 and 0.6
        let sample = WeightedSample::from_slices(&[10.0], &[0.4]).unwrap();
        assert_relative_eq!(
            sample.effective_sample_size(),
            1.0 / (0.4 * 0.4 + 0.6 * 0.6),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_effective_sample_size_is_scale_invariant() {
        // Squaring raw 1e160 weights would overflow to infinity
        let values = [1.0, 2.0, 3.0, 4.0];
        let large = WeightedSample::from_slices(&values, &[1e160; 4]).unwrap();
        assert!(!large.has_implicit_zero());
        assert_relative_eq!(large.effective_sample_size(), 4.0, epsilon = 1e-12);

        let mixed = WeightedSample::from_slices(&values, &[3e200, 1e200, 1e200, 1e200]).unwrap();
        let reference = WeightedSample::from_slices(&values, &[0.5, 1.0 / 6.0, 1.0 / 6.0, 1.0 / 6.0]).unwrap();
        assert_relative_eq!(
            mixed.effective_sample_size(),
            reference.effective_sample_size(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_sorted_sample_bounds() {
        let sorted = WeightedSample::from_slices(&[3.0, -2.0, 7.0], &[0.2, 0.2, 0.2])
            .unwrap()
            .into_sorted();

        assert_eq!(sorted.min(), -2.0);
        assert_eq!(sorted.max(), 7.0);
        let values: Vec<f64> = sorted.observations().iter().map(|o| o.value).collect();
        assert_eq!(values, vec![-2.0, 0.0, 3.0, 7.0]);
    }

    #[test]
    fn test_cumulative_table_search() {
        let sorted = WeightedSample::from_slices(&[1.0, 2.0, 3.0, 4.0], &[0.25; 4])
            .unwrap()
            .into_sorted();
        let table = CumulativeWeightTable::new(&sorted);

        assert_eq!(table.as_slice(), &[0.25, 0.5, 0.75, 1.0]);
        assert_eq!(table.search(0.1), 0);
        assert_eq!(table.search(0.5), 1);
        assert_eq!(table.search(0.6), 2);
        assert_eq!(table.search(1.5), 3);
    }

    #[test]
    fn test_probability_grid() {
        let sorted = WeightedSample::from_slices(&[1.0, 2.0], &[1.0, 3.0])
            .unwrap()
            .into_sorted();
        let grid = ProbabilityGrid::new(&sorted);

        assert_eq!(grid.as_slice(), &[0.0, 0.25, 1.0]);
        let intervals: Vec<_> = grid.intervals().collect();
        assert_eq!(intervals, vec![(0.0, 0.25), (0.25, 1.0)]);
    }
}
