//! Core traits for weighted quantile estimation

use crate::{Error, Result};
use weighted_core::{Estimate, SortedSample, WeightedSample};

/// Main trait for weighted quantile estimation
///
/// Implementors only provide [`quantiles_sorted`](Self::quantiles_sorted);
/// validation, sparse completion and sorting are shared.
pub trait WeightedQuantileEstimator {
    /// Short identifier used in logs and reports
    fn name(&self) -> &'static str;

    /// Estimate every level from an already sorted sample
    ///
    /// Levels are assumed valid. One result is returned per level, in
    /// request order.
    fn quantiles_sorted(&self, sample: &SortedSample, levels: &[f64]) -> Vec<Estimate>;

    /// Validate raw inputs, complete the sparse sample, sort it and estimate
    ///
    /// Every level is checked before the sample is built, so a bad level
    /// fails the call without doing any work.
    fn quantiles(&self, values: &[f64], weights: &[f64], levels: &[f64]) -> Result<Vec<Estimate>> {
        Error::check_probabilities(levels)?;
        let sample = WeightedSample::from_slices(values, weights)?.into_sorted();
        Ok(self.quantiles_sorted(&sample, levels))
    }
}
