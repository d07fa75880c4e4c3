//! Generic CDF-weighted quantile estimator
//!
//! Type-7 and Harrell-Davis share one shape: each observation `i` owns the
//! probability interval `[grid[i], grid[i + 1]]`, a level-specific CDF `F`
//! turns that interval into a weight `F(grid[i + 1]) - F(grid[i])`, and the
//! quantile is the weighted sum of the values. Only `F` differs.

use crate::WeightedQuantileEstimator;
use tracing::{debug, instrument};
use weighted_core::{Estimate, ProbabilityGrid, SortedSample, Undefined};

/// How a single level is resolved before any weights are computed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LevelPlan<P> {
    /// Integrate the CDF with these per-level parameters
    Weighted(P),
    /// The level has a direct answer (boundary or degenerate sample)
    Exact(Estimate),
}

/// CDF over the probability grid for one estimator family
pub trait LevelCdf {
    /// Parameters fixed for one level of one sample
    type Params: Copy;

    fn name(&self) -> &'static str;

    /// Resolve level `p` for a sorted sample with effective size `n_eff`
    fn plan(&self, sample: &SortedSample, n_eff: f64, p: f64) -> LevelPlan<Self::Params>;

    /// Evaluate the CDF at grid point `x`; NaN signals a numerical failure
    fn cdf(&self, params: &Self::Params, x: f64) -> f64;
}

/// Quantile estimator that weights order statistics through a [`LevelCdf`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CdfWeightedEstimator<C> {
    cdf: C,
}

impl<C: LevelCdf> CdfWeightedEstimator<C> {
    pub fn new(cdf: C) -> Self {
        Self { cdf }
    }

    /// Get the level CDF
    pub fn cdf(&self) -> &C {
        &self.cdf
    }

    fn level(&self, sample: &SortedSample, grid: &ProbabilityGrid, n_eff: f64, p: f64) -> Estimate {
        let params = match self.cdf.plan(sample, n_eff, p) {
            LevelPlan::Exact(estimate) => return estimate,
            LevelPlan::Weighted(params) => params,
        };

        let mut left = self.cdf.cdf(&params, 0.0);
        let mut sum = 0.0;
        for (o, &upper) in sample.observations().iter().zip(&grid.as_slice()[1..]) {
            let right = self.cdf.cdf(&params, upper);
            sum += (right - left) * o.value;
            left = right;
        }

        if sum.is_nan() {
            debug!(estimator = self.cdf.name(), p, "level did not converge");
            return Estimate::Undefined(Undefined::NonConvergence { p });
        }
        Estimate::Value(sum)
    }
}

impl<C: LevelCdf> WeightedQuantileEstimator for CdfWeightedEstimator<C> {
    fn name(&self) -> &'static str {
        self.cdf.name()
    }

    #[instrument(
        skip(self, sample, levels),
        fields(estimator = self.cdf.name(), len = sample.len(), levels = levels.len())
    )]
    fn quantiles_sorted(&self, sample: &SortedSample, levels: &[f64]) -> Vec<Estimate> {
        let grid = ProbabilityGrid::new(sample);
        let n_eff = sample.effective_sample_size();
        levels
            .iter()
            .map(|&p| self.level(sample, &grid, n_eff, p))
            .collect()
    }
}
