//! Weighted Harrell-Davis quantile estimator using the generic implementation

use super::generic::{CdfWeightedEstimator, LevelCdf, LevelPlan};
use tracing::debug;
use weighted_core::math::beta::regularized_incomplete_beta;
use weighted_core::{Estimate, SortedSample, Undefined};

/// Beta CDF with shape `((n + 1) p, (n + 1)(1 - p))`
///
/// `n` is the effective sample size, which makes the estimator respect the
/// weights instead of the raw number of observations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BetaLevelCdf;

/// Beta shape parameters for one level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaShape {
    pub a: f64,
    pub b: f64,
}

impl LevelCdf for BetaLevelCdf {
    type Params = BetaShape;

    fn name(&self) -> &'static str {
        "harrell_davis"
    }

    fn plan(&self, sample: &SortedSample, n_eff: f64, p: f64) -> LevelPlan<BetaShape> {
        let a = (n_eff + 1.0) * p;
        let b = (n_eff + 1.0) * (1.0 - p);
        let degenerate = p <= 0.0 || p >= 1.0 || n_eff <= 1.0 || sample.len() <= 1;
        if degenerate || !(a > 0.0 && b > 0.0) {
            debug!(p, n_eff, len = sample.len(), "harrell-davis level is degenerate");
            return LevelPlan::Exact(Estimate::Undefined(Undefined::DegenerateLevel { p }));
        }
        LevelPlan::Weighted(BetaShape { a, b })
    }

    fn cdf(&self, params: &BetaShape, x: f64) -> f64 {
        regularized_incomplete_beta(x, params.a, params.b)
    }
}

/// Weighted Harrell-Davis quantile estimator
///
/// Smooth estimate using a Beta-weighted average of every order statistic.
pub type HarrellDavis = CdfWeightedEstimator<BetaLevelCdf>;

/// Convenience constructor for the Harrell-Davis estimator
pub fn harrell_davis() -> HarrellDavis {
    HarrellDavis::new(BetaLevelCdf)
}
