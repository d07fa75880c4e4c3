//! Weighted Hyndman-Fan Type-7 quantile estimator

use super::generic::{CdfWeightedEstimator, LevelCdf, LevelPlan};
use weighted_core::{Estimate, SortedSample};

/// Piecewise-linear CDF of the Type-7 definition
///
/// With `h = p (n - 1) + 1` the CDF rises linearly from 0 to 1 over
/// `[(h - 1) / n, h / n]`, so at most two neighbouring observations receive
/// weight. `n` is the effective sample size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Type7Cdf;

/// Per-level Type-7 parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Type7Params {
    n: f64,
    h: f64,
}

impl LevelCdf for Type7Cdf {
    type Params = Type7Params;

    fn name(&self) -> &'static str {
        "type7"
    }

    fn plan(&self, sample: &SortedSample, n_eff: f64, p: f64) -> LevelPlan<Type7Params> {
        if p <= 0.0 {
            return LevelPlan::Exact(Estimate::Value(sample.min()));
        }
        if p >= 1.0 {
            return LevelPlan::Exact(Estimate::Value(sample.max()));
        }
        LevelPlan::Weighted(Type7Params {
            n: n_eff,
            h: p * (n_eff - 1.0) + 1.0,
        })
    }

    fn cdf(&self, params: &Type7Params, x: f64) -> f64 {
        let Type7Params { n, h } = *params;
        let u = ((h - 1.0) / n).max((h / n).min(x));
        u * n - h + 1.0
    }
}

/// Weighted Type-7 quantile estimator
pub type Type7 = CdfWeightedEstimator<Type7Cdf>;

/// Convenience constructor for the Type-7 estimator
pub fn type7() -> Type7 {
    Type7::new(Type7Cdf)
}
