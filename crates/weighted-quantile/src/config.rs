//! Runtime selection of a quantile estimator

use crate::estimators::{harrell_davis, type7, Empirical};
use crate::WeightedQuantileEstimator;
use serde::{Deserialize, Serialize};
use weighted_core::{Estimate, SortedSample};

/// Weighted quantile definition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantileMethod {
    /// Linear interpolation on the weighted empirical CDF
    Empirical,
    /// Weighted Hyndman-Fan Type-7
    Type7,
    /// Weighted Harrell-Davis
    #[default]
    HarrellDavis,
}

impl QuantileMethod {
    /// All methods, in a stable order
    pub const ALL: [QuantileMethod; 3] = [
        QuantileMethod::Empirical,
        QuantileMethod::Type7,
        QuantileMethod::HarrellDavis,
    ];

    /// Boxed estimator for this method
    pub fn estimator(self) -> Box<dyn WeightedQuantileEstimator + Send + Sync> {
        match self {
            QuantileMethod::Empirical => Box::new(Empirical),
            QuantileMethod::Type7 => Box::new(type7()),
            QuantileMethod::HarrellDavis => Box::new(harrell_davis()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            QuantileMethod::Empirical => "empirical",
            QuantileMethod::Type7 => "type7",
            QuantileMethod::HarrellDavis => "harrell_davis",
        }
    }
}

impl WeightedQuantileEstimator for QuantileMethod {
    fn name(&self) -> &'static str {
        QuantileMethod::name(*self)
    }

    fn quantiles_sorted(&self, sample: &SortedSample, levels: &[f64]) -> Vec<Estimate> {
        match self {
            QuantileMethod::Empirical => Empirical.quantiles_sorted(sample, levels),
            QuantileMethod::Type7 => type7().quantiles_sorted(sample, levels),
            QuantileMethod::HarrellDavis => harrell_davis().quantiles_sorted(sample, levels),
        }
    }
}
