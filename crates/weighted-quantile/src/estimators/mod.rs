//! Concrete weighted quantile estimators

// Shared CDF-weighted implementation
mod generic;

mod empirical;
mod harrell_davis;
mod type7;

pub use empirical::Empirical;
pub use generic::{CdfWeightedEstimator, LevelCdf, LevelPlan};
pub use harrell_davis::{harrell_davis, BetaLevelCdf, BetaShape, HarrellDavis};
pub use type7::{type7, Type7, Type7Cdf, Type7Params};
