//! Weighted quantile estimation over sparse samples
//!
//! This crate provides three weighted quantile estimators. All of them treat
//! weights that sum to less than one as a sparse sample whose missing mass
//! sits on an implicit zero observation.
//!
//! # Features
//!
//! - **Empirical-CDF**: linear interpolation on the cumulative weights
//! - **Type-7**: the Hyndman-Fan definition generalized through the Kish
//!   effective sample size
//! - **Harrell-Davis**: Beta-weighted average of every order statistic
//! - **Multi-level**: every level of a call shares one sorted sample
//!
//! # Example
//!
//! ```rust
//! use weighted_quantile::{whdquantile, wquantile, weighted_quantile};
//!
//! let values = [4.0, 1.0, 7.0, 3.0];
//! let weights = [0.2, 0.1, 0.3, 0.2];
//!
//! let empirical = weighted_quantile(&values, &weights, &[0.5])?;
//! let type7 = wquantile(&values, &weights, &[0.5])?;
//! let hd = whdquantile(&values, &weights, &[0.5])?;
//!
//! assert_eq!(empirical.len(), 1);
//! assert!(type7[0] >= 0.0);
//! assert!(hd[0].is_defined());
//! # Ok::<(), weighted_quantile::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod estimators;
pub mod traits;

// Re-export main types
pub use config::QuantileMethod;
pub use error::{Error, Result};
pub use estimators::{
    harrell_davis, type7, CdfWeightedEstimator, Empirical, HarrellDavis, LevelCdf, Type7,
};
pub use traits::WeightedQuantileEstimator;
// Re-export from weighted-core
pub use weighted_core::{Estimate, Undefined};

/// Empirical-CDF quantiles, one per level
pub fn weighted_quantile(values: &[f64], weights: &[f64], levels: &[f64]) -> Result<Vec<f64>> {
    let estimates = Empirical.quantiles(values, weights, levels)?;
    Ok(estimates.iter().map(Estimate::to_f64_or_nan).collect())
}

/// Type-7 quantiles, one per level
pub fn wquantile(values: &[f64], weights: &[f64], levels: &[f64]) -> Result<Vec<f64>> {
    let estimates = type7().quantiles(values, weights, levels)?;
    Ok(estimates.iter().map(Estimate::to_f64_or_nan).collect())
}

/// Harrell-Davis quantiles, one per level
///
/// Levels at 0 or 1, and any level of a sample with a single observation,
/// are undefined.
pub fn whdquantile(values: &[f64], weights: &[f64], levels: &[f64]) -> Result<Vec<Estimate>> {
    harrell_davis().quantiles(values, weights, levels)
}

/// Quantiles with a runtime-selected method
pub fn weighted_quantiles(
    values: &[f64],
    weights: &[f64],
    levels: &[f64],
    method: QuantileMethod,
) -> Result<Vec<Estimate>> {
    method.quantiles(values, weights, levels)
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Empirical, Error, Estimate, HarrellDavis, QuantileMethod, Result, Type7,
        WeightedQuantileEstimator,
    };
}
