//! Weighted descriptive statistics over sparse samples
//!
//! A sparse sample is a list of `(value, weight)` pairs whose weights sum to
//! at most one. The missing mass belongs to an implicit observation at zero,
//! so a handful of non-zero entries can stand in for a much larger dataset
//! that is mostly zeros.
//!
//! # Crates
//!
//! | Crate | Provides |
//! |-------|----------|
//! | [`weighted_core`] | sparse samples, adaptive sorting, the Beta CDF, outcome types |
//! | `weighted-quantile` | empirical, Type-7 and Harrell-Davis quantiles |
//! | [`weighted_spread`] | mean, variance and standard deviation |
//!
//! # Example
//!
//! ```rust
//! use weighted_stats::prelude::*;
//!
//! let values = [12.0, 3.0, 7.5];
//! let weights = [0.1, 0.2, 0.2];
//!
//! let mean = weighted_mean(&values, &weights)?;
//! assert!((mean - 3.3).abs() < 1e-12);
//!
//! let sd = weighted_std(&values, &weights, 1)?;
//! assert!(sd.is_defined());
//!
//! let median = whdquantile(&values, &weights, &[0.5])?;
//! println!("median: {:?}", median[0]);
//! # Ok::<(), anyhow::Error>(())
//! ```

// The quantile crate is not re-exported by name: it would collide with the
// `weighted_quantile` function.
pub use weighted_core;
pub use weighted_spread;

pub use ::weighted_core::{Estimate, Undefined, WeightedSample};
pub use ::weighted_quantile::{
    weighted_quantile, weighted_quantiles, whdquantile, wquantile, QuantileMethod,
    WeightedQuantileEstimator,
};
pub use ::weighted_spread::{
    weighted_mean, weighted_moments, weighted_std, weighted_variance, WeightedMoments,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        weighted_mean, weighted_moments, weighted_quantile, weighted_quantiles, weighted_std,
        weighted_variance, whdquantile, wquantile, Estimate, QuantileMethod, Undefined,
        WeightedMoments, WeightedQuantileEstimator, WeightedSample,
    };
}
