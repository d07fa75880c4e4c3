//! Weighted spread measurements for sparse samples
//!
//! This crate provides the weighted mean, variance and standard deviation.
//! Weights that sum to less than one describe a sparse sample: the missing
//! mass belongs to an implicit zero observation.
//!
//! # Outcomes
//!
//! | Call | Defined when |
//! |------|--------------|
//! | mean | always |
//! | variance, `ddof = 0` | always |
//! | variance, `ddof > 0` | effective sample size exceeds `ddof` |
//! | std | whenever the variance is |
//!
//! A negative `ddof` or malformed input is a hard [`Error`].
//!
//! # Examples
//!
//! ```rust
//! use weighted_spread::{weighted_mean, weighted_variance};
//!
//! // 0.6 of the mass sits on the implicit zero
//! let mean = weighted_mean(&[10.0], &[0.4])?;
//! assert!((mean - 4.0).abs() < 1e-12);
//!
//! let variance = weighted_variance(&[10.0], &[0.4], 0)?;
//! assert!((variance.value().unwrap() - 24.0).abs() < 1e-9);
//! # Ok::<(), weighted_spread::Error>(())
//! ```

pub mod moments;

pub use moments::{weighted_mean, weighted_moments, weighted_std, weighted_variance, WeightedMoments};
pub use weighted_core::{Error, Estimate, Result, Undefined};
