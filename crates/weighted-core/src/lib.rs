//! Core types for weighted statistics over sparse samples
//!
//! This crate provides the building blocks shared by the weighted estimator
//! crates:
//!
//! 1. **Sparse samples** - `(value, weight)` pairs whose weights may sum to
//!    less than one, completed by an implicit zero observation
//! 2. **Adaptive sorting** - comparison, counting or radix sort chosen from
//!    the shape of the data
//! 3. **Special functions** - the regularized incomplete Beta function
//! 4. **Outcomes** - hard [`Error`]s versus soft [`Estimate::Undefined`]
//!    results
//!
//! # Example
//!
//! ```rust
//! use weighted_core::WeightedSample;
//!
//! // Weights sum to 0.6, so a zero observation carries the remaining 0.4
//! let sample = WeightedSample::from_slices(&[3.0, -2.0, 7.0], &[0.2, 0.2, 0.2])?;
//! assert!(sample.has_implicit_zero());
//! assert!((sample.total_weight() - 1.0).abs() < 1e-12);
//!
//! let sorted = sample.into_sorted();
//! assert_eq!(sorted.min(), -2.0);
//! assert_eq!(sorted.max(), 7.0);
//! # Ok::<(), weighted_core::Error>(())
//! ```

pub mod error;
pub mod estimate;
pub mod math;
pub mod sort;
pub mod sparse;

// Re-export core types
pub use error::{Error, Result};
pub use estimate::{Estimate, Undefined};
pub use sort::{SortConfig, SortStrategy};
pub use sparse::{CumulativeWeightTable, Observation, ProbabilityGrid, SortedSample, WeightedSample};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CumulativeWeightTable, Estimate, Observation, ProbabilityGrid, Result, SortConfig,
        SortedSample, Undefined, WeightedSample,
    };

    pub use crate::error::Error;
}
