//! Error types for weighted statistical analysis
//!
//! Provides the hard-failure error type shared by all weighted-stats crates.
//! Conditions that make a *result* undefined (degenerate effective sample
//! size, non-converging special functions) are not errors; they are reported
//! through [`crate::Estimate::Undefined`].

use thiserror::Error;

/// Core error type for weighted statistical operations
///
/// Every variant aborts the whole call: no partial result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid input data or parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for size mismatch between values and weights
    pub fn size_mismatch(values: usize, weights: usize) -> Self {
        Self::InvalidInput(format!(
            "values and weights must have the same length: got {values} values and {weights} weights"
        ))
    }

    /// Create an error for a negative weight
    pub fn negative_weight(index: usize, weight: f64) -> Self {
        Self::InvalidInput(format!(
            "weights must be non-negative: weight {weight} at index {index}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str, index: usize) -> Self {
        Self::InvalidInput(format!(
            "{context} contains NaN or infinite value at index {index}"
        ))
    }

    /// Create an error for a negative delta degrees of freedom
    pub fn negative_ddof(ddof: i32) -> Self {
        Self::InvalidInput(format!("ddof must be non-negative, got {ddof}"))
    }
}
