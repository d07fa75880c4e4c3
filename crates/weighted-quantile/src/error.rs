//! Error types for quantile estimation

use thiserror::Error;

/// Errors that can occur during quantile estimation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid quantile probability
    #[error("Quantile probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// Invalid values or weights
    #[error(transparent)]
    Core(#[from] weighted_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check if probability is valid
    ///
    /// NaN fails the range check and is rejected too.
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }

    /// Check every requested level before any work is done
    pub fn check_probabilities(levels: &[f64]) -> Result<()> {
        levels.iter().try_for_each(|&p| Self::check_probability(p))
    }
}
