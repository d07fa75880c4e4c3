//! Outcome of a single statistic
//!
//! A computation either produces a number or is *undefined* for the given
//! sample. Undefined is a first-class result, distinct from both `0.0` and
//! from a hard [`crate::Error`], so that hosts can surface it as their own
//! null/undefined marker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a statistic has no defined value for a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Undefined {
    /// Sample variance requested with `ddof >= n_eff`
    InsufficientEffectiveSize { n_eff: f64, ddof: u32 },
    /// Harrell-Davis level at a boundary or over a degenerate sample
    DegenerateLevel { p: f64 },
    /// The Beta continued fraction did not converge within its term budget
    NonConvergence { p: f64 },
}

impl fmt::Display for Undefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Undefined::InsufficientEffectiveSize { n_eff, ddof } => write!(
                f,
                "effective sample size {n_eff} does not exceed ddof {ddof}"
            ),
            Undefined::DegenerateLevel { p } => {
                write!(f, "quantile level {p} is degenerate for this sample")
            }
            Undefined::NonConvergence { p } => {
                write!(f, "beta CDF did not converge for quantile level {p}")
            }
        }
    }
}

/// A statistic that may be undefined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Estimate {
    Value(f64),
    Undefined(Undefined),
}

impl Estimate {
    /// The numeric value, if defined
    pub fn value(&self) -> Option<f64> {
        match *self {
            Estimate::Value(v) => Some(v),
            Estimate::Undefined(_) => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Estimate::Value(_))
    }

    /// The reason this estimate is undefined, if it is
    pub fn undefined_reason(&self) -> Option<Undefined> {
        match *self {
            Estimate::Value(_) => None,
            Estimate::Undefined(reason) => Some(reason),
        }
    }

    /// Apply `f` to a defined value; undefined estimates pass through
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Estimate {
        match self {
            Estimate::Value(v) => Estimate::Value(f(v)),
            undefined => undefined,
        }
    }

    /// Collapse to `f64` for hosts that transport "undefined" as NaN
    pub fn to_f64_or_nan(&self) -> f64 {
        self.value().unwrap_or(f64::NAN)
    }
}

impl From<f64> for Estimate {
    fn from(value: f64) -> Self {
        Estimate::Value(value)
    }
}

impl From<Undefined> for Estimate {
    fn from(reason: Undefined) -> Self {
        Estimate::Undefined(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_is_not_zero() {
        let undefined = Estimate::Undefined(Undefined::DegenerateLevel { p: 0.0 });
        assert_eq!(undefined.value(), None);
        assert!(!undefined.is_defined());
        assert!(undefined.to_f64_or_nan().is_nan());
        assert_ne!(undefined, Estimate::Value(0.0));
    }

    #[test]
    fn test_map_passes_undefined_through() {
        let reason = Undefined::InsufficientEffectiveSize { n_eff: 1.0, ddof: 1 };
        let mapped = Estimate::Undefined(reason).map(f64::sqrt);
        assert_eq!(mapped.undefined_reason(), Some(reason));

        assert_eq!(Estimate::Value(16.0).map(f64::sqrt), Estimate::Value(4.0));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&Estimate::Value(2.5)).unwrap();
        assert_eq!(json, r#"{"value":2.5}"#);

        let json =
            serde_json::to_string(&Estimate::Undefined(Undefined::NonConvergence { p: 0.5 }))
                .unwrap();
        assert_eq!(json, r#"{"undefined":{"reason":"non_convergence","p":0.5}}"#);
    }

    #[test]
    fn test_display() {
        let reason = Undefined::InsufficientEffectiveSize { n_eff: 1.5, ddof: 2 };
        assert_eq!(
            reason.to_string(),
            "effective sample size 1.5 does not exceed ddof 2"
        );
    }
}
