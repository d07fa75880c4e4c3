//! Weighted mean, variance and standard deviation
//!
//! Moments do not depend on observation order, so the sample is never
//! sorted. The implicit zero contributes weight to the denominator and its
//! squared deviation `mean²` to the variance, but nothing to the numerator
//! of the mean.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use weighted_core::{Error, Estimate, Result, Undefined, WeightedSample};

/// First and second moments of one completed sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedMoments {
    pub mean: f64,
    pub variance: Estimate,
    pub std_dev: Estimate,
    /// Kish effective sample size of the completed sample
    pub effective_sample_size: f64,
    pub total_weight: f64,
    /// Mass placed on the implicit zero (0 when the weights reach one)
    pub implicit_weight: f64,
    pub ddof: u32,
}

impl WeightedMoments {
    /// Compute every moment of an already validated sample
    pub fn from_sample(sample: &WeightedSample, ddof: u32) -> Self {
        let mean = mean_of(sample);
        let n_eff = sample.effective_sample_size();
        let variance = variance_of(sample, mean, n_eff, ddof);
        Self {
            mean,
            variance,
            std_dev: variance.map(f64::sqrt),
            effective_sample_size: n_eff,
            total_weight: sample.total_weight(),
            implicit_weight: sample.implicit_weight(),
            ddof,
        }
    }
}

fn mean_of(sample: &WeightedSample) -> f64 {
    let weighted_sum: f64 = sample
        .observations()
        .iter()
        .map(|o| o.weight * o.value)
        .sum();
    weighted_sum / sample.total_weight()
}

fn variance_of(sample: &WeightedSample, mean: f64, n_eff: f64, ddof: u32) -> Estimate {
    let total = sample.total_weight();
    let squared_deviations: f64 = sample
        .observations()
        .iter()
        .map(|o| o.weight * (o.value - mean).powi(2))
        .sum();
    let population = squared_deviations / total;

    if ddof == 0 {
        return Estimate::Value(population);
    }

    let ddof_f = f64::from(ddof);
    if n_eff <= ddof_f {
        debug!(n_eff, ddof, "effective sample size too small for sample variance");
        return Estimate::Undefined(Undefined::InsufficientEffectiveSize { n_eff, ddof });
    }
    Estimate::Value(population * n_eff / (n_eff - ddof_f))
}

fn check_ddof(ddof: i32) -> Result<u32> {
    u32::try_from(ddof).map_err(|_| Error::negative_ddof(ddof))
}

/// Validate the inputs and compute every moment in one pass over the sample
#[instrument(skip(values, weights), fields(len = values.len()))]
pub fn weighted_moments(values: &[f64], weights: &[f64], ddof: i32) -> Result<WeightedMoments> {
    let ddof = check_ddof(ddof)?;
    let sample = WeightedSample::from_slices(values, weights)?;
    Ok(WeightedMoments::from_sample(&sample, ddof))
}

/// Weighted mean; always defined
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Result<f64> {
    let sample = WeightedSample::from_slices(values, weights)?;
    Ok(mean_of(&sample))
}

/// Weighted variance with `ddof` delta degrees of freedom
///
/// `ddof = 0` gives the population variance. A positive `ddof` applies the
/// Bessel-style correction through the effective sample size and is
/// undefined when `n_eff <= ddof`.
pub fn weighted_variance(values: &[f64], weights: &[f64], ddof: i32) -> Result<Estimate> {
    weighted_moments(values, weights, ddof).map(|m| m.variance)
}

/// Square root of [`weighted_variance`], undefined whenever it is
pub fn weighted_std(values: &[f64], weights: &[f64], ddof: i32) -> Result<Estimate> {
    weighted_moments(values, weights, ddof).map(|m| m.std_dev)
}
