//! Naive reference implementations of the weighted quantile estimators
//!
//! These implementations are intentionally simple and unoptimized. They
//! materialize the implicit zero as an ordinary dense entry, argsort the
//! values, and evaluate every CDF with `statrs`.
//!
//! DO NOT USE IN PRODUCTION - these are for testing and debugging only!

#![allow(dead_code)]

use statrs::distribution::{Beta, ContinuousCDF};

/// Append a zero carrying the missing mass when weights sum below one
pub fn add_missing_zeroes(values: &[f64], weights: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut values = values.to_vec();
    let mut weights = weights.to_vec();
    let sum: f64 = weights.iter().sum();
    if sum < 1.0 {
        values.push(0.0);
        weights.push(1.0 - sum);
    }
    (values, weights)
}

/// Indices that sort `values` ascending
pub fn argsort(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap());
    order
}

fn sorted_dense(values: &[f64], weights: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let (values, weights) = add_missing_zeroes(values, weights);
    let order = argsort(&values);
    (
        order.iter().map(|&i| values[i]).collect(),
        order.iter().map(|&i| weights[i]).collect(),
    )
}

/// Piecewise-linear interpolation of `x` over increasing knots `xp`
///
/// Below the first knot returns `fp[0]`, above the last returns the last
/// value, like `numpy.interp`.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let last = xp.len() - 1;
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[last] {
        return fp[last];
    }
    let mut j = 1;
    while xp[j] < x {
        j += 1;
    }
    if xp[j] == xp[j - 1] {
        return fp[j];
    }
    fp[j - 1] + (x - xp[j - 1]) / (xp[j] - xp[j - 1]) * (fp[j] - fp[j - 1])
}

/// Empirical-CDF quantile: interpolate the level on the cumulative weights
pub fn naive_empirical(values: &[f64], weights: &[f64], p: f64) -> f64 {
    let (values, weights) = sorted_dense(values, weights);
    let total: f64 = weights.iter().sum();
    if p <= 0.0 {
        return values[0];
    }
    if p >= 1.0 {
        return values[values.len() - 1];
    }
    let mut running = 0.0;
    let cumulative: Vec<f64> = weights
        .iter()
        .map(|w| {
            running += w;
            running
        })
        .collect();
    interp(p * total, &cumulative, &values)
}

/// Generic CDF-weighted quantile with a caller-provided level CDF
///
/// `cdf_gen(n_eff, p)` returns the CDF used to weight the order statistics.
pub fn naive_cdf_weighted<F, G>(values: &[f64], weights: &[f64], p: f64, cdf_gen: G) -> f64
where
    G: Fn(f64, f64) -> F,
    F: Fn(f64) -> f64,
{
    let (values, weights) = sorted_dense(values, weights);
    let total: f64 = weights.iter().sum();
    let sum_sq: f64 = weights.iter().map(|w| w * w).sum();
    let n_eff = total * total / sum_sq;

    let mut probs = vec![0.0];
    let mut running = 0.0;
    for w in &weights {
        running += w / total;
        probs.push(running);
    }

    let cdf = cdf_gen(n_eff, p);
    let q: Vec<f64> = probs.iter().map(|&x| cdf(x)).collect();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (q[i + 1] - q[i]) * v)
        .sum()
}

/// Type-7 quantile through the generic framework
pub fn naive_type7(values: &[f64], weights: &[f64], p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        let (values, _) = sorted_dense(values, weights);
        return if p <= 0.0 { values[0] } else { values[values.len() - 1] };
    }
    naive_cdf_weighted(values, weights, p, |n, p| {
        let h = p * (n - 1.0) + 1.0;
        move |x: f64| {
            let u = ((h - 1.0) / n).max((h / n).min(x));
            u * n - h + 1.0
        }
    })
}

/// Harrell-Davis quantile through the generic framework, `None` when undefined
pub fn naive_harrell_davis(values: &[f64], weights: &[f64], p: f64) -> Option<f64> {
    let (dense, _) = sorted_dense(values, weights);
    if p <= 0.0 || p >= 1.0 || dense.len() <= 1 {
        return None;
    }
    let result = naive_cdf_weighted(values, weights, p, |n, p| {
        let beta = Beta::new((n + 1.0) * p, (n + 1.0) * (1.0 - p)).ok();
        move |x: f64| beta.as_ref().map_or(f64::NAN, |b| b.cdf(x.clamp(0.0, 1.0)))
    });
    Some(result).filter(|r| !r.is_nan())
}
