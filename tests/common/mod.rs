//! Shared utilities for end-to-end tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

/// Install a test subscriber once; filter with `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Sparse sample with `n` explicit values carrying `mass` in total
pub fn sparse_sample(n: usize, mass: f64, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = (0..n).map(|_| rng.gen_range(-50.0..150.0)).collect();
    let raw: Vec<f64> = (0..n).map(|_| rng.gen_range(0.01..1.0)).collect();
    let total: f64 = raw.iter().sum();
    let weights = raw.iter().map(|w| w / total * mass).collect();
    (values, weights)
}
