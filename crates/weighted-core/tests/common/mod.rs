//! Shared utilities for integration tests

#![allow(dead_code)]

use weighted_core::Observation;

/// Sample lengths around every sort strategy threshold
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        0,    // Empty
        1,    // Single element
        2,    // Smallest sortable
        31,   // Last comparison-only length
        32,   // First profiled length
        100,  // Last length too short for counting sort
        101,  // First counting sort length
        255,  // Radix hands off to comparison sort
        256,  // First full radix length
        257,  // Full radix + 1
        1024, // Power of 2
        4099, // Prime, several radix levels
    ]
}

/// Special floating-point values for edge case testing
pub fn special_values() -> Vec<f64> {
    vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        f64::MIN,
        f64::MAX,
        f64::MIN_POSITIVE,
        -f64::MIN_POSITIVE,
        f64::EPSILON,
        -f64::EPSILON,
        std::f64::consts::PI,
        std::f64::consts::E,
        1e-310, // Subnormal
        -1e-310,
        1e308, // Near overflow
    ]
}

/// Values in a deterministic scrambled order
pub fn generate_test_data(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| ((i * 7919) % len.max(1)) as f64 * 0.5 - len as f64 * 0.25 + 0.1)
        .collect()
}

/// Integer values inside a narrow range, suitable for counting sort
pub fn generate_integer_data(len: usize) -> Vec<f64> {
    (0..len).map(|i| ((i * 37) % 400) as f64 - 200.0).collect()
}

pub fn to_observations(values: &[f64]) -> Vec<Observation> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Observation::new(v, i as f64 + 1.0))
        .collect()
}

/// Assert observations are in non-decreasing value order
pub fn assert_sorted(observations: &[Observation], context: &str) {
    for (i, pair) in observations.windows(2).enumerate() {
        assert!(
            pair[0].value <= pair[1].value,
            "{context}: out of order at {i}: {} > {}",
            pair[0].value,
            pair[1].value
        );
    }
}

/// Assert the sort kept every (value, weight) pair, only reordered
pub fn assert_same_pairs(actual: &[Observation], original: &[Observation], context: &str) {
    let key = |o: &Observation| (o.value.to_bits(), o.weight.to_bits());
    let mut a: Vec<_> = actual.iter().map(key).collect();
    let mut b: Vec<_> = original.iter().map(key).collect();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b, "{context}: pairs changed during sort");
}
