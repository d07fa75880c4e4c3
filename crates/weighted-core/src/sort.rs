//! Adaptive sorting of observations by value
//!
//! Three strategies are available and the cheapest one is picked from the
//! sample size and a one-pass summary of the values:
//!
//! | Strategy | Used when | Cost |
//! |----------|-----------|------|
//! | Comparison | fewer than 32 observations | `O(m log m)` |
//! | Counting | integer values, range in `(0, 1000]`, more than 100 observations | `O(m + range)` |
//! | Radix | everything else (comparison below 256 observations) | `O(8m)` |
//!
//! Every strategy yields the same value order. Values must be finite; the
//! sparse sample builder rejects NaN and infinities before they get here.

use crate::sparse::Observation;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

const SIGN_BIT: u64 = 0x8000_0000_0000_0000;
const RADIX_BUCKETS: usize = 256;

/// Sorting algorithm chosen for a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortStrategy {
    Comparison,
    Counting,
    Radix,
}

/// Thresholds for strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Samples shorter than this always use the comparison sort
    pub comparison_max_len: usize,
    /// Minimum sample length for counting sort
    pub counting_min_len: usize,
    /// Largest `max - min` range handled by counting sort
    pub counting_max_range: f64,
    /// Radix sort hands samples shorter than this to the comparison sort
    pub radix_min_len: usize,
    /// Radix buckets shorter than this are finished with the comparison sort
    pub radix_small_bucket: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            comparison_max_len: 32,
            counting_min_len: 101,
            counting_max_range: 1000.0,
            radix_min_len: 256,
            radix_small_bucket: 32,
        }
    }
}

/// One-pass summary of the values used to pick a strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueProfile {
    pub min: f64,
    pub max: f64,
    pub all_integer: bool,
}

impl ValueProfile {
    /// Summarize the values, `None` for an empty slice
    pub fn scan(observations: &[Observation]) -> Option<Self> {
        let first = observations.first()?.value;
        let mut profile = Self {
            min: first,
            max: first,
            all_integer: true,
        };
        for o in observations {
            profile.min = profile.min.min(o.value);
            profile.max = profile.max.max(o.value);
            if o.value.fract() != 0.0 {
                profile.all_integer = false;
            }
        }
        Some(profile)
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Pick the strategy for a sample of `len` observations
///
/// `profile` is only consulted once the sample is too long for the
/// comparison sort.
pub fn select_strategy(
    len: usize,
    profile: Option<&ValueProfile>,
    config: &SortConfig,
) -> SortStrategy {
    if len < config.comparison_max_len {
        return SortStrategy::Comparison;
    }
    match profile {
        Some(p)
            if p.all_integer
                && p.range() > 0.0
                && p.range() <= config.counting_max_range
                && len >= config.counting_min_len =>
        {
            SortStrategy::Counting
        }
        _ => SortStrategy::Radix,
    }
}

/// Sort observations by value in place with the default policy
pub fn sort_observations(observations: &mut [Observation]) {
    sort_observations_with(observations, &SortConfig::default());
}

/// Sort observations by value in place with an explicit policy
pub fn sort_observations_with(observations: &mut [Observation], config: &SortConfig) {
    let len = observations.len();
    if len <= 1 {
        return;
    }
    let profile = if len < config.comparison_max_len {
        None
    } else {
        ValueProfile::scan(observations)
    };
    let strategy = select_strategy(len, profile.as_ref(), config);
    trace!(len, ?strategy, "sorting observations");
    run_strategy(observations, strategy, profile.as_ref(), config);
}

/// Sort with a forced strategy
///
/// Counting sort still falls back to radix when the values are not a
/// bounded integer range.
pub fn sort_with_strategy(
    observations: &mut [Observation],
    strategy: SortStrategy,
    config: &SortConfig,
) {
    if observations.len() <= 1 {
        return;
    }
    let profile = ValueProfile::scan(observations);
    run_strategy(observations, strategy, profile.as_ref(), config);
}

fn run_strategy(
    observations: &mut [Observation],
    strategy: SortStrategy,
    profile: Option<&ValueProfile>,
    config: &SortConfig,
) {
    match strategy {
        SortStrategy::Comparison => comparison_sort(observations),
        SortStrategy::Counting => {
            let sorted = profile.is_some_and(|p| counting_sort(observations, p, config));
            if !sorted {
                debug!(
                    len = observations.len(),
                    "counting sort not applicable, falling back to radix sort"
                );
                radix_sort(observations, config);
            }
        }
        SortStrategy::Radix => radix_sort(observations, config),
    }
}

/// General-purpose unstable comparison sort
pub fn comparison_sort(observations: &mut [Observation]) {
    observations.sort_unstable_by_key(|o| OrderedFloat(o.value));
}

/// Counting sort over the integer range `[min, max]`
///
/// Returns `false` without touching the slice when the values do not form a
/// bounded integer range or a bucket index lands outside it.
fn counting_sort(
    observations: &mut [Observation],
    profile: &ValueProfile,
    config: &SortConfig,
) -> bool {
    let range = profile.range();
    if !profile.all_integer || range <= 0.0 || range > config.counting_max_range {
        return false;
    }
    let bucket_count = range as usize + 1;

    let mut buckets = Vec::with_capacity(observations.len());
    let mut counts = vec![0usize; bucket_count];
    for o in observations.iter() {
        let offset = o.value - profile.min;
        if !(0.0..=range).contains(&offset) {
            return false;
        }
        let bucket = offset as usize;
        if bucket >= bucket_count {
            return false;
        }
        counts[bucket] += 1;
        buckets.push(bucket);
    }

    let mut next = Vec::with_capacity(bucket_count);
    let mut running = 0;
    for &count in &counts {
        next.push(running);
        running += count;
    }

    let mut sorted = observations.to_vec();
    for (o, &bucket) in observations.iter().zip(&buckets) {
        sorted[next[bucket]] = *o;
        next[bucket] += 1;
    }
    observations.copy_from_slice(&sorted);
    true
}

/// Map a double onto a `u64` whose unsigned order matches numeric order
///
/// Negative values have every bit complemented so larger magnitudes sort
/// first; non-negative values get the sign bit set so they sort after all
/// negatives.
///
/// # Examples
///
/// ```
/// use weighted_core::sort::radix_key;
///
/// assert!(radix_key(-2.0) < radix_key(-1.0));
/// assert!(radix_key(-1.0) < radix_key(0.0));
/// assert!(radix_key(0.0) < radix_key(f64::MIN_POSITIVE));
/// ```
#[inline]
pub fn radix_key(value: f64) -> u64 {
    let bits = value.to_bits();
    if bits & SIGN_BIT != 0 {
        !bits
    } else {
        bits | SIGN_BIT
    }
}

/// Byte-wise radix sort over the IEEE-754 key, most significant byte first
fn radix_sort(observations: &mut [Observation], config: &SortConfig) {
    if observations.len() < config.radix_min_len {
        comparison_sort(observations);
        return;
    }

    let mut keyed: Vec<(u64, Observation)> = observations
        .iter()
        .map(|o| (radix_key(o.value), *o))
        .collect();
    let mut scratch = keyed.clone();
    radix_pass(&mut keyed, &mut scratch, 7, config.radix_small_bucket.max(2));

    for (dst, (_, o)) in observations.iter_mut().zip(keyed) {
        *dst = o;
    }
}

/// Distribute `keyed` by byte `byte` of the key, then refine each bucket on
/// the next lower byte
fn radix_pass(
    keyed: &mut [(u64, Observation)],
    scratch: &mut [(u64, Observation)],
    byte: u32,
    small_bucket: usize,
) {
    let shift = byte * 8;
    let digit = |key: u64| ((key >> shift) & 0xFF) as usize;

    let mut counts = [0usize; RADIX_BUCKETS];
    for &(key, _) in keyed.iter() {
        counts[digit(key)] += 1;
    }

    let mut starts = [0usize; RADIX_BUCKETS];
    let mut running = 0;
    for (start, &count) in starts.iter_mut().zip(counts.iter()) {
        *start = running;
        running += count;
    }

    let mut next = starts;
    for item in keyed.iter() {
        let d = digit(item.0);
        scratch[next[d]] = *item;
        next[d] += 1;
    }
    keyed.copy_from_slice(scratch);

    if byte == 0 {
        return;
    }
    for (&start, &count) in starts.iter().zip(counts.iter()) {
        if count <= 1 {
            continue;
        }
        let end = start + count;
        if count < small_bucket {
            keyed[start..end].sort_unstable_by_key(|&(key, _)| key);
        } else {
            radix_pass(
                &mut keyed[start..end],
                &mut scratch[start..end],
                byte - 1,
                small_bucket,
            );
        }
    }
}
