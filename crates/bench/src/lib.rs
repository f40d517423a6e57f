use std::ops::RangeInclusive;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn random_values<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: RangeInclusive<i64>,
) -> Vec<i64> {
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        values.push(rng.random_range(range.clone()));
    }
    values
}

/// `n` strings of `len` letters from `a..=z`.
pub fn random_lowercase_strings<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    len: usize,
) -> Vec<String> {
    (0..n)
        .map(|_| (0..len).map(|_| rng.random_range(b'a'..=b'z') as char).collect())
        .collect()
}

/// `m` inclusive intervals `(lo, hi)` with `lo <= hi < n`.
pub fn random_intervals<R: Rng + ?Sized>(rng: &mut R, n: usize, m: usize) -> Vec<(usize, usize)> {
    assert!(n > 0, "no interval fits in an empty sequence");
    let mut queries = Vec::with_capacity(m);
    for _ in 0..m {
        let lo = rng.random_range(0..n);
        let hi = rng.random_range(lo..n);
        queries.push((lo, hi));
    }
    queries
}

/// `m` inclusive intervals that all contain `index`.
pub fn random_intervals_containing<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    m: usize,
    index: usize,
) -> Vec<(usize, usize)> {
    assert!(index < n, "index {index} out of bounds for length {n}");
    (0..m)
        .map(|_| (rng.random_range(0..=index), rng.random_range(index..n)))
        .collect()
}
