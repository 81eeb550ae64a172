//! Shared benchmark utilities.
//!
//! Seeding helpers for the random source threaded through every benchmark
//! run. Runs are not reproducible unless a seed is given explicitly.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Build the benchmark RNG, falling back to a time-based seed.
///
/// Returns the seed actually used so callers can log it for reruns.
pub fn seeded_rng(seed: Option<u64>) -> (u64, StdRng) {
    let seed = seed.unwrap_or_else(time_seed);
    (seed, StdRng::seed_from_u64(seed))
}
