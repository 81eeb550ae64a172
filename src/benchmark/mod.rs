//! # Allocation Benchmarks
//!
//! A benchmark times the same randomized reallocation loop twice, once over
//! [`RealBuffer`](crate::buffer::RealBuffer)s and once over
//! [`FakeBuffer`](crate::buffer::FakeBuffer)s, and reports the difference.
//! Subtracting the fake pass strips the loop, dispatch and random number
//! costs shared by both passes, leaving the allocator's share.

mod standard;

pub use standard::StandardBenchmark;

use rand::RngCore;

/// First line of every benchmark description.
pub const BENCHMARK_HEADER: &str = "Benchmark info:\n";

/// Outcome of one benchmark run.
///
/// Elapsed time is kept as the raw seconds / nanoseconds differences of the
/// two passes. `elapsed_nanoseconds` is not normalized and may be negative.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub allocation_count: u64,
    pub elapsed_seconds: i64,
    pub elapsed_nanoseconds: i64,
    pub description: String,
}

impl Report {
    /// Elapsed time folded into a single nanosecond count.
    pub fn total_nanoseconds(&self) -> i64 {
        self.elapsed_seconds * 1_000_000_000 + self.elapsed_nanoseconds
    }

    /// Raw nanosecond delta per allocation, 0 when nothing was allocated.
    pub fn nanoseconds_per_allocation(&self) -> i64 {
        if self.allocation_count == 0 {
            return 0;
        }
        self.elapsed_nanoseconds / self.allocation_count as i64
    }
}

/// Timing of a single pass over one buffer kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassTiming {
    pub operations: u64,
    pub seconds: i64,
    pub nanoseconds: i64,
}

/// Trait that all allocation benchmarks must implement
pub trait Benchmark {
    /// Run the real and fake passes and report their difference.
    fn result(&self, rng: &mut dyn RngCore) -> Report;

    /// Human-readable description, newline terminated.
    fn info(&self) -> String {
        BENCHMARK_HEADER.to_string()
    }
}
