//! Random allocate/deallocate over a fixed pool of buffers.

use super::{Benchmark, PassTiming, Report, BENCHMARK_HEADER};
use crate::buffer::{FakeBuffer, RealBuffer, TestBuffer};
use crate::distribution::SizeDistribution;
use crate::error::{ConfigError, ConfigResult};
use crate::utils::Clock;
use rand::{Rng, RngCore};
use tracing::trace;

/// Each operation reallocates a uniformly random slot of the pool with a
/// fresh size from the distribution.
#[derive(Debug)]
pub struct StandardBenchmark<D> {
    buffers: usize,
    allocations: u64,
    distribution: D,
}

impl<D: SizeDistribution> StandardBenchmark<D> {
    /// A pool of `buffers` slots driven by `allocations` operations per pass.
    pub fn new(buffers: usize, allocations: u64, distribution: D) -> ConfigResult<Self> {
        if buffers == 0 {
            return Err(ConfigError::EmptyPool);
        }
        Ok(Self {
            buffers,
            allocations,
            distribution,
        })
    }

    /// Time one pass over a fresh pool of `B`.
    ///
    /// Only the operation loop is timed; building and dropping the pool
    /// happen outside the clock. Every slot still allocated is released
    /// before this returns.
    pub fn run_pass<B: TestBuffer>(&self, rng: &mut dyn RngCore) -> PassTiming {
        let mut pool: Vec<B> = (0..self.buffers).map(|_| B::default()).collect();

        let mut clock = Clock::new();
        clock.start();
        for _ in 0..self.allocations {
            let slot = rng.random_range(0..self.buffers);
            let size = self.distribution.next_size(rng);
            pool[slot].realloc(size);
        }
        clock.stop();

        drop(pool);

        let timing = PassTiming {
            operations: self.allocations,
            seconds: clock.elapsed_seconds(),
            nanoseconds: clock.elapsed_nanoseconds(),
        };
        trace!(
            kind = B::KIND,
            seconds = timing.seconds,
            nanoseconds = timing.nanoseconds,
            "pass finished"
        );
        timing
    }
}

impl<D: SizeDistribution> Benchmark for StandardBenchmark<D> {
    fn result(&self, rng: &mut dyn RngCore) -> Report {
        // Real pass runs to completion, pool teardown included, before the fake one
        let real = self.run_pass::<RealBuffer>(rng);
        let fake = self.run_pass::<FakeBuffer>(rng);

        Report {
            allocation_count: real.operations,
            elapsed_seconds: real.seconds - fake.seconds,
            elapsed_nanoseconds: real.nanoseconds - fake.nanoseconds,
            description: self.distribution.describe() + &self.info(),
        }
    }

    fn info(&self) -> String {
        format!(
            "{}Standard benchmark with random buffer allocate/deallocate.\n",
            BENCHMARK_HEADER
        )
    }
}
