//! Repeated benchmark runs and the grand average.

use crate::benchmark::{Benchmark, Report, StandardBenchmark};
use crate::distribution::DistributionKind;
use crate::error::{ConfigError, ConfigResult};
use crate::reporter::Reporter;
use rand::RngCore;
use tracing::debug;

/// Configuration for a full driver run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Number of benchmark runs (default: 10)
    pub runs: usize,
    /// Buffer pool size per pass (default: 1000)
    pub buffers: usize,
    /// Reallocation operations per pass (default: 100000)
    pub allocations: u64,
    /// Size distribution rebuilt for every run (default: Equal)
    pub distribution: DistributionKind,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            runs: 10,
            buffers: 1000,
            allocations: 100_000,
            distribution: DistributionKind::Equal,
        }
    }
}

impl DriverConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.runs == 0 {
            return Err(ConfigError::NoRuns);
        }
        if self.buffers == 0 {
            return Err(ConfigError::EmptyPool);
        }
        Ok(())
    }
}

/// Everything a driver run produced.
#[derive(Clone, Debug)]
pub struct Summary {
    pub reports: Vec<Report>,
    /// Mean of the per-run raw nanoseconds per allocation
    pub average_nanos_per_alloc: i64,
}

/// Runs the standard benchmark repeatedly and averages the results.
#[derive(Clone, Debug)]
pub struct Driver {
    config: DriverConfig,
}

impl Driver {
    pub fn new(config: DriverConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run every benchmark, printing each report as it completes and the
    /// average at the end.
    pub fn run<R: Reporter>(
        &self,
        rng: &mut dyn RngCore,
        reporter: &mut R,
    ) -> ConfigResult<Summary> {
        let mut total_nanos_per_alloc: i64 = 0;
        let mut reports = Vec::with_capacity(self.config.runs);

        for run in 0..self.config.runs {
            let bench = StandardBenchmark::new(
                self.config.buffers,
                self.config.allocations,
                self.config.distribution.build(),
            )?;
            let report = bench.result(rng);
            debug!(
                run,
                seconds = report.elapsed_seconds,
                nanoseconds = report.elapsed_nanoseconds,
                "benchmark run finished"
            );

            total_nanos_per_alloc += report.nanoseconds_per_allocation();
            reporter.report(&report);
            reports.push(report);
        }

        let average_nanos_per_alloc = total_nanos_per_alloc / self.config.runs as i64;
        reporter.summary(average_nanos_per_alloc);

        Ok(Summary {
            reports,
            average_nanos_per_alloc,
        })
    }
}
