//! Allocation overhead benchmark.
//!
//! Usage:
//!   alloc-bench                          # 10 runs, 1000 buffers, 100000 operations
//!   alloc-bench --distribution byte      # Only byte-sized requests
//!   alloc-bench --seed 12345             # Reproducible size and slot draws
//!   RUST_LOG=debug alloc-bench           # Diagnostics on stderr

use alloc_overhead_bench::distribution::DistributionKind;
use alloc_overhead_bench::reporter::StdioReporter;
use alloc_overhead_bench::utils::logging::{init_logging, LogConfig};
use alloc_overhead_bench::utils::seeded_rng;
use alloc_overhead_bench::{Driver, DriverConfig};
use clap::Parser;
use tracing::debug;

/// Measure heap allocation cost against a no-op buffer baseline
#[derive(Parser, Debug)]
#[command(name = "alloc-bench", version)]
struct Options {
    /// Number of benchmark runs to average over
    #[arg(long, default_value_t = 10)]
    runs: usize,

    /// Buffer slots in each pass's pool
    #[arg(long, default_value_t = 1000)]
    buffers: usize,

    /// Reallocation operations per pass
    #[arg(long, default_value_t = 100_000)]
    allocations: u64,

    /// Distribution of requested buffer sizes
    #[arg(long, value_enum, default_value_t = DistributionKind::Equal)]
    distribution: DistributionKind,

    /// Random seed for reproducible runs (default: time-based)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let opts = Options::parse();
    init_logging(LogConfig::new());

    let config = DriverConfig {
        runs: opts.runs,
        buffers: opts.buffers,
        allocations: opts.allocations,
        distribution: opts.distribution,
    };
    let driver = Driver::new(config)?;

    let (seed, mut rng) = seeded_rng(opts.seed);
    debug!(seed, ?config, "starting allocation benchmark");

    let mut reporter = StdioReporter::stdout();
    driver.run(&mut rng, &mut reporter)?;
    Ok(())
}
