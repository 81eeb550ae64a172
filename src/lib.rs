//! # Alloc-Overhead-Bench
//!
//! Measures what heap allocation costs on top of a plain reallocation loop.
//! Each run times a pool of real, heap-backed buffers and a pool of fake
//! ones driven by the same random operations, and reports the difference.

pub mod benchmark;
pub mod buffer;
pub mod distribution;
pub mod driver;
pub mod error;
pub mod reporter;
pub mod utils;

pub use driver::{Driver, DriverConfig, Summary};
pub use error::{ConfigError, ConfigResult};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::benchmark::{Benchmark, PassTiming, Report, StandardBenchmark};
    pub use crate::buffer::{FakeBuffer, RealBuffer, TestBuffer};
    pub use crate::distribution::{
        Byte, DistributionKind, Equal, Kilobyte, Megabyte, SizeDistribution,
    };
    pub use crate::driver::{Driver, DriverConfig};
    pub use crate::reporter::{Reporter, StdioReporter};
}
