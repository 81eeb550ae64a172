//! # Buffer Size Distributions
//!
//! Strategies that produce the size of each reallocation request. Every draw
//! is independent and comes from the random source passed in by the caller.
//!
//! The composite variants stack byte-sized draws rather than sampling the
//! whole range at once:
//!
//! - **Byte**: `b` in `[0, 1024)`
//! - **Kilobyte**: `b0 + b1 * 1024`
//! - **Megabyte**: `b * 1024 * 1024 + kilobyte`
//! - **Equal**: one of the three above, each with probability 1/3
//!
//! The result only roughly covers the advertised ranges; it is kept as is so
//! timings stay comparable between versions.

pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;

use rand::RngCore;

/// First line of every distribution description.
pub const DESCRIPTION_HEADER: &str = "Information about generator of buffer sizes:\n";

/// A generator of buffer sizes for reallocation requests.
pub trait SizeDistribution {
    /// Draw the next buffer size in bytes.
    fn next_size(&self, rng: &mut dyn RngCore) -> usize;

    /// One-line summary of the produced range.
    fn range_info(&self) -> &'static str;

    /// Header plus range summary, newline terminated.
    fn describe(&self) -> String {
        format!("{}{}\n", DESCRIPTION_HEADER, self.range_info())
    }
}

impl<D: SizeDistribution + ?Sized> SizeDistribution for Box<D> {
    fn next_size(&self, rng: &mut dyn RngCore) -> usize {
        (**self).next_size(rng)
    }

    fn range_info(&self) -> &'static str {
        (**self).range_info()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Distribution selector for the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DistributionKind {
    Byte,
    Kilobyte,
    Megabyte,
    #[default]
    Equal,
}

impl DistributionKind {
    /// Every selectable distribution, smallest first.
    pub fn all() -> [DistributionKind; 4] {
        [
            DistributionKind::Byte,
            DistributionKind::Kilobyte,
            DistributionKind::Megabyte,
            DistributionKind::Equal,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            DistributionKind::Byte => "byte",
            DistributionKind::Kilobyte => "kilobyte",
            DistributionKind::Megabyte => "megabyte",
            DistributionKind::Equal => "equal",
        }
    }

    /// Construct a fresh distribution of this kind.
    pub fn build(self) -> Box<dyn SizeDistribution> {
        match self {
            DistributionKind::Byte => Box::new(Byte),
            DistributionKind::Kilobyte => Box::new(Kilobyte),
            DistributionKind::Megabyte => Box::new(Megabyte),
            DistributionKind::Equal => Box::new(Equal),
        }
    }
}
