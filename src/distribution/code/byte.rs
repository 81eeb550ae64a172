use super::super::SizeDistribution;
use rand::{Rng, RngCore};

/// Exclusive upper bound of a single byte-sized draw.
pub const BYTE_RANGE: usize = 1024;

/// Uniform sizes in `[0, 1024)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Byte;

impl SizeDistribution for Byte {
    #[inline]
    fn next_size(&self, rng: &mut dyn RngCore) -> usize {
        rng.random_range(0..BYTE_RANGE)
    }

    fn range_info(&self) -> &'static str {
        "Uniform generation in [0-1Kb)"
    }
}
