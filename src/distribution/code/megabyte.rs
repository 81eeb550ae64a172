use super::super::SizeDistribution;
use super::byte::{Byte, BYTE_RANGE};
use super::kilobyte::Kilobyte;
use rand::RngCore;

/// A byte draw scaled to megabytes plus a kilobyte draw, covering `[0, 1Gb)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Megabyte;

impl SizeDistribution for Megabyte {
    #[inline]
    fn next_size(&self, rng: &mut dyn RngCore) -> usize {
        let megabytes = Byte.next_size(rng);
        BYTE_RANGE * BYTE_RANGE * megabytes + Kilobyte.next_size(rng)
    }

    fn range_info(&self) -> &'static str {
        "Uniform generation in [0-1Gb)"
    }
}
