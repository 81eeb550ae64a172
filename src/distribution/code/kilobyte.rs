use super::super::SizeDistribution;
use super::byte::{Byte, BYTE_RANGE};
use rand::RngCore;

/// Two byte draws stacked into `low + high * 1024`, covering `[0, 1Mb)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Kilobyte;

impl SizeDistribution for Kilobyte {
    #[inline]
    fn next_size(&self, rng: &mut dyn RngCore) -> usize {
        let low = Byte.next_size(rng);
        let high = Byte.next_size(rng);
        low + high * BYTE_RANGE
    }

    fn range_info(&self) -> &'static str {
        "Uniform generation in [0-1Mb)"
    }
}
