use super::super::SizeDistribution;
use super::{Byte, Kilobyte, Megabyte};
use rand::{Rng, RngCore};

/// The three size scales [`Equal`] chooses between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scale {
    Byte,
    Kilobyte,
    Megabyte,
}

impl Scale {
    fn next_size(self, rng: &mut dyn RngCore) -> usize {
        match self {
            Scale::Byte => Byte.next_size(rng),
            Scale::Kilobyte => Kilobyte.next_size(rng),
            Scale::Megabyte => Megabyte.next_size(rng),
        }
    }
}

/// Byte, kilobyte or megabyte sized requests with equal probability.
#[derive(Clone, Copy, Debug, Default)]
pub struct Equal;

impl Equal {
    /// Pick the scale for the next request.
    #[inline]
    pub fn choose(&self, rng: &mut dyn RngCore) -> Scale {
        match rng.random_range(0..3u32) {
            0 => Scale::Byte,
            1 => Scale::Kilobyte,
            _ => Scale::Megabyte,
        }
    }
}

impl SizeDistribution for Equal {
    #[inline]
    fn next_size(&self, rng: &mut dyn RngCore) -> usize {
        let scale = self.choose(rng);
        scale.next_size(rng)
    }

    fn range_info(&self) -> &'static str {
        "Equal probability of three sizes: few bytes, few Kb or few Mb"
    }
}
