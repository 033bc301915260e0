//! SplitMix64 seed expander.

use rand_core::{Error, RngCore};
use randshow_core::entropy::entropy_u64;
use randshow_core::traits::{SeedableEngine, UniformRng};
use randshow_core::types::EntropyError;
use tracing::debug;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Weyl-sequence generator with a Murmur-style output mix.
///
/// Used to expand one 64-bit seed into the larger state of
/// [`Xoshiro256PlusPlus`](crate::Xoshiro256PlusPlus). Consecutive states
/// are distinct, and the mix is a bijection, so consecutive outputs are
/// distinct too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates a generator whose initial state is `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Creates a generator seeded from system entropy.
    pub fn from_entropy() -> Result<Self, EntropyError> {
        let seed = entropy_u64()?;
        debug!(engine = Self::NAME, seed, "seeded from system entropy");
        Ok(Self::from_seed(seed))
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl UniformRng for SplitMix64 {
    type Output = u64;

    #[inline]
    fn advance(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl SeedableEngine for SplitMix64 {
    const NAME: &'static str = "splitmix64";

    fn from_seed_u64(seed: u64) -> Self {
        SplitMix64::from_seed(seed)
    }

    fn from_entropy() -> Result<Self, EntropyError> {
        SplitMix64::from_entropy()
    }
}

impl RngCore for SplitMix64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.advance() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.advance()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
