//! PCG64 (PCG-XSL-RR 128/64): 128-bit state, 64-bit output.

use rand_core::{Error, RngCore};
use randshow_core::bits::rotr64;
use randshow_core::entropy::entropy_u128;
use randshow_core::traits::{SeedableEngine, UniformRng};
use randshow_core::types::EntropyError;
use tracing::debug;

/// 128-bit LCG multiplier.
pub const PCG64_MULTIPLIER: u128 = 0x2360_ED05_1FC6_5DA4_4385_DF64_9FCC_F645;

/// 128-bit LCG increment.
pub const PCG64_INCREMENT: u128 = 0x5851_F42D_4C95_7F2D_1405_7B7E_F767_814F;

/// Permuted congruential generator with 128-bit state and 64-bit output.
///
/// For high-throughput or many-stream workloads where the `2^64` period of
/// [`Pcg32`](crate::Pcg32) is too short. Each output folds the pre-update
/// state's high and low halves with XOR and rotates the result right by the
/// state's top six bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcg64 {
    state: u128,
}

impl Pcg64 {
    /// Creates a generator whose initial state is `seed`.
    pub fn from_seed(seed: u128) -> Self {
        Self { state: seed }
    }

    /// Creates a generator seeded from system entropy.
    pub fn from_entropy() -> Result<Self, EntropyError> {
        let seed = entropy_u128()?;
        debug!(engine = Self::NAME, seed = %seed, "seeded from system entropy");
        Ok(Self::from_seed(seed))
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> u128 {
        self.state
    }
}

impl UniformRng for Pcg64 {
    type Output = u64;

    #[inline]
    fn advance(&mut self) -> u64 {
        let x = self.state;
        self.state = x.wrapping_mul(PCG64_MULTIPLIER).wrapping_add(PCG64_INCREMENT);

        let count = (x >> 122) as u32;
        rotr64((x >> 64) as u64 ^ x as u64, count)
    }
}

impl SeedableEngine for Pcg64 {
    const NAME: &'static str = "pcg64";

    fn from_seed_u64(seed: u64) -> Self {
        Pcg64::from_seed(u128::from(seed))
    }

    fn from_entropy() -> Result<Self, EntropyError> {
        Pcg64::from_entropy()
    }
}

impl RngCore for Pcg64 {
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
