//! PCG32 (PCG-XSH-RR): 64-bit state, 32-bit output.

use rand_core::{impls, Error, RngCore};
use randshow_core::bits::rotr32;
use randshow_core::entropy::entropy_u64;
use randshow_core::traits::{SeedableEngine, UniformRng};
use randshow_core::types::EntropyError;
use tracing::debug;

/// Default 64-bit LCG multiplier.
pub const PCG32_MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// Default 64-bit LCG increment.
pub const PCG32_INCREMENT: u64 = 1_442_695_040_888_963_407;

/// Permuted congruential generator with 32-bit output.
///
/// The state advances as a 64-bit LCG; each output is derived from the state
/// *before* the update by an xorshift followed by a data-dependent rotation
/// (the top five state bits choose the rotation amount).
///
/// The generally recommended default when a small, fast engine is wanted.
///
/// # Examples
///
/// ```rust
/// use randshow_core::traits::UniformRng;
/// use randshow_engines::Pcg32;
///
/// let mut rng = Pcg32::from_seed(42);
/// assert_eq!(rng.advance(), 0);
/// assert_eq!(rng.advance(), 1_971_522_493);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcg32 {
    state: u64,
    multiplier: u64,
    increment: u64,
}

impl Pcg32 {
    /// Creates a generator with the default constants; the seed becomes the
    /// initial state.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            state: seed,
            multiplier: PCG32_MULTIPLIER,
            increment: PCG32_INCREMENT,
        }
    }

    /// Creates a generator seeded from system entropy.
    pub fn from_entropy() -> Result<Self, EntropyError> {
        let seed = entropy_u64()?;
        debug!(engine = Self::NAME, seed, "seeded from system entropy");
        Ok(Self::from_seed(seed))
    }

    /// Creates a generator with custom LCG constants.
    ///
    /// The constants are kept exactly as given; distinct increments select
    /// distinct streams. The underlying LCG reaches its full `2^64` period
    /// only with an odd increment and a multiplier congruent to 1 mod 4; an
    /// even increment yields a shorter cycle.
    pub fn with_params(seed: u64, multiplier: u64, increment: u64) -> Self {
        Self {
            state: seed,
            multiplier,
            increment,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// LCG multiplier.
    #[inline]
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// LCG increment.
    #[inline]
    pub fn increment(&self) -> u64 {
        self.increment
    }
}

impl UniformRng for Pcg32 {
    type Output = u32;

    #[inline]
    fn advance(&mut self) -> u32 {
        let x = self.state;
        self.state = x.wrapping_mul(self.multiplier).wrapping_add(self.increment);

        let xorshifted = (((x >> 18) ^ x) >> 27) as u32;
        rotr32(xorshifted, (x >> 59) as u32)
    }
}

impl SeedableEngine for Pcg32 {
    const NAME: &'static str = "pcg32";

    fn from_seed_u64(seed: u64) -> Self {
        Pcg32::from_seed(seed)
    }

    fn from_entropy() -> Result<Self, EntropyError> {
        Pcg32::from_entropy()
    }
}

impl RngCore for Pcg32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
