//! Linear congruential generator.
//!
//! `state = (multiplier * state + increment) mod modulus`, with the new state
//! returned as the output. The default parameters form a multiplicative
//! generator modulo the prime `2^63 - 25`.
//!
//! Minimal footprint (one state word plus three constants) and the fastest
//! engine here, but statistically the weakest: suitable for games and other
//! non-statistical uses only.

use rand_core::{impls, Error, RngCore};
use randshow_core::entropy::entropy_u64;
use randshow_core::traits::{SeedableEngine, UniformRng};
use randshow_core::types::{EngineError, EntropyError};
use tracing::debug;

/// Default multiplier.
pub const LCG_MULTIPLIER: u64 = 6_458_928_179_451_363_983;

/// Default increment.
pub const LCG_INCREMENT: u64 = 0;

/// Default modulus, the prime `2^63 - 25`.
pub const LCG_MODULUS: u64 = (1 << 63) - 25;

/// Linear congruential generator with 64-bit state.
///
/// Outputs lie in `[0, modulus - 1]`. A modulus of `0` stands for `2^64`
/// (plain wrapping arithmetic), giving the full `u64` domain.
///
/// # Examples
///
/// ```rust
/// use randshow_core::traits::UniformRng;
/// use randshow_engines::{Lcg, LCG_MODULUS, LCG_MULTIPLIER};
///
/// let mut rng = Lcg::from_seed(1);
/// assert_eq!(rng.advance(), LCG_MULTIPLIER % LCG_MODULUS);
/// assert_eq!(rng.state(), LCG_MULTIPLIER % LCG_MODULUS);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
    multiplier: u64,
    increment: u64,
    modulus: u64,
}

impl Lcg {
    /// Creates a generator with the default parameters and the given seed.
    ///
    /// The seed becomes the initial state; the first draw is the state that
    /// follows it.
    ///
    /// The default parameters have no increment, so a seed of `0` (or any
    /// multiple of the modulus) is a fixed point and every draw is `0`.
    /// [`Lcg::from_entropy`] never picks such a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            state: seed,
            multiplier: LCG_MULTIPLIER,
            increment: LCG_INCREMENT,
            modulus: LCG_MODULUS,
        }
    }

    /// Creates a generator with the default parameters, seeded from system
    /// entropy.
    pub fn from_entropy() -> Result<Self, EntropyError> {
        let seed = reduce_entropy_seed(entropy_u64()?, LCG_MODULUS);
        debug!(engine = Self::NAME, seed, "seeded from system entropy");
        Ok(Self::from_seed(seed))
    }

    /// Creates a generator with custom parameters.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DegenerateModulus`] for a modulus of `1`.
    pub fn with_params(
        seed: u64,
        multiplier: u64,
        increment: u64,
        modulus: u64,
    ) -> Result<Self, EngineError> {
        if modulus == 1 {
            return Err(EngineError::DegenerateModulus { modulus });
        }
        Ok(Self {
            state: seed,
            multiplier,
            increment,
            modulus,
        })
    }

    /// Creates a generator with custom parameters, seeded from system entropy.
    pub fn with_params_from_entropy(
        multiplier: u64,
        increment: u64,
        modulus: u64,
    ) -> Result<Self, EngineError> {
        let seed = reduce_entropy_seed(entropy_u64()?, modulus);
        debug!(
            engine = Self::NAME,
            seed,
            multiplier,
            increment,
            modulus,
            "seeded from system entropy"
        );
        Self::with_params(seed, multiplier, increment, modulus)
    }

    /// Current state; equal to the most recent output once a draw was made.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// State multiplier.
    #[inline]
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// State increment.
    #[inline]
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Modulus (`0` meaning `2^64`).
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

/// Maps a raw entropy word into `[1, modulus)`; a zero state would be a fixed
/// point of a multiplicative generator.
fn reduce_entropy_seed(raw: u64, modulus: u64) -> u64 {
    let seed = if modulus == 0 { raw } else { raw % modulus };
    seed.max(1)
}

impl UniformRng for Lcg {
    type Output = u64;

    #[inline]
    fn max_value(&self) -> u64 {
        self.modulus.wrapping_sub(1)
    }

    #[inline]
    fn advance(&mut self) -> u64 {
        self.state = if self.modulus == 0 {
            self.multiplier
                .wrapping_mul(self.state)
                .wrapping_add(self.increment)
        } else {
            let next = u128::from(self.multiplier) * u128::from(self.state)
                + u128::from(self.increment);
            (next % u128::from(self.modulus)) as u64
        };
        self.state
    }
}

impl SeedableEngine for Lcg {
    const NAME: &'static str = "lcg";

    fn from_seed_u64(seed: u64) -> Self {
        Lcg::from_seed(seed)
    }

    fn from_entropy() -> Result<Self, EntropyError> {
        Lcg::from_entropy()
    }
}

/// The domain depends on the modulus, so both word views go through the
/// domain-aware draws: a modulus of `2^32` maps one state to one `u32`, a
/// smaller one combines several states per word.
impl RngCore for Lcg {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_u64_below(1 << 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next_bits64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
