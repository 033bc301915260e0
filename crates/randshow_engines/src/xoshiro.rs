//! Xoshiro256++: 256-bit state, 64-bit output, period `2^256 - 1`.
//!
//! ## Seeding
//!
//! A 64-bit seed is expanded with [`SplitMix64`]: two consecutive outputs are
//! split into their low and high 32-bit halves, one half per state word.
//! Alternatively, any other [`UniformRng`] can supply four full 64-bit words
//! through [`Xoshiro256PlusPlus::from_rng`].
//!
//! ## Parallel streams
//!
//! Independently seeded instances may run on separate threads. For streams
//! that are guaranteed not to overlap, clone one instance and call
//! [`jump`](Xoshiro256PlusPlus::jump) on each copy a different number of times.

use rand_core::{Error, RngCore};
use randshow_core::bits::rotl64;
use randshow_core::entropy::entropy_u64;
use randshow_core::traits::{SeedableEngine, UniformRng};
use randshow_core::types::EntropyError;
use tracing::debug;

use crate::SplitMix64;

/// Jump polynomial for an advance of `2^128` draws.
const JUMP: [u64; 4] = [
    0x180E_C6D3_3CFD_0ABA,
    0xD5A6_1266_F0C9_392C,
    0xA958_2618_E03F_C9AA,
    0x39AB_DC45_29B1_661C,
];

/// The xoshiro256++ generator.
///
/// # Examples
///
/// ```rust
/// use randshow_core::traits::UniformRng;
/// use randshow_engines::Xoshiro256PlusPlus;
///
/// let mut rng = Xoshiro256PlusPlus::from_state([1, 2, 3, 4]);
/// assert_eq!(rng.advance(), 41_943_041);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro256PlusPlus {
    s: [u64; 4],
}

impl Xoshiro256PlusPlus {
    /// Creates a generator from a 64-bit seed expanded by [`SplitMix64`].
    pub fn from_seed(seed: u64) -> Self {
        let mut expander = SplitMix64::from_seed(seed);
        let a = expander.advance();
        let b = expander.advance();
        Self {
            s: [a & 0xFFFF_FFFF, a >> 32, b & 0xFFFF_FFFF, b >> 32],
        }
    }

    /// Creates a generator seeded from system entropy.
    pub fn from_entropy() -> Result<Self, EntropyError> {
        let seed = entropy_u64()?;
        debug!(engine = Self::NAME, seed, "seeded from system entropy");
        Ok(Self::from_seed(seed))
    }

    /// Creates a generator whose four state words are drawn from another
    /// generator.
    pub fn from_rng<R: UniformRng + ?Sized>(rng: &mut R) -> Self {
        let mut s = [0u64; 4];
        for word in s.iter_mut() {
            *word = rng.next_bits64();
        }
        Self::from_state(s)
    }

    /// Creates a generator from raw state words.
    ///
    /// The all-zero state is a fixed point of the recurrence; it is replaced
    /// by the expansion of seed `0`.
    pub fn from_state(s: [u64; 4]) -> Self {
        if s == [0; 4] {
            return Self::from_seed(0);
        }
        Self { s }
    }

    /// Current state words.
    #[inline]
    pub fn state(&self) -> [u64; 4] {
        self.s
    }

    /// Advances the generator by `2^128` draws.
    ///
    /// Equivalent to that many calls to `advance`, in 256 steps.
    pub fn jump(&mut self) {
        let mut acc = [0u64; 4];
        for &word in JUMP.iter() {
            for bit in 0..64 {
                if word & (1u64 << bit) != 0 {
                    for (a, s) in acc.iter_mut().zip(self.s.iter()) {
                        *a ^= *s;
                    }
                }
                self.advance();
            }
        }
        self.s = acc;
    }
}

impl UniformRng for Xoshiro256PlusPlus {
    type Output = u64;

    #[inline]
    fn advance(&mut self) -> u64 {
        let s = &mut self.s;
        let result = rotl64(s[0].wrapping_add(s[3]), 23).wrapping_add(s[0]);
        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;
        s[3] = rotl64(s[3], 45);

        result
    }
}

impl SeedableEngine for Xoshiro256PlusPlus {
    const NAME: &'static str = "xoshiro256pp";

    fn from_seed_u64(seed: u64) -> Self {
        Xoshiro256PlusPlus::from_seed(seed)
    }

    fn from_entropy() -> Result<Self, EntropyError> {
        Xoshiro256PlusPlus::from_entropy()
    }
}

impl RngCore for Xoshiro256PlusPlus {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pcg32;

    #[test]
    fn test_reference_vectors() {
        let mut rng = Xoshiro256PlusPlus::from_state([1, 2, 3, 4]);
        assert_eq!(rng.advance(), 41_943_041);
        assert_eq!(rng.advance(), 58_720_359);
        assert_eq!(rng.advance(), 3_588_806_011_781_223);
    }

    #[test]
    fn test_seed_expansion_splits_halves() {
        let rng = Xoshiro256PlusPlus::from_seed(42);
        assert_eq!(
            rng.state(),
            [803_958_421, 3_184_996_902, 2_993_090_819, 686_809_907]
        );
    }

    #[test]
    fn test_seeded_sequence() {
        let mut rng = Xoshiro256PlusPlus::from_seed(42);
        assert_eq!(rng.advance(), 12_505_471_926_365_845);
        assert_eq!(rng.advance(), 26_293_625_744_838_864);
        assert_eq!(rng.advance(), 13_590_144_601_519_424_344);
    }

    #[test]
    fn test_zero_state_replaced() {
        let rng = Xoshiro256PlusPlus::from_state([0; 4]);
        assert_eq!(rng, Xoshiro256PlusPlus::from_seed(0));
        assert_ne!(rng.state(), [0; 4]);
    }

    #[test]
    fn test_from_rng_is_deterministic_for_seeded_source() {
        let a = Xoshiro256PlusPlus::from_rng(&mut Pcg32::from_seed(3));
        let b = Xoshiro256PlusPlus::from_rng(&mut Pcg32::from_seed(3));
        assert_eq!(a, b);
        assert!(a.state().iter().any(|&w| w > u64::from(u32::MAX)));
    }

    #[test]
    fn test_jump_is_deterministic_and_moves_stream() {
        let base = Xoshiro256PlusPlus::from_seed(7);
        let mut jumped_a = base.clone();
        let mut jumped_b = base.clone();
        jumped_a.jump();
        jumped_b.jump();
        assert_eq!(jumped_a, jumped_b);
        assert_ne!(jumped_a, base);

        let mut stream = base.clone();
        let head: Vec<u64> = (0..32).map(|_| stream.advance()).collect();
        let jumped: Vec<u64> = (0..32).map(|_| jumped_a.advance()).collect();
        assert_ne!(head, jumped);
    }
}
