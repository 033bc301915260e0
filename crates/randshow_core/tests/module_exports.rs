//! Integration tests for module exports.
//!
//! Verify that the public modules and types are reachable via absolute paths
//! and compose the way downstream crates use them.

use randshow_core::bits::{rotl32, rotl64, rotr32, rotr64};
use randshow_core::entropy::{entropy_u32, entropy_u64};
use randshow_core::traits::{RandAdapter, SeedableEngine, UniformRng, Word};
use randshow_core::types::{DistributionError, EngineError, EntropyError};

/// Minimal engine implementing both traits from outside the crate.
struct Xorshift32(u32);

impl UniformRng for Xorshift32 {
    type Output = u32;

    fn min_value(&self) -> u32 {
        1
    }

    fn advance(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}

impl SeedableEngine for Xorshift32 {
    const NAME: &'static str = "xorshift32";

    fn from_seed_u64(seed: u64) -> Self {
        Self((seed as u32).max(1))
    }

    fn from_entropy() -> Result<Self, EntropyError> {
        Ok(Self(entropy_u32()?.max(1)))
    }
}

#[test]
fn test_bits_module_exports() {
    assert_eq!(rotl32(rotr32(0xF00D, 7), 7), 0xF00D);
    assert_eq!(rotl64(rotr64(0xF00D, 9), 9), 0xF00D);
}

#[test]
fn test_external_engine_uses_derived_draws() {
    let mut rng = Xorshift32::from_seed_u64(2463534242);
    assert_eq!(Xorshift32::NAME, "xorshift32");
    assert_eq!(rng.domain_width(), u128::from(u32::MAX));

    for _ in 0..1_000 {
        let v = rng.next();
        assert!(v >= rng.min_value());
        assert!(rng.next_below(6) < 6);
        let x = rng.next_real();
        assert!(x > 0.0 && x < 1.0);
    }
}

#[test]
fn test_entropy_seeded_external_engine() {
    let mut rng = Xorshift32::from_entropy().unwrap();
    assert!(rng.next_in(10, 20) >= 10);
}

#[test]
fn test_word_widths() {
    assert_eq!(<u32 as Word>::WIDTH, 32);
    assert_eq!(<u64 as Word>::WIDTH, 64);
    assert_eq!(u32::wrapping_from_u64(0x1_0000_0002), 2);
}

#[test]
fn test_rand_adapter_with_std_rng() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    let first: Vec<u64> = {
        let mut rng = RandAdapter::new(&mut a);
        (0..10).map(|_| rng.next_below(1_000)).collect()
    };
    let second: Vec<u64> = {
        let mut rng = RandAdapter::new(&mut b);
        (0..10).map(|_| rng.next_below(1_000)).collect()
    };
    assert_eq!(first, second);
}

#[test]
fn test_error_types_exports() {
    let _ = EngineError::DegenerateModulus { modulus: 1 };
    let _ = DistributionError::InvalidBase(1);
    let _ = entropy_u64().map_err(EngineError::from);
}
