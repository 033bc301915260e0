//! Unit tests for the uniform generator contract.
//!
//! This module verifies:
//! - Degenerate-range sentinels and whether they consume draws
//! - Rejection and widening in bounded draws over narrow domains
//! - Open-interval behaviour of real-valued draws at the domain edges
//! - The `rand` adapter
//! - Range properties via property-based testing

use super::*;
use approx::assert_relative_eq;
use proptest::prelude::*;

/// Replays a fixed script of raw values over a declared domain.
struct Scripted {
    values: Vec<u64>,
    position: usize,
    min: u64,
    max: u64,
}

impl Scripted {
    fn new(values: &[u64], min: u64, max: u64) -> Self {
        Self {
            values: values.to_vec(),
            position: 0,
            min,
            max,
        }
    }
}

impl UniformRng for Scripted {
    type Output = u64;

    fn min_value(&self) -> u64 {
        self.min
    }

    fn max_value(&self) -> u64 {
        self.max
    }

    fn advance(&mut self) -> u64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

/// 32-bit Weyl sequence; equidistributed enough for range checks.
struct Weyl32(u32);

impl UniformRng for Weyl32 {
    type Output = u32;

    fn advance(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(0x9E37_79B9);
        self.0 ^ (self.0 >> 15)
    }
}

/// 64-bit mixer used as a well-behaved full-range source.
struct Mix64(u64);

impl UniformRng for Mix64 {
    type Output = u64;

    fn advance(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

#[test]
fn test_default_domain_is_full_word() {
    let rng = Weyl32(0);
    assert_eq!(rng.min_value(), 0);
    assert_eq!(rng.max_value(), u32::MAX);
    assert_eq!(rng.domain_width(), 1u128 << 32);

    let rng = Mix64(0);
    assert_eq!(rng.domain_width(), 1u128 << 64);
}

#[test]
fn test_next_returns_advance() {
    let mut rng = Scripted::new(&[4, 8, 15], 0, 99);
    assert_eq!(rng.next(), 4);
    assert_eq!(rng.advance(), 8);
    assert_eq!(rng.next(), 15);
}

#[test]
fn test_next_below_zero_and_one_do_not_advance() {
    let mut rng = Scripted::new(&[5], 0, 9);
    assert_eq!(rng.next_below(0), 0);
    assert_eq!(rng.next_below(1), 0);
    assert_eq!(rng.next_u64_below(0), 0);
    assert_eq!(rng.position, 0);
}

#[test]
fn test_empty_ranges_return_lower_bound_without_advancing() {
    let mut rng = Scripted::new(&[5], 0, 9);
    assert_eq!(rng.next_in(7, 7), 7);
    assert_eq!(rng.next_in(9, 3), 9);
    assert_eq!(rng.next_i64_in(-4, -4), -4);
    assert_eq!(rng.next_i64_in(10, -10), 10);
    assert_eq!(rng.next_real_in(2.5, 2.5), 2.5);
    assert_eq!(rng.next_real_in(3.0, 1.0), 3.0);
    assert_eq!(rng.position, 0);
}

#[test]
fn test_real_range_rejects_nan_and_infinite_width() {
    let mut rng = Scripted::new(&[5], 0, 9);
    assert!(rng.next_real_in(f64::NAN, 1.0).is_nan());
    assert_eq!(rng.next_real_in(0.0, f64::NAN), 0.0);
    assert_eq!(rng.next_real_in(f64::MIN, f64::MAX), f64::MIN);
    assert_eq!(rng.position, 0);
}

#[test]
fn test_bounded_draw_rejects_incomplete_copy() {
    // Domain [0, 9] holds three complete copies of [0, 3); 9 is rejected.
    let mut rng = Scripted::new(&[9, 4], 0, 9);
    assert_eq!(rng.next_below(3), 1);
    assert_eq!(rng.position, 2);
}

#[test]
fn test_bounded_draw_offsets_from_minimum() {
    let mut rng = Scripted::new(&[13, 17], 10, 19);
    assert_eq!(rng.next_below(5), 3);
    assert_eq!(rng.next_below(5), 2);
}

#[test]
fn test_bounded_draw_widens_past_domain() {
    // Two draws combine into 7 * 10 + 3 = 73 over a reach of 100.
    let mut rng = Scripted::new(&[7, 3], 0, 9);
    assert_eq!(rng.next_below(50), 23);
    assert_eq!(rng.position, 2);
}

#[test]
fn test_signed_range_spans_zero() {
    let mut rng = Scripted::new(&[0, 199, 100], 0, 199);
    assert_eq!(rng.next_i64_in(-100, 100), -100);
    assert_eq!(rng.next_i64_in(-100, 100), 99);
    assert_eq!(rng.next_i64_in(-100, 100), 0);
}

#[test]
fn test_signed_range_full_width() {
    let mut rng = Mix64(11);
    for _ in 0..1_000 {
        let v = rng.next_i64_in(i64::MIN, i64::MAX);
        assert!(v < i64::MAX);
    }
}

#[test]
fn test_next_real_excludes_endpoints_for_32_bit_words() {
    let mut rng = Scripted::new(&[0, u64::from(u32::MAX)], 0, u64::from(u32::MAX));
    let low = rng.next_real();
    let high = rng.next_real();
    assert!(low > 0.0);
    assert!(high < 1.0);
    assert_relative_eq!(low, 0.5 / 4_294_967_296.0);
}

#[test]
fn test_next_real_excludes_endpoints_for_64_bit_words() {
    let mut rng = Scripted::new(&[0, u64::MAX], 0, u64::MAX);
    let low = rng.next_real();
    let high = rng.next_real();
    assert!(low > 0.0);
    assert!(high < 1.0);
}

#[test]
fn test_next_real_excludes_endpoints_for_prime_modulus() {
    let max = (1u64 << 63) - 26;
    let mut rng = Scripted::new(&[0, max], 0, max);
    assert!(rng.next_real() > 0.0);
    assert!(rng.next_real() < 1.0);
}

#[test]
fn test_next_real_midpoint() {
    let mut rng = Scripted::new(&[1 << 31], 0, u64::from(u32::MAX));
    assert_relative_eq!(rng.next_real(), 0.5, epsilon = 1e-9);
}

#[test]
fn test_heads_follow_half_threshold() {
    let mut rng = Scripted::new(&[0, u64::from(u32::MAX)], 0, u64::from(u32::MAX));
    assert!(rng.heads());
    assert!(!rng.heads());
}

#[test]
fn test_weighted_heads_boundaries() {
    let mut rng = Weyl32(3);
    for _ in 0..10_000 {
        assert!(!rng.heads_weighted(0.0));
        assert!(!rng.heads_weighted(-1.5));
        assert!(rng.heads_weighted(1.0));
        assert!(rng.heads_weighted(2.0));
    }
}

#[test]
fn test_weighted_heads_frequency() {
    let mut rng = Mix64(5);
    let trials = 100_000;
    let hits = (0..trials).filter(|_| rng.heads_weighted(0.25)).count();
    assert_relative_eq!(hits as f64 / trials as f64, 0.25, epsilon = 0.01);
}

#[test]
fn test_next_bits64_full_domain_uses_single_draw() {
    let mut rng = Scripted::new(&[0xDEAD_BEEF_0000_0001], 0, u64::MAX);
    assert_eq!(rng.next_bits64(), 0xDEAD_BEEF_0000_0001);
    assert_eq!(rng.position, 1);
}

#[test]
fn test_next_bits64_combines_32_bit_halves() {
    let mut rng = Scripted::new(&[0x1234_5678, 0x9ABC_DEF0], 0, u64::from(u32::MAX));
    assert_eq!(rng.next_bits64(), 0x1234_5678_9ABC_DEF0);
}

#[test]
fn test_rand_adapter_forwards_next_u64() {
    use rand::rngs::mock::StepRng;

    let mut step = StepRng::new(10, 5);
    let mut rng = RandAdapter::new(&mut step);
    assert_eq!(rng.advance(), 10);
    assert_eq!(rng.advance(), 15);
    assert_eq!(rng.domain_width(), 1u128 << 64);
}

#[test]
fn test_generic_dispatch_over_word_widths() {
    fn draw_many<R: UniformRng>(rng: &mut R, bound: R::Output) -> Vec<R::Output> {
        (0..100).map(|_| rng.next_below(bound)).collect()
    }

    assert!(draw_many(&mut Weyl32(1), 17).iter().all(|&v| v < 17));
    assert!(draw_many(&mut Mix64(1), 17).iter().all(|&v| v < 17));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property test: bounded draws stay in [a, b) for any non-empty range.
    #[test]
    fn prop_next_in_within_bounds(seed in any::<u64>(), a in any::<u64>(), b in any::<u64>()) {
        prop_assume!(a < b);
        let mut rng = Mix64(seed);
        for _ in 0..50 {
            let v = rng.next_in(a, b);
            prop_assert!(a <= v && v < b, "{} outside [{}, {})", v, a, b);
        }
    }

    /// Property test: 32-bit generators honour ranges too.
    #[test]
    fn prop_next_in_within_bounds_u32(seed in any::<u32>(), a in any::<u32>(), b in any::<u32>()) {
        prop_assume!(a < b);
        let mut rng = Weyl32(seed);
        for _ in 0..50 {
            let v = rng.next_in(a, b);
            prop_assert!(a <= v && v < b);
        }
    }

    /// Property test: wide bounds over a narrow domain still land in range.
    #[test]
    fn prop_widened_draw_within_bounds(seed in any::<u64>(), n in 2u64..) {
        let mut rng = Mix64(seed);
        let mut narrow = Scripted::new(
            &(0..64).map(|_| rng.next_below(1_000)).collect::<Vec<_>>(),
            0,
            999,
        );
        prop_assert!(narrow.next_u64_below(n) < n);
    }

    /// Property test: reals stay strictly inside (0, 1) and inside [a, b).
    #[test]
    fn prop_reals_in_range(seed in any::<u64>(), a in -1e6f64..1e6, width in 1e-9f64..1e6) {
        let mut rng = Mix64(seed);
        for _ in 0..50 {
            let u = rng.next_real();
            prop_assert!(u > 0.0 && u < 1.0);
            let v = rng.next_real_in(a, a + width);
            prop_assert!(v >= a && v < a + width);
        }
    }
}
