//! The uniform generator contract.

use num_traits::{AsPrimitive, Bounded, Zero};
use std::cmp::Ordering;

use super::Word;
use crate::types::EntropyError;

/// Number of random bits carried into a real-valued draw.
///
/// Kept one below the `f64` mantissa width so that `k + 0.5` is exact and the
/// quotient can never round up to `1.0`.
const REAL_BITS: u32 = 52;

/// A stateful source of uniformly distributed integers in `[min, max]`.
///
/// Implementors supply [`advance`](UniformRng::advance) and, when their
/// domain is narrower than the full output word, override
/// [`max_value`](UniformRng::max_value) (and [`min_value`](UniformRng::min_value)).
/// Every other draw is derived from `advance` and behaves identically for all
/// generators.
///
/// # Policies
///
/// - Bounded draws are unbiased. A raw draw is rejected when it falls in the
///   incomplete final copy of the range; ranges wider than the generator's
///   domain combine several draws before the rejection test.
/// - `next_below(0)` and `next_below(1)` return `0` without advancing.
/// - `next_in(a, b)` with `a >= b` returns `a` without advancing.
/// - `next_real()` lies in the open interval `(0, 1)`.
/// - `next_real_in(a, b)` lies in the half-open interval `[a, b)`; `a >= b`
///   returns `a`.
///
/// # Mutation
///
/// Every draw takes `&mut self` and moves the state forward. A generator is
/// not synchronised: one instance per thread, or an external lock around
/// every draw.
pub trait UniformRng {
    /// The raw output word.
    type Output: Word;

    /// Smallest value `advance` can return.
    #[inline]
    fn min_value(&self) -> Self::Output {
        <Self::Output as Zero>::zero()
    }

    /// Largest value `advance` can return.
    #[inline]
    fn max_value(&self) -> Self::Output {
        <Self::Output as Bounded>::max_value()
    }

    /// Number of distinct values in `[min, max]`.
    fn domain_width(&self) -> u128 {
        let min: u64 = self.min_value().as_();
        let max: u64 = self.max_value().as_();
        u128::from(max - min) + 1
    }

    /// Produces the next raw value and moves the state forward.
    fn advance(&mut self) -> Self::Output;

    /// Next raw value in `[min, max]`.
    #[inline]
    fn next(&mut self) -> Self::Output {
        self.advance()
    }

    /// Uniform draw in `[0, n)`.
    fn next_below(&mut self, n: Self::Output) -> Self::Output {
        Self::Output::wrapping_from_u64(self.next_u64_below(n.as_()))
    }

    /// Uniform draw in `[a, b)`, or `a` when the range is empty.
    fn next_in(&mut self, a: Self::Output, b: Self::Output) -> Self::Output {
        if a >= b {
            return a;
        }
        a + self.next_below(b - a)
    }

    /// Uniform draw in `[0, n)` for any `n`, independent of the output width.
    fn next_u64_below(&mut self, n: u64) -> u64 {
        if n <= 1 {
            return 0;
        }
        let n = u128::from(n);
        let width = self.domain_width();
        debug_assert!(width >= 2, "generator domain must hold at least two values");

        loop {
            let mut value = 0u128;
            let mut reach = 1u128;
            while reach < n {
                value = value * width + draw_offset(self);
                reach *= width;
            }
            let zone = reach - reach % n;
            if value < zone {
                return (value % n) as u64;
            }
        }
    }

    /// Uniform signed draw in `[a, b)`, or `a` when the range is empty.
    fn next_i64_in(&mut self, a: i64, b: i64) -> i64 {
        if a >= b {
            return a;
        }
        a.wrapping_add(self.next_u64_below(b.abs_diff(a)) as i64)
    }

    /// 64 uniformly distributed bits, whatever the generator's own domain.
    fn next_bits64(&mut self) -> u64 {
        if self.domain_width() == 1u128 << 64 {
            return self.advance().as_();
        }
        let high = self.next_u64_below(1 << 32);
        let low = self.next_u64_below(1 << 32);
        (high << 32) | low
    }

    /// Uniform real in the open interval `(0, 1)`.
    ///
    /// The draw's offset from `min` is reduced to its top 52 bits `k` and
    /// mapped to `(k + 0.5) / 2^52` (or the matching scale for narrower
    /// domains), which excludes both endpoints.
    fn next_real(&mut self) -> f64 {
        let top = self.domain_width() - 1;
        let shift = (u128::BITS - top.leading_zeros()).saturating_sub(REAL_BITS);
        let scale = ((top >> shift) + 1) as f64;
        let k = (draw_offset(self) >> shift) as f64;
        (k + 0.5) / scale
    }

    /// Uniform real in `[a, b)`, or `a` when the interval is empty or unbounded.
    fn next_real_in(&mut self, a: f64, b: f64) -> f64 {
        let span = b - a;
        if a.partial_cmp(&b) != Some(Ordering::Less) || !span.is_finite() {
            return a;
        }
        loop {
            let value = a + span * self.next_real();
            if value < b {
                return value;
            }
        }
    }

    /// Fair coin flip.
    #[inline]
    fn heads(&mut self) -> bool {
        self.next_real() < 0.5
    }

    /// Weighted coin flip, true with probability `weight`.
    ///
    /// `weight <= 0` always yields `false` and `weight >= 1` always `true`.
    #[inline]
    fn heads_weighted(&mut self, weight: f64) -> bool {
        self.next_real() < weight
    }
}

/// Draws once and returns the offset of the raw value from `min`.
#[inline]
fn draw_offset<R: UniformRng + ?Sized>(rng: &mut R) -> u128 {
    let min: u64 = rng.min_value().as_();
    let raw: u64 = rng.advance().as_();
    debug_assert!(raw >= min, "generator produced a value below its minimum");
    u128::from(raw - min)
}

/// A generator that can be built from a single integer seed or from system
/// entropy.
///
/// Lets generic code (benchmarks, the CLI's engine selection) construct any
/// engine without naming its concrete seed type.
pub trait SeedableEngine: UniformRng + Sized {
    /// Short identifier used in logs and on the command line.
    const NAME: &'static str;

    /// Deterministic construction from a 64-bit seed.
    fn from_seed_u64(seed: u64) -> Self;

    /// Construction from the system entropy source.
    fn from_entropy() -> Result<Self, EntropyError>;
}
