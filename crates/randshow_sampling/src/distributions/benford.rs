use rand::distributions::Distribution;
use rand::Rng;
use randshow_core::traits::{RandAdapter, UniformRng};
use randshow_core::types::DistributionError;

/// Benford's law for leading digits in a given base.
///
/// Digit `d` has probability `log_b(1 + 1/d)`, so in base 10 a leading `1`
/// appears about 30% of the time and a leading `9` under 5%.
#[derive(Debug, Clone, PartialEq)]
pub struct Benford {
    base: u32,
    ln_base: f64,
    /// Normalisation constant `1 / sum(log_b(1 + 1/d))` over `d in 1..base`
    c: f64,
}

impl Benford {
    /// Creates the leading-digit distribution for `base`.
    ///
    /// # Errors
    ///
    /// [`DistributionError::InvalidBase`] if `base <= 2`.
    pub fn new(base: u32) -> Result<Self, DistributionError> {
        if base <= 2 {
            return Err(DistributionError::InvalidBase(base));
        }
        Ok(Self::with_valid_base(base))
    }

    fn with_valid_base(base: u32) -> Self {
        let ln_base = f64::from(base).ln();
        let total: f64 = (1..base)
            .map(|d| f64::from(d).recip().ln_1p() / ln_base)
            .sum();
        Self {
            base,
            ln_base,
            c: total.recip(),
        }
    }

    /// Digit base.
    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Normalisation constant; one up to rounding.
    #[inline]
    pub fn normalisation(&self) -> f64 {
        self.c
    }

    /// Probability of leading digit `d`; zero outside `1..base`.
    pub fn probability(&self, d: u32) -> f64 {
        if d == 0 || d >= self.base {
            return 0.0;
        }
        self.term(d)
    }

    #[inline]
    fn term(&self, d: u32) -> f64 {
        self.c * f64::from(d).recip().ln_1p() / self.ln_base
    }

    /// Draws a leading digit.
    ///
    /// The search runs over `1..=base`; the extra final term only absorbs
    /// rounding, so in practice digits lie in `1..base`.
    ///
    /// # Panics
    ///
    /// If the cumulative sum never reaches the uniform draw.
    pub fn draw<R: UniformRng + ?Sized>(&self, rng: &mut R) -> u32 {
        let z = rng.next_real();
        let mut cumulative = 0.0;
        for d in 1..=self.base {
            cumulative += self.term(d);
            if cumulative >= z {
                return d;
            }
        }
        panic!(
            "Benford inverse-CDF search exhausted: base={}, c={}, z={}, cumulative={}",
            self.base, self.c, z, cumulative
        );
    }
}

impl Default for Benford {
    /// Decimal leading digits.
    fn default() -> Self {
        Self::with_valid_base(10)
    }
}

impl Distribution<u32> for Benford {
    fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> u32 {
        self.draw(&mut RandAdapter::new(rng))
    }
}
