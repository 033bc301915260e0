use rand::distributions::Distribution;
use rand::Rng;
use randshow_core::traits::{RandAdapter, UniformRng};
use randshow_core::types::DistributionError;

/// Zipf's law over ranks `1..=n`: rank `x` has probability `c / x^s`.
///
/// Attributed to George Zipf and most often used to model word frequencies:
/// with `s = 1`, the `x`-th most common item occurs `1/x` times as often as
/// the most common one.
///
/// # Examples
///
/// ```rust
/// use randshow_engines::Xoshiro256PlusPlus;
/// use randshow_sampling::distributions::Zipf;
///
/// let zipf = Zipf::new(10, 1.5).unwrap();
/// let mut rng = Xoshiro256PlusPlus::from_seed(3);
/// let rank = zipf.draw(&mut rng);
/// assert!((1..=10).contains(&rank));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Zipf {
    /// Population size
    n: u64,
    /// Skew exponent
    s: f64,
    /// Normalisation constant `1 / sum(1 / i^s)`
    c: f64,
}

impl Zipf {
    /// Creates a Zipf distribution over `population` ranks with skew
    /// `exponent`.
    ///
    /// Construction sums `population` terms, so it costs `O(n)`.
    ///
    /// # Errors
    ///
    /// - [`DistributionError::InvalidPopulation`] if `population < 1`
    /// - [`DistributionError::InvalidExponent`] if `exponent < 1` or is not
    ///   finite
    pub fn new(population: u64, exponent: f64) -> Result<Self, DistributionError> {
        if population < 1 {
            return Err(DistributionError::InvalidPopulation(population));
        }
        if !exponent.is_finite() || exponent < 1.0 {
            return Err(DistributionError::InvalidExponent(exponent));
        }

        let harmonic: f64 = (1..=population)
            .map(|i| (i as f64).powf(exponent).recip())
            .sum();

        Ok(Self {
            n: population,
            s: exponent,
            c: harmonic.recip(),
        })
    }

    /// Population size `n`.
    #[inline]
    pub fn population(&self) -> u64 {
        self.n
    }

    /// Skew exponent `s`.
    #[inline]
    pub fn exponent(&self) -> f64 {
        self.s
    }

    /// Normalisation constant `c`.
    #[inline]
    pub fn normalisation(&self) -> f64 {
        self.c
    }

    /// Probability of rank `x`; zero outside `1..=n`.
    pub fn probability(&self, x: u64) -> f64 {
        if x == 0 || x > self.n {
            return 0.0;
        }
        self.c / (x as f64).powf(self.s)
    }

    /// Draws a rank in `1..=n`.
    ///
    /// Consumes exactly one `next_real()` draw; the search costs up to `n`
    /// steps.
    ///
    /// # Panics
    ///
    /// If the cumulative sum never reaches the uniform draw, which can only
    /// happen through floating-point drift between the normalisation and the
    /// summation.
    pub fn draw<R: UniformRng + ?Sized>(&self, rng: &mut R) -> u64 {
        let z = rng.next_real();
        let mut cumulative = 0.0;
        for x in 1..=self.n {
            cumulative += self.c / (x as f64).powf(self.s);
            if cumulative >= z {
                return x;
            }
        }
        panic!(
            "Zipf inverse-CDF search exhausted: n={}, s={}, c={}, z={}, cumulative={}",
            self.n, self.s, self.c, z, cumulative
        );
    }
}

impl Distribution<u64> for Zipf {
    fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> u64 {
        self.draw(&mut RandAdapter::new(rng))
    }
}
