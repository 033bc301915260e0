//! Error types for structured error handling.
//!
//! This module provides:
//! - `EntropyError`: The operating-system entropy source could not be read
//! - `EngineError`: A generator was parameterised with unusable constants
//! - `DistributionError`: A discrete distribution was constructed with
//!   parameters outside its domain
//!
//! Degenerate draw ranges (`next_below(0)`, `next_in(a, b)` with `a >= b`) are
//! not errors; they return a documented sentinel instead.

use thiserror::Error;

/// Failure to obtain a seed from the system entropy source.
///
/// There is no fallback seed: a generator that cannot be seeded from entropy
/// is not constructed at all.
///
/// # Examples
/// ```
/// use randshow_core::types::EntropyError;
///
/// let err = EntropyError::Unavailable("getrandom: ENOSYS".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "System entropy source unavailable: getrandom: ENOSYS"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntropyError {
    /// The entropy source returned an error.
    #[error("System entropy source unavailable: {0}")]
    Unavailable(String),
}

impl From<rand::Error> for EntropyError {
    fn from(err: rand::Error) -> Self {
        EntropyError::Unavailable(err.to_string())
    }
}

/// Generator construction errors.
///
/// # Variants
/// - `DegenerateModulus`: A linear congruential modulus leaves a single
///   reachable state
/// - `Entropy`: Entropy seeding failed while building the generator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The modulus admits only one output value.
    #[error("Degenerate modulus {modulus}: the generator would only ever produce 0")]
    DegenerateModulus {
        /// The rejected modulus
        modulus: u64,
    },

    /// Seeding from the system entropy source failed.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

/// Discrete distribution construction errors.
///
/// # Examples
/// ```
/// use randshow_core::types::DistributionError;
///
/// let err = DistributionError::InvalidBase(2);
/// assert!(format!("{}", err).contains("must be greater than 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Population size below one.
    #[error("Invalid population size {0}: must be at least 1")]
    InvalidPopulation(u64),

    /// Skew exponent below one, or not finite.
    #[error("Invalid exponent {0}: must be finite and at least 1")]
    InvalidExponent(f64),

    /// Digit base not greater than two.
    #[error("Invalid base {0}: must be greater than 2")]
    InvalidBase(u32),
}
