//! System entropy source for default seeding.
//!
//! Generators built with `from_entropy` draw their seed here exactly once, at
//! construction. The read blocks until the operating system answers and is
//! never retried: an error surfaces as [`EntropyError`] and the generator is
//! not built.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::types::EntropyError;

fn fill<const N: usize>() -> Result<[u8; N], EntropyError> {
    let mut bytes = [0u8; N];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Reads a 32-bit seed from the operating system.
pub fn entropy_u32() -> Result<u32, EntropyError> {
    fill().map(u32::from_le_bytes)
}

/// Reads a 64-bit seed from the operating system.
///
/// # Examples
///
/// ```rust
/// use randshow_core::entropy::entropy_u64;
///
/// let seed = entropy_u64().expect("entropy source available");
/// println!("seeding with {seed}");
/// ```
pub fn entropy_u64() -> Result<u64, EntropyError> {
    fill().map(u64::from_le_bytes)
}

/// Reads a 128-bit seed from the operating system.
pub fn entropy_u128() -> Result<u128, EntropyError> {
    fill().map(u128::from_le_bytes)
}
