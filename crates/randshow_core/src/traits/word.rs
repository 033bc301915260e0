//! Unsigned output words.

use num_traits::{AsPrimitive, PrimInt, Unsigned};
use std::fmt;

/// An unsigned integer type a generator can emit.
///
/// Implemented for `u32` and `u64`. Derived draws widen every word to `u64`
/// (and to `u128` for range arithmetic) so that one implementation of each
/// draw serves both widths.
pub trait Word:
    PrimInt + Unsigned + AsPrimitive<u64> + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Width of the word in bits.
    const WIDTH: u32;

    /// Truncates a `u64` to this width.
    fn wrapping_from_u64(value: u64) -> Self;
}

impl Word for u32 {
    const WIDTH: u32 = 32;

    #[inline]
    fn wrapping_from_u64(value: u64) -> Self {
        value as u32
    }
}

impl Word for u64 {
    const WIDTH: u32 = 64;

    #[inline]
    fn wrapping_from_u64(value: u64) -> Self {
        value
    }
}
