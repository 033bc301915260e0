//! Fixed-width bit rotation primitives.
//!
//! Stateless helpers shared by the permuted and xor-shift generators. The
//! rotation amount is taken modulo the word width, so rotating by `0` or by
//! the full width returns the input unchanged.

/// Rotates a 32-bit word left by `k` bits.
#[inline]
pub const fn rotl32(x: u32, k: u32) -> u32 {
    x.rotate_left(k % u32::BITS)
}

/// Rotates a 32-bit word right by `k` bits.
///
/// # Examples
///
/// ```rust
/// use randshow_core::bits::rotr32;
///
/// assert_eq!(rotr32(0b1, 1), 0x8000_0000);
/// assert_eq!(rotr32(0xDEAD_BEEF, 32), 0xDEAD_BEEF);
/// ```
#[inline]
pub const fn rotr32(x: u32, k: u32) -> u32 {
    x.rotate_right(k % u32::BITS)
}

/// Rotates a 64-bit word left by `k` bits.
#[inline]
pub const fn rotl64(x: u64, k: u32) -> u64 {
    x.rotate_left(k % u64::BITS)
}

/// Rotates a 64-bit word right by `k` bits.
#[inline]
pub const fn rotr64(x: u64, k: u32) -> u64 {
    x.rotate_right(k % u64::BITS)
}
