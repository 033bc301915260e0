//! Bridge from `rand` generators into [`UniformRng`].

use rand::RngCore;

use super::UniformRng;

/// Borrows any [`rand::RngCore`] and exposes it as a full-range 64-bit
/// [`UniformRng`].
///
/// This is how the discrete distributions implement
/// `rand::distributions::Distribution`, and how callers already holding a
/// `rand` generator can shuffle or sample with this workspace's algorithms.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use randshow_core::traits::{RandAdapter, UniformRng};
///
/// let mut std_rng = StdRng::seed_from_u64(7);
/// let mut rng = RandAdapter::new(&mut std_rng);
/// assert!(rng.next_below(6) < 6);
/// ```
#[derive(Debug)]
pub struct RandAdapter<'a, R: RngCore + ?Sized> {
    inner: &'a mut R,
}

impl<'a, R: RngCore + ?Sized> RandAdapter<'a, R> {
    /// Wraps a mutable borrow of a `rand` generator.
    #[inline]
    pub fn new(inner: &'a mut R) -> Self {
        Self { inner }
    }
}

impl<R: RngCore + ?Sized> UniformRng for RandAdapter<'_, R> {
    type Output = u64;

    #[inline]
    fn advance(&mut self) -> u64 {
        self.inner.next_u64()
    }
}
