use randshow_core::traits::UniformRng;

use super::shuffle;

/// Draws a uniform random subset of `k` items from `source` without
/// replacement (reservoir sampling, Algorithm L).
///
/// The source length need not be known: it is discovered by traversal, and
/// runs of items that will not enter the reservoir are passed over with
/// [`Iterator::nth`], so a source with a cheap `nth` (slices, ranges) is
/// sampled in `O(k (1 + log(n / k)))` draws.
///
/// - `k == 0` returns an empty vector.
/// - A source with at most `k` items is returned whole, shuffled.
/// - Otherwise exactly `k` items are returned, each from a distinct source
///   position, in no particular order.
///
/// # Examples
///
/// ```rust
/// use randshow_engines::Pcg64;
/// use randshow_sampling::seq::sample_iter;
///
/// let mut rng = Pcg64::from_seed(11);
/// let picks = sample_iter(&mut rng, 0..1_000_000u64, 3);
/// assert_eq!(picks.len(), 3);
/// ```
pub fn sample_iter<I, R>(rng: &mut R, source: I, k: usize) -> Vec<I::Item>
where
    I: IntoIterator,
    R: UniformRng + ?Sized,
{
    if k == 0 {
        return Vec::new();
    }

    let mut source = source.into_iter().peekable();
    let mut reservoir: Vec<I::Item> = source.by_ref().take(k).collect();
    if reservoir.len() < k || source.peek().is_none() {
        shuffle(rng, &mut reservoir);
        return reservoir;
    }

    let k_f = k as f64;
    let mut w = (rng.next_real().ln() / k_f).exp();
    loop {
        let skip = skip_distance(rng, w);
        let Some(item) = source.nth(skip - 1) else {
            break;
        };
        let slot = rng.next_u64_below(k as u64) as usize;
        reservoir[slot] = item;
        w *= (rng.next_real().ln() / k_f).exp();
    }
    reservoir
}

/// Number of items to advance before the next replacement, at least one.
///
/// `w` lies in `(0, 1]`. `ln(1 - w)` is taken as `ln_1p(-w)` to keep
/// precision for small `w`; `w == 1` gives an infinite denominator and a
/// skip of one. Distances beyond `usize::MAX` saturate, which ends any
/// traversal.
fn skip_distance<R: UniformRng + ?Sized>(rng: &mut R, w: f64) -> usize {
    let gap = (rng.next_real().ln() / (-w).ln_1p()).floor();
    (gap as usize).saturating_add(1)
}

/// Slice front-end of [`sample_iter`], returning references into `source`.
///
/// # Examples
///
/// ```rust
/// use randshow_engines::Lcg;
/// use randshow_sampling::seq::sample;
///
/// let mut rng = Lcg::from_seed(5);
/// let colours = ["red", "green", "blue", "cyan", "magenta"];
/// let picked = sample(&mut rng, &colours, 2);
/// assert_eq!(picked.len(), 2);
/// assert_ne!(picked[0], picked[1]);
/// ```
pub fn sample<'a, T, R>(rng: &mut R, source: &'a [T], k: usize) -> Vec<&'a T>
where
    R: UniformRng + ?Sized,
{
    sample_iter(rng, source.iter(), k)
}
