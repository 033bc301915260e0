use randshow_core::traits::UniformRng;

/// Picks `k` items from `source` independently and uniformly, with
/// replacement, in `O(k)` draws.
///
/// The same position may be picked more than once. An empty source yields an
/// empty vector whatever `k` is.
pub fn sample_with_replacement<'a, T, R>(rng: &mut R, source: &'a [T], k: usize) -> Vec<&'a T>
where
    R: UniformRng + ?Sized,
{
    if source.is_empty() {
        return Vec::new();
    }
    let len = source.len() as u64;
    (0..k)
        .map(|_| &source[rng.next_u64_below(len) as usize])
        .collect()
}
