use randshow_core::traits::UniformRng;

/// Shuffles `items` in place with the Fisher-Yates algorithm.
///
/// For `i` in `0..len - 1`, swaps position `i` with a uniform position in
/// `[i, len)`. The last position would only ever swap with itself, so the loop
/// stops one short. Slices shorter than two elements are left untouched and
/// consume no draws.
///
/// # Examples
///
/// ```rust
/// use randshow_engines::Xoshiro256PlusPlus;
/// use randshow_sampling::seq::shuffle;
///
/// let mut rng = Xoshiro256PlusPlus::from_seed(1);
/// let mut letters = ['a', 'b', 'c', 'd'];
/// shuffle(&mut rng, &mut letters);
///
/// let mut sorted = letters;
/// sorted.sort();
/// assert_eq!(sorted, ['a', 'b', 'c', 'd']);
/// ```
pub fn shuffle<T, R: UniformRng + ?Sized>(rng: &mut R, items: &mut [T]) {
    let len = items.len();
    if len < 2 {
        return;
    }
    for i in 0..len - 1 {
        let j = i + rng.next_u64_below((len - i) as u64) as usize;
        items.swap(i, j);
    }
}
