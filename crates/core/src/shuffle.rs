use rand::Rng;

/// Fisher–Yates shuffle.
///
/// Walks from the last index down to 1 and swaps each element with a uniformly
/// chosen element at or before it, giving every permutation equal probability.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns a shuffled copy of `items`, leaving the input untouched.
#[must_use]
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle_in_place(&mut copy, rng);
    copy
}
