//! Fisher-Yates shuffle

use rand::Rng;

/// Returns a uniformly random permutation of `items`.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// chosen index in `[0, index]`.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for current in (1..shuffled.len()).rev() {
        let pick = rng.random_range(0..=current);
        shuffled.swap(current, pick);
    }
    shuffled
}
