use crate::uniform_index;
use rand::Rng;

/// Rearranges `data` in place into a uniformly random permutation: each of
/// the `n!` orderings appears with equal probability, assuming an unbiased
/// `rng`.
///
/// This is the classic backwards Fisher-Yates sweep. Every index `i` from
/// `len - 1` down to `1` is swapped with a uniformly drawn partner in
/// `[0, i]` inclusive; the inclusive upper end is what keeps the sweep
/// unbiased. Empty and single-element slices pass through unchanged.
pub fn fisher_yates<R: Rng, T>(rng: &mut R, data: &mut [T]) {
    for i in (1..data.len()).rev() {
        let j = uniform_index::gen_index(rng, i + 1);
        data.swap(i, j);
    }
}
