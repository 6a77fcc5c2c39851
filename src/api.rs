use crate::derange::{derange, Pairing};
use crate::error::DerangeError;
use crate::fisher_yates::fisher_yates;
use rand::Rng;

pub trait AmigoShuffle {
    /// Rearranges the slice into a random permutation, such that any order
    /// appears with equal probability. The permutation only depends on the
    /// random number generator: a seeded generator reproduces the same
    /// order each run on the same build.
    ///
    /// # Example
    /// ```
    /// use amigo_shuffle::AmigoShuffle;
    /// let mut data: Vec<_> = (0..100).collect();
    /// let org = data.clone();
    ///
    /// data.fy_shuffle(&mut rand::thread_rng());
    ///
    /// assert_ne!(data, org); // might fail with probability 1 / 100!
    /// ```
    fn fy_shuffle<R: Rng>(&mut self, rng: &mut R);
}

pub trait AmigoDerange<T> {
    /// Draws secret-friend pairs over the slice: every item gives to
    /// exactly one other item and receives from exactly one. The slice
    /// itself is left untouched.
    ///
    /// Items are compared by value and should be pairwise distinct; see
    /// [`derange`] for the duplicate-value caveat and the error condition
    /// (fewer than two items).
    ///
    /// # Warning
    /// Pairings are valid derangements but are not drawn uniformly from
    /// all possible derangements.
    ///
    /// # Example
    /// ```
    /// use amigo_shuffle::AmigoDerange;
    ///
    /// let friends = ["Ana", "Beto", "Caro"];
    /// let pairs = friends.derange(&mut rand::thread_rng()).unwrap();
    ///
    /// assert_eq!(pairs.len(), 3);
    /// assert!(pairs.iter().all(|p| p.giver != p.receiver));
    /// ```
    fn derange<R: Rng>(&self, rng: &mut R) -> Result<Vec<Pairing<T>>, DerangeError>;

    /// Invokes [`AmigoDerange::derange`] on a fast PCG generator seeded
    /// with `seed`, making the draw reproducible.
    ///
    /// # Example
    /// ```
    /// use amigo_shuffle::AmigoDerange;
    ///
    /// let friends = ["Ana", "Beto", "Caro"];
    ///
    /// assert_eq!(friends.derange_seeded(7), friends.derange_seeded(7));
    /// ```
    #[cfg(feature = "seed_with")]
    fn derange_seeded(&self, seed: u64) -> Result<Vec<Pairing<T>>, DerangeError>;
}

impl<T> AmigoShuffle for [T] {
    fn fy_shuffle<R: Rng>(&mut self, rng: &mut R) {
        fisher_yates(rng, self)
    }
}

impl<T: Clone + PartialEq> AmigoDerange<T> for [T] {
    fn derange<R: Rng>(&self, rng: &mut R) -> Result<Vec<Pairing<T>>, DerangeError> {
        derange(rng, self)
    }

    #[cfg(feature = "seed_with")]
    fn derange_seeded(&self, seed: u64) -> Result<Vec<Pairing<T>>, DerangeError> {
        crate::derange::derange_seeded(seed, self)
    }
}
