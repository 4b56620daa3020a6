//! # Random Permutations
//!
//! Shuffling never touches hidden global state: [`shuffle`] draws from the
//! calling thread's generator, and [`shuffle_with`] / [`sample`] take the
//! generator explicitly so results can be reproduced from a seed.
//!
//! ## Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use sanity::random::shuffle_with;
//!
//! let deck = vec![1, 2, 3, 4, 5];
//! let a = shuffle_with(&deck, &mut StdRng::seed_from_u64(42));
//! let b = shuffle_with(&deck, &mut StdRng::seed_from_u64(42));
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly random permutation of `seq`, using the thread-local generator.
///
/// # Example
/// ```
/// use sanity::random::shuffle;
/// let mut shuffled = shuffle(&[3, 1, 2]);
/// shuffled.sort();
/// assert_eq!(shuffled, vec![1, 2, 3]);
/// ```
pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
    shuffle_with(seq, &mut rand::thread_rng())
}

/// Uniformly random permutation of `seq` drawn from `rng` (Fisher-Yates).
pub fn shuffle_with<T, R>(seq: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    tracing::trace!(len = seq.len(), "shuffle");
    let mut result = seq.to_vec();
    result.shuffle(rng);
    result
}

/// Up to `n` elements taken from distinct positions of `seq`, in random order.
///
/// Asking for more elements than `seq` holds returns a full shuffle.
///
/// # Example
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use sanity::random::sample;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let picked = sample(&["a", "b", "c", "d"], 2, &mut rng);
/// assert_eq!(picked.len(), 2);
/// assert_ne!(picked[0], picked[1]);
/// ```
pub fn sample<T, R>(seq: &[T], n: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    tracing::trace!(len = seq.len(), n, "sample");
    let mut pool = seq.to_vec();
    let (chosen, _) = pool.partial_shuffle(rng, n);
    chosen.to_vec()
}
