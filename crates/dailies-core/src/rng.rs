//! The deterministic random source shared by all generators.
//!
//! Daily puzzles must be reproducible forever: the same [`PuzzleSeed`] has to
//! produce the same puzzle on every machine and after every restart. To get
//! there, [`PuzzleRng`] pins down three things:
//!
//! 1. **The update rule.** The state is a [`rand_pcg::Pcg32`] (PCG-XSH-RR,
//!    64-bit state, 32-bit output) initialized with
//!    [`rand::SeedableRng::seed_from_u64`].
//! 2. **The projection into a range.** [`PuzzleRng::next_int`] draws one
//!    32-bit output `u`, reads it as the fraction `u / 2^32` in `[0, 1)`, and
//!    scales it onto the requested span with floor truncation. The arithmetic is
//!    done in integers, so it is exact on every platform.
//! 3. **The shuffle.** [`PuzzleRng::shuffle`] is a Fisher–Yates pass that calls
//!    [`PuzzleRng::next_int`] once per step, so a shuffle of `n` items advances the
//!    state exactly like `n - 1` integer draws.
//!
//! Changing any of these reshuffles every future daily puzzle and is a breaking
//! change.

use rand::{RngCore as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::PuzzleSeed;

/// A seeded pseudo-random number generator.
///
/// Each puzzle generation owns its own instance; instances are never shared
/// between requests.
///
/// # Examples
///
/// ```
/// use dailies_core::{PuzzleRng, PuzzleSeed};
///
/// let mut rng = PuzzleRng::new(PuzzleSeed::new(42));
///
/// let value = rng.next_int(1, 6);
/// assert!((1..=6).contains(&value));
///
/// let digits = [1, 2, 3, 4, 5, 6, 7, 8, 9];
/// let shuffled = rng.shuffle(&digits);
/// assert_eq!(shuffled.len(), 9);
/// assert_eq!(digits, [1, 2, 3, 4, 5, 6, 7, 8, 9]); // input untouched
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleRng {
    inner: Pcg32,
}

impl PuzzleRng {
    /// Creates a generator from a seed.
    #[must_use]
    pub fn new(seed: PuzzleSeed) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed.value()),
        }
    }

    /// Returns an integer in `min..=max`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn next_int(&mut self, min: usize, max: usize) -> usize {
        assert!(min <= max, "empty range: {min}..={max}");
        let span = (max - min) as u128 + 1;
        let fraction = u128::from(self.inner.next_u32());
        let offset = (fraction * span) >> 32;
        // `offset < span <= max - min + 1`, so it always fits.
        #[expect(clippy::cast_possible_truncation)]
        let offset = offset as usize;
        min + offset
    }

    /// Returns a shuffled copy of `items`, leaving `items` unmodified.
    pub fn shuffle<T>(&mut self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        let mut shuffled = items.to_vec();
        for i in (1..shuffled.len()).rev() {
            let j = self.next_int(0, i);
            shuffled.swap(i, j);
        }
        shuffled
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PuzzleRng::new(PuzzleSeed::new(20_240_101));
        let mut b = PuzzleRng::new(PuzzleSeed::new(20_240_101));
        for _ in 0..100 {
            assert_eq!(a.next_int(0, 1000), b.next_int(0, 1000));
        }
    }

    #[test]
    fn test_sequence_is_pinned() {
        let mut rng = PuzzleRng::new(PuzzleSeed::new(20_240_101));
        let draws: Vec<_> = (0..8).map(|_| rng.next_int(0, 1000)).collect();
        assert_eq!(draws, [915, 8, 349, 454, 420, 335, 894, 508]);

        let mut rng = PuzzleRng::new(PuzzleSeed::new(42));
        assert_eq!(rng.shuffle(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), [5, 9, 4, 3, 2, 6, 1, 7, 8]);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = PuzzleRng::new(PuzzleSeed::new(1));
        let mut b = PuzzleRng::new(PuzzleSeed::new(2));
        let xs: Vec<_> = (0..16).map(|_| a.next_int(0, 1_000_000)).collect();
        let ys: Vec<_> = (0..16).map(|_| b.next_int(0, 1_000_000)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_single_value_range() {
        let mut rng = PuzzleRng::new(PuzzleSeed::new(7));
        for _ in 0..10 {
            assert_eq!(rng.next_int(5, 5), 5);
        }
    }

    #[test]
    fn test_covers_whole_range() {
        let mut rng = PuzzleRng::new(PuzzleSeed::new(99));
        let mut seen = [false; 9];
        for _ in 0..1000 {
            seen[rng.next_int(0, 8)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_shuffle_advances_like_draws() {
        let seed = PuzzleSeed::new(12345);
        let mut shuffler = PuzzleRng::new(seed);
        let mut drawer = PuzzleRng::new(seed);

        let _ = shuffler.shuffle(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        for i in (1..9).rev() {
            let _ = drawer.next_int(0, i);
        }
        assert_eq!(shuffler.next_int(0, 1 << 20), drawer.next_int(0, 1 << 20));
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn test_rejects_inverted_range() {
        let _ = PuzzleRng::new(PuzzleSeed::new(0)).next_int(3, 2);
    }

    proptest! {
        #[test]
        fn next_int_stays_in_range(seed in any::<u64>(), min in 0usize..1000, len in 0usize..1000) {
            let mut rng = PuzzleRng::new(PuzzleSeed::new(seed));
            let max = min + len;
            for _ in 0..32 {
                let value = rng.next_int(min, max);
                prop_assert!((min..=max).contains(&value));
            }
        }

        #[test]
        fn shuffle_is_a_permutation(seed in any::<u64>(), items in prop::collection::vec(any::<u8>(), 0..32)) {
            let mut rng = PuzzleRng::new(PuzzleSeed::new(seed));
            let mut shuffled = rng.shuffle(&items);
            let mut sorted = items.clone();
            shuffled.sort_unstable();
            sorted.sort_unstable();
            prop_assert_eq!(shuffled, sorted);
        }
    }
}
