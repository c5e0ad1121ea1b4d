//! Deterministic random number generation for board setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same board
//! - **Context streams**: Face selection, back selection, and shuffling each
//!   draw from their own stream, so changing one does not disturb the others
//!
//! ```
//! use memory_pairs::core::GameRng;
//!
//! let mut faces = GameRng::new(42).for_context("faces");
//! let picked = faces.draw_distinct(10, 8).unwrap();
//!
//! let mut again = GameRng::new(42).for_context("faces");
//! assert_eq!(picked, again.draw_distinct(10, 8).unwrap());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;
use std::hash::{Hash, Hasher};

/// Seeded RNG used by the board builder.
///
/// Uses ChaCha8 so the same seed yields the same board on every platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Draw a uniformly random index in `0..len`.
    ///
    /// Returns `None` for an empty range.
    pub fn draw_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }

    /// Draw `count` distinct indices in `0..len`, in draw order.
    ///
    /// Each draw is uniform over the whole range; a draw that repeats an
    /// earlier index is discarded and drawn again. Returns `None` when
    /// `count > len`, since distinctness could never be satisfied.
    pub fn draw_distinct(&mut self, len: usize, count: usize) -> Option<Vec<usize>> {
        if count > len {
            return None;
        }

        let mut seen = FxHashSet::default();
        let mut picked = Vec::with_capacity(count);
        while picked.len() < count {
            let index = self.inner.gen_range(0..len);
            if seen.insert(index) {
                picked.push(index);
            }
        }
        Some(picked)
    }

    /// Pick a uniformly random element from a slice.
    #[must_use]
    pub fn pick<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        let index = self.draw_index(slice.len())?;
        slice.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.draw_index(1000), rng2.draw_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.draw_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.draw_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_streams_differ() {
        let rng = GameRng::new(42);
        let mut faces = rng.for_context("faces");
        let mut shuffle = rng.for_context("shuffle");

        let seq1: Vec<_> = (0..10).map(|_| faces.draw_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| shuffle.draw_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_draw_index_empty() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.draw_index(0), None);
        assert_eq!(rng.draw_index(1), Some(0));
    }

    #[test]
    fn test_draw_distinct() {
        let mut rng = GameRng::new(7);

        let picked = rng.draw_distinct(10, 10).unwrap();
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());

        assert_eq!(rng.draw_distinct(3, 4), None);
        assert_eq!(rng.draw_distinct(0, 0), Some(Vec::new()));
    }

    #[test]
    fn test_pick() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.pick(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.pick(&empty).is_none());
    }
}
