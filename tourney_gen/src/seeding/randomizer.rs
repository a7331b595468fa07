//! Uniform shuffling used to draw random seeds.

use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Return `items` in a uniformly random order.
///
/// Backed by `SliceRandom::shuffle`, a single Fisher-Yates pass.
pub fn shuffle<T, R>(mut items: Vec<T>, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
    items
}

/// Seed randomizer owning its random number generator
pub struct SeedRandomizer<R = ThreadRng> {
    rng: R,
}

impl SeedRandomizer<ThreadRng> {
    /// Create a randomizer backed by the thread-local generator
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl SeedRandomizer<StdRng> {
    /// Create a reproducible randomizer from a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> SeedRandomizer<R> {
    /// Wrap an existing generator
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Shuffle an arbitrary sequence
    pub fn shuffle<T>(&mut self, items: Vec<T>) -> Vec<T> {
        shuffle(items, &mut self.rng)
    }

    /// Random permutation of `0..n`
    pub fn shuffled_range(&mut self, n: usize) -> Vec<usize> {
        self.shuffle((0..n).collect())
    }
}

impl Default for SeedRandomizer<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}
