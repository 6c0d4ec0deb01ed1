//! Seeded random source for active-grid selection.
//!
//! The same seed always produces the same sequence of active grids, so a
//! game can be reproduced from the seed printed in the logs.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for picking sub-boards.
#[derive(Clone, Debug)]
pub struct GridRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GridRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random index in `0..bound`.
    ///
    /// `bound` must be non-zero.
    pub fn index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}
