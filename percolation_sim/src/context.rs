//! Simulation context implementing PercolationContext for deterministic runs.

use percolation_env::PercolationContext;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Simulation context backed by a seeded ChaCha8 RNG.
///
/// Two contexts built from the same seed produce the same draws, so a
/// trial can be replayed exactly from its seed.
pub struct SimContext {
    /// Seed this context was built from
    seed: u64,

    /// Deterministic RNG for site sampling
    rng: ChaCha8Rng,

    /// Number of values drawn so far
    draws: u64,
}

impl SimContext {
    /// Creates a new SimContext with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Returns how many values have been drawn from this context.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl PercolationContext for SimContext {
    fn uniform(&mut self, low: i64, high: i64) -> i64 {
        self.draws += 1;
        self.rng.gen_range(low..high)
    }

    fn seed(&self) -> u64 {
        self.seed
    }
}
