//! Production implementation of PercolationContext using OS entropy.

use crate::PercolationContext;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Production context backed by `StdRng` seeded from the OS.
pub struct OsContext {
    rng: StdRng,
}

impl OsContext {
    /// Creates a new OsContext.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for OsContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PercolationContext for OsContext {
    fn uniform(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..high)
    }

    fn seed(&self) -> u64 {
        // Not seeded in production
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_context_range() {
        let mut ctx = OsContext::new();
        for _ in 0..1000 {
            let v = ctx.uniform(1, 6);
            assert!((1..6).contains(&v));
        }
    }

    #[test]
    fn test_os_context_samples_inside_grid() {
        let mut ctx = OsContext::default();
        for _ in 0..1000 {
            let (row, col) = ctx.sample_site(3);
            assert!((1..=3).contains(&row));
            assert!((1..=3).contains(&col));
        }
    }

    #[test]
    fn test_os_context_seed_is_zero() {
        assert_eq!(OsContext::new().seed(), 0);
    }
}
