//! Random-source trait for percolation trials.

/// The source of randomness handed to a trial.
///
/// # Implementations
///
/// - **Production**: `OsContext` - `StdRng` seeded from OS entropy
/// - **Simulation**: `SimContext` - `ChaCha8Rng(seed)`
///
/// Trials never reach for a global generator; whatever context they are
/// given decides whether the run is reproducible.
pub trait PercolationContext {
    /// Returns an integer drawn uniformly from `[low, high)`.
    ///
    /// # Panics
    /// If `low >= high`.
    fn uniform(&mut self, low: i64, high: i64) -> i64;

    /// Draws a 1-based `(row, col)` uniformly from an N×N grid.
    ///
    /// Row and column are drawn independently.
    fn sample_site(&mut self, size: i64) -> (i64, i64) {
        let row = self.uniform(1, size + 1);
        let col = self.uniform(1, size + 1);
        (row, col)
    }

    /// Returns the context's seed (for logging/debugging).
    ///
    /// In production, returns 0 (not seeded).
    fn seed(&self) -> u64;
}
