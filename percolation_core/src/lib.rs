//! Percolation Core - site percolation on an N×N grid
//!
//! - **Connectivity model**: [`PercolationGrid`] opens sites one at a time and
//!   answers "is this site full" / "does the grid percolate" through a
//!   union-find substrate, without bottom-row backwash
//! - **Statistics**: [`ThresholdStats`] aggregates per-trial thresholds into
//!   mean, sample deviation and a 95% confidence interval

pub mod error;
pub mod grid;
pub mod stats;
pub mod union_find;

// Re-export key types for convenience
pub use error::PercolationError;
pub use grid::PercolationGrid;
pub use stats::{ThresholdStats, ThresholdSummary, CONFIDENCE_95};
pub use union_find::{DisjointSet, WeightedQuickUnion};
