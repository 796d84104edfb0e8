//! Percolation Environment Abstraction Layer
//!
//! Everything the estimator needs from the outside world goes through this
//! crate, so the Monte Carlo harness can run against either real entropy or a
//! seeded generator:
//! - Randomness (`PercolationContext::uniform()`, `sample_site()`)
//! - Input (`read_dimensions()` for the grid size and trial count)
//!
//! By deriving all entropy from a single 64-bit seed, any run becomes
//! reproducible via its seed number.
//!
//! # Example
//!
//! ```ignore
//! use percolation_env::{OsContext, PercolationContext};
//!
//! let mut ctx = OsContext::new();
//! let (row, col) = ctx.sample_site(20);
//! ```

mod context;
mod error;
mod input;
mod os_impl;

pub use context::PercolationContext;
pub use error::EnvError;
pub use input::read_dimensions;
pub use os_impl::OsContext;
