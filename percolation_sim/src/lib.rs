//! Percolation Monte Carlo Harness
//!
//! Estimates the site-percolation threshold of an N×N grid by running many
//! independent trials and aggregating the fraction of open sites at the
//! moment each grid first percolates.
//!
//! # Core Principle: Seeded Trials
//!
//! Every trial draws from its own `SimContext`, seeded from the master seed
//! and the trial index. Trials share no state, and any run (or any single
//! trial) can be replayed from its seed.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                 ExperimentRunner                 │
//! │   TrialSeedProvider ──► SimContext (per trial)   │
//! │            │                                     │
//! │       ┌────▼─────┐      ┌─────────────────────┐  │
//! │       │  Trial   │─────►│   PercolationGrid   │  │
//! │       │  Runner  │      │ weighted union-find │  │
//! │       └────┬─────┘      └─────────────────────┘  │
//! │            ▼                                     │
//! │      ThresholdStats (mean, stddev, 95% CI)       │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use percolation_sim::ExperimentRunner;
//!
//! let result = ExperimentRunner::new(200, 100)?.with_seed(42).run()?;
//! let summary = result.summary()?;
//! ```

mod context;
mod exporter;
mod runner;
mod seeds;

pub use context::SimContext;
pub use exporter::ExperimentExport;
pub use runner::{
    run_trial, ExperimentConfig, ExperimentResult, ExperimentRunner, TrialOutcome, TrialRunner,
};
pub use seeds::TrialSeedProvider;
