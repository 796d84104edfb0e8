//! Trial runner and Monte Carlo experiment driver.

use crate::seeds::TrialSeedProvider;

use percolation_core::{PercolationError, PercolationGrid, ThresholdStats, ThresholdSummary};
use percolation_env::PercolationContext;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Outcome of a single percolation trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// Sites opened when the grid first percolated
    pub opened: usize,

    /// Sites drawn, including resamples of already-open sites
    pub draws: u64,

    /// `opened / N²`, in (0, 1]
    pub threshold: f64,
}

/// Runs single trials on fresh grids of one size.
#[derive(Debug, Clone, Copy)]
pub struct TrialRunner {
    grid_size: i64,
}

impl TrialRunner {
    /// Creates a runner for N×N grids.
    ///
    /// Fails with [`PercolationError::InvalidDimension`] if `grid_size <= 0`.
    pub fn new(grid_size: i64) -> Result<Self, PercolationError> {
        if grid_size <= 0 {
            return Err(PercolationError::InvalidDimension(grid_size));
        }
        Ok(Self { grid_size })
    }

    /// Grid side length N.
    pub fn grid_size(&self) -> i64 {
        self.grid_size
    }

    /// Opens uniformly random closed sites until the grid percolates.
    ///
    /// Draws that land on an open site are resampled and not counted.
    pub fn run<C: PercolationContext>(&self, ctx: &mut C) -> Result<TrialOutcome, PercolationError> {
        let mut grid = PercolationGrid::new(self.grid_size)?;
        let mut opened = 0usize;
        let mut draws = 0u64;

        while !grid.percolates() {
            let (row, col) = ctx.sample_site(self.grid_size);
            draws += 1;

            if !grid.is_open(row, col)? {
                grid.open(row, col)?;
                opened += 1;
            }
        }

        let total_sites = grid.size() * grid.size();
        Ok(TrialOutcome {
            opened,
            draws,
            threshold: opened as f64 / total_sites as f64,
        })
    }
}

/// Runs one trial on a fresh N×N grid and returns its threshold.
pub fn run_trial<C: PercolationContext>(grid_size: i64, ctx: &mut C) -> Result<f64, PercolationError> {
    Ok(TrialRunner::new(grid_size)?.run(ctx)?.threshold)
}

/// Configuration for an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Grid side length N
    pub grid_size: i64,

    /// Number of independent trials T
    pub trials: i64,

    /// Master seed for determinism
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            grid_size: 200,
            trials: 100,
            seed: 42,
        }
    }
}

/// Results of a finished experiment.
#[derive(Debug, Clone)]
pub struct ExperimentResult {
    /// Grid side length N
    pub grid_size: i64,

    /// Master seed (0 for an unseeded context)
    pub seed: u64,

    /// Per-trial outcomes, in trial order
    pub outcomes: Vec<TrialOutcome>,

    /// Statistics over the thresholds
    pub stats: ThresholdStats,
}

impl ExperimentResult {
    /// Mean, deviation and confidence interval of the thresholds.
    pub fn summary(&self) -> Result<ThresholdSummary, PercolationError> {
        self.stats.summary()
    }

    /// Per-trial thresholds, in trial order.
    pub fn thresholds(&self) -> &[f64] {
        self.stats.thresholds()
    }
}

/// Monte Carlo driver: T independent trials on N×N grids.
#[derive(Debug, Clone, Copy)]
pub struct ExperimentRunner {
    /// Per-trial runner
    trial: TrialRunner,

    /// Number of trials
    trials: usize,

    /// Master seed
    seed: u64,
}

impl ExperimentRunner {
    /// Creates a runner for `trials` trials on `grid_size`×`grid_size` grids.
    ///
    /// Fails with `InvalidDimension` if `grid_size <= 0` and with
    /// `InvalidArgument` if `trials <= 0`.
    pub fn new(grid_size: i64, trials: i64) -> Result<Self, PercolationError> {
        let trial = TrialRunner::new(grid_size)?;
        if trials <= 0 {
            return Err(PercolationError::invalid_argument(format!(
                "trial count must be > 0, got {}",
                trials
            )));
        }
        let trials = usize::try_from(trials)
            .map_err(|_| PercolationError::invalid_argument("trial count too large"))?;

        Ok(Self {
            trial,
            trials,
            seed: ExperimentConfig::default().seed,
        })
    }

    /// Creates a runner from a configuration.
    pub fn from_config(config: &ExperimentConfig) -> Result<Self, PercolationError> {
        Ok(Self::new(config.grid_size, config.trials)?.with_seed(config.seed))
    }

    /// Sets the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of trials T.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Runs every trial on its own context derived from the master seed.
    pub fn run(&self) -> Result<ExperimentResult, PercolationError> {
        let seeds = TrialSeedProvider::new(self.seed);
        self.run_trials(self.seed, |index| {
            let mut ctx = seeds.trial_context(index as u64);
            self.trial.run(&mut ctx)
        })
    }

    /// Runs every trial drawing from one caller-supplied context.
    pub fn run_with<C: PercolationContext>(
        &self,
        ctx: &mut C,
    ) -> Result<ExperimentResult, PercolationError> {
        let seed = ctx.seed();
        self.run_trials(seed, |_| self.trial.run(ctx))
    }

    fn run_trials<F>(&self, seed: u64, mut run_one: F) -> Result<ExperimentResult, PercolationError>
    where
        F: FnMut(usize) -> Result<TrialOutcome, PercolationError>,
    {
        let grid_size = self.trial.grid_size();
        info!(
            "Starting experiment: {}x{} grid, {} trials (seed={})",
            grid_size, grid_size, self.trials, seed
        );
        if self.trials == 1 {
            warn!("Single trial: standard deviation and confidence interval are undefined");
        }

        let mut outcomes = Vec::with_capacity(self.trials);
        for index in 0..self.trials {
            let outcome = run_one(index)?;
            debug!(
                "  trial {} | opened={} | draws={} | threshold={:.6}",
                index, outcome.opened, outcome.draws, outcome.threshold
            );
            outcomes.push(outcome);
        }

        let stats = ThresholdStats::new(outcomes.iter().map(|o| o.threshold).collect())?;
        info!(
            "✓ Experiment complete: mean threshold {:.6} over {} trials",
            stats.mean(),
            stats.trials()
        );

        Ok(ExperimentResult {
            grid_size,
            seed,
            outcomes,
            stats,
        })
    }
}
