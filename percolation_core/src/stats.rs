//! Threshold statistics over a completed Monte Carlo run.
//!
//! Sample standard deviation (divisor T-1) and the symmetric 95% confidence
//! interval under a normal approximation:
//! ```text
//! mean ± 1.96 · stddev / √T
//! ```

use crate::error::{PercolationError, Result};
use serde::{Deserialize, Serialize};

/// z-score of the two-sided 95% confidence level
pub const CONFIDENCE_95: f64 = 1.96;

/// Immutable sequence of per-trial percolation thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdStats {
    thresholds: Vec<f64>,
}

/// The four reported statistics, bundled for output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSummary {
    pub trials: usize,
    pub mean: f64,
    pub stddev: f64,
    pub confidence_low: f64,
    pub confidence_high: f64,
}

impl ThresholdStats {
    /// Wraps the thresholds of a finished run.
    ///
    /// Fails with [`PercolationError::InvalidArgument`] if there are none.
    pub fn new(thresholds: Vec<f64>) -> Result<Self> {
        if thresholds.is_empty() {
            return Err(PercolationError::invalid_argument(
                "at least one trial is required",
            ));
        }
        Ok(Self { thresholds })
    }

    /// Number of trials T.
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// The recorded thresholds, in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Arithmetic mean.
    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.thresholds.len() as f64
    }

    /// Sample standard deviation.
    ///
    /// Undefined for a single trial, which is reported as
    /// [`PercolationError::InvalidArgument`].
    pub fn stddev(&self) -> Result<f64> {
        let t = self.thresholds.len();
        if t < 2 {
            return Err(PercolationError::invalid_argument(
                "standard deviation needs at least two trials",
            ));
        }
        let mean = self.mean();
        let variance = self
            .thresholds
            .iter()
            .map(|&x| (x - mean).powi(2))
            .sum::<f64>()
            / (t - 1) as f64;
        Ok(variance.sqrt())
    }

    /// Lower bound of the 95% confidence interval.
    pub fn confidence_low(&self) -> Result<f64> {
        Ok(self.mean() - self.half_width()?)
    }

    /// Upper bound of the 95% confidence interval.
    pub fn confidence_high(&self) -> Result<f64> {
        Ok(self.mean() + self.half_width()?)
    }

    /// All four statistics at once.
    pub fn summary(&self) -> Result<ThresholdSummary> {
        Ok(ThresholdSummary {
            trials: self.trials(),
            mean: self.mean(),
            stddev: self.stddev()?,
            confidence_low: self.confidence_low()?,
            confidence_high: self.confidence_high()?,
        })
    }

    fn half_width(&self) -> Result<f64> {
        let sqrt_t = (self.thresholds.len() as f64).sqrt();
        Ok((CONFIDENCE_95 * self.stddev()?) / sqrt_t)
    }
}
