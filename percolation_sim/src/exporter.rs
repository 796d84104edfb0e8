//! JSON exporter for experiment results.
//!
//! Writes the per-trial outcomes and the summary statistics of a run so the
//! thresholds can be analysed offline.

use crate::runner::{ExperimentResult, TrialOutcome};
use percolation_core::ThresholdSummary;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;

/// Complete experiment export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentExport {
    /// Grid side length N
    pub grid_size: i64,

    /// Master seed used
    pub seed: u64,

    /// Per-trial outcomes
    pub trials: Vec<TrialOutcome>,

    /// Summary statistics (absent for a single trial)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ThresholdSummary>,
}

impl ExperimentExport {
    /// Builds an export from a finished experiment.
    pub fn from_result(result: &ExperimentResult) -> Self {
        Self {
            grid_size: result.grid_size,
            seed: result.seed,
            trials: result.outcomes.clone(),
            summary: result.summary().ok(),
        }
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
