//! Deterministic per-trial seed derivation.

use crate::context::SimContext;

/// Derives an independent seed for every trial from one master seed.
///
/// Seeds are:
/// - Deterministic: same master seed always yields the same trial seeds
/// - Unique: each trial index gets a different seed
/// - Isolated: changing the trial count doesn't affect other trials' seeds
#[derive(Debug, Clone, Copy)]
pub struct TrialSeedProvider {
    /// Master seed
    master_seed: u64,
}

impl TrialSeedProvider {
    /// Creates a new provider with the given master seed.
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    /// Returns the master seed.
    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Seed for a trial: `master * golden + trial * prime` (wrapping).
    pub fn trial_seed(&self, trial: u64) -> u64 {
        self.master_seed
            .wrapping_mul(0x9e3779b97f4a7c15) // Golden ratio prime
            .wrapping_add(trial.wrapping_mul(0x517cc1b727220a95))
    }

    /// Fresh context for a trial.
    pub fn trial_context(&self, trial: u64) -> SimContext {
        SimContext::new(self.trial_seed(trial))
    }
}
