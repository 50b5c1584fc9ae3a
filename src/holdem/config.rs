use std::time::Duration;

use crate::core::{EquityError, Result};

/// What happens to board cards that have not been dealt yet.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Runout {
    /// Rank everyone on the cards known right now. Needs at least a flop;
    /// a preflop board is always completed.
    #[default]
    Known,
    /// Deal the rest of the board in every trial from the cards nobody
    /// holds.
    Complete,
}

/// Knobs for one equity estimate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquityConfig {
    /// Number of Monte Carlo trials to run.
    pub trials: usize,
    /// Trials per batch. Each batch gets its own seeded rng, and batches are
    /// the unit of parallel work.
    pub batch_size: usize,
    /// Stop after this much wall time, keeping the trials that finished.
    pub deadline: Option<Duration>,
    pub runout: Runout,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            batch_size: 1_000,
            deadline: None,
            runout: Runout::Known,
        }
    }
}

impl EquityConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(EquityError::NoTrials);
        }
        if self.batch_size == 0 {
            return Err(EquityError::InvalidConfig(
                "batch_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of batches needed to cover every trial.
    pub(crate) fn num_batches(&self) -> usize {
        self.trials.div_ceil(self.batch_size)
    }

    /// Trials in batch `idx`. Only the last batch can be short.
    pub(crate) fn batch_trials(&self, idx: usize) -> usize {
        let start = idx * self.batch_size;
        self.batch_size.min(self.trials.saturating_sub(start))
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_equity::holdem::{EquityConfig, Runout};
    ///
    /// let config = EquityConfig::from_json(r#"{"trials": 500, "runout": "Complete"}"#).unwrap();
    /// assert_eq!(500, config.trials);
    /// assert_eq!(Runout::Complete, config.runout);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EquityError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
