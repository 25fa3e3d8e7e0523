use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::{PaError, Result};

/// Hyperparameters of a single passive-aggressive update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateConfig {
    /// Upper bound for the step size (the `C` of PA-I).
    pub aggressiveness: f32,
    /// Whether the instance weight scales the step size.
    pub use_instance_weight: bool,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            aggressiveness: 1.,
            use_instance_weight: false,
        }
    }
}

impl UpdateConfig {
    /// Checks that the aggressiveness bound is finite and strictly positive.
    ///
    /// # Returns
    /// An `InvalidHyperparameter` error otherwise.
    pub fn validate(&self) -> Result<()> {
        let c = self.aggressiveness;
        if !c.is_finite() || c <= 0. {
            return Err(PaError::InvalidHyperparameter {
                param: "aggressiveness",
                value: c,
                constraint: "must be finite and greater than zero",
            });
        }

        Ok(())
    }
}

/// Configuration of the online trainer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub epochs: NonZeroUsize,
    pub update: UpdateConfig,
    /// Visit the instances in a different random order on every epoch.
    pub shuffle: bool,
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: NonZeroUsize::new(10).unwrap_or(NonZeroUsize::MIN),
            update: UpdateConfig::default(),
            shuffle: true,
            seed: None,
        }
    }
}

impl TrainingConfig {
    /// Parses and validates a training configuration from a JSON document.
    ///
    /// Missing fields take their default values.
    ///
    /// # Arguments
    /// * `json` - The JSON document.
    ///
    /// # Returns
    /// The parsed config, or a `Config` error if the document is malformed, or an
    /// `InvalidHyperparameter` error if it fails validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.update.validate()
    }
}
