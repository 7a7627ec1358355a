use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::{Result, TrainError};

const LEARNING_RATE: f32 = 0.01;
const EPOCHS: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};
const BIAS: f32 = 1.0;
const INITIAL_WEIGHTS: [f32; 2] = [-0.5, 2.5];
const DATASET: [[f32; 2]; 2] = [[2.0, 3.0], [4.0, 5.0]];

/// Everything a training run depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub learning_rate: f32,
    pub epochs: NonZeroUsize,
    pub bias: f32,
    pub initial_weights: [f32; 2],
    /// `[x, y]` rows, visited in this order every epoch.
    pub dataset: Vec<[f32; 2]>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: LEARNING_RATE,
            epochs: EPOCHS,
            bias: BIAS,
            initial_weights: INITIAL_WEIGHTS,
            dataset: DATASET.to_vec(),
        }
    }
}

impl TrainingConfig {
    /// Checks the configuration can drive a run.
    ///
    /// # Errors
    /// `TrainError::InvalidInput` if the dataset is empty or a scalar parameter isn't finite.
    pub fn validate(&self) -> Result<()> {
        if self.dataset.is_empty() {
            return Err(TrainError::InvalidInput("the dataset has no points"));
        }

        if !self.learning_rate.is_finite() {
            return Err(TrainError::InvalidInput("the learning rate must be finite"));
        }

        if !self.bias.is_finite() || !self.initial_weights.iter().all(|w| w.is_finite()) {
            return Err(TrainError::InvalidInput("the initial parameters must be finite"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_is_the_reference_run() {
        let cfg = TrainingConfig::default();
        assert_eq!(cfg.learning_rate, 0.01);
        assert_eq!(cfg.epochs.get(), 10);
        assert_eq!(cfg.bias, 1.0);
        assert_eq!(cfg.initial_weights, [-0.5, 2.5]);
        assert_eq!(cfg.dataset, vec![[2.0, 3.0], [4.0, 5.0]]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let mut cfg = TrainingConfig::default();
        cfg.dataset.clear();
        assert!(matches!(cfg.validate(), Err(TrainError::InvalidInput(_))));

        let cfg = TrainingConfig {
            learning_rate: f32::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = TrainingConfig {
            initial_weights: [f32::INFINITY, 0.0],
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(TrainingConfig::default()).unwrap();
        assert_eq!(json["epochs"], 10);
        assert_eq!(json["dataset"][1][0], 4.0);

        let back: TrainingConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, TrainingConfig::default());
    }
}
