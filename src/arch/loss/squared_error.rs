use super::LossFn;

/// Squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct SquaredError;

impl SquaredError {
    /// Returns a new `SquaredError`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for SquaredError {
    fn forward(&self, target: f32, predicted: f32) -> f32 {
        let diff = target - predicted;
        diff * diff
    }

    fn backward(&self, target: f32, predicted: f32) -> f32 {
        -2.0 * (predicted - target)
    }
}
