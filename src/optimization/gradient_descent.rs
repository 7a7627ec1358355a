use log::debug;

use super::Optimizer;
use crate::{
    arch::{LinearLayer, NUM_WEIGHTS},
    Result, TrainError,
};

/// Gradient descent optimization algorithm.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f32,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update`.
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }
}

impl Optimizer for GradientDescent {
    /// Makes a step in the opposite direction of the gradient, with a length of `learning_rate`.
    ///
    /// # Errors
    /// `TrainError::ShapeMismatch` if `grad` doesn't have one component per weight.
    fn update(&mut self, layer: &mut LinearLayer, grad: &[f32]) -> Result<()> {
        let &[g0, g1] = grad else {
            return Err(TrainError::ShapeMismatch {
                what: "averaged gradient",
                got: grad.len(),
                expected: NUM_WEIGHTS,
            });
        };

        let lr = self.learning_rate();
        layer.apply_update(lr * g0, lr * g1);

        let [w0, w1] = layer.weights();
        debug!(lr = lr, w0 = w0, w1 = w1; "applied gradient descent step");
        Ok(())
    }
}
