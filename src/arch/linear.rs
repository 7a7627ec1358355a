/// Number of weights held by a `LinearLayer`.
pub const NUM_WEIGHTS: usize = 2;

/// Single input, single output linear layer with a constant bias input.
///
/// Computes `w0 * x + w1 * bias`, where `w0` multiplies the input feature and `w1` multiplies the
/// bias input.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearLayer {
    bias: f32,
    weights: [f32; NUM_WEIGHTS],
}

impl LinearLayer {
    /// Returns a new `LinearLayer`.
    ///
    /// # Arguments
    /// * `weights` - The initial `[w0, w1]` pair.
    /// * `bias` - The constant bias input, never modified afterwards.
    pub fn new(weights: [f32; NUM_WEIGHTS], bias: f32) -> Self {
        Self { bias, weights }
    }

    /// The current `[w0, w1]` pair.
    pub fn weights(&self) -> [f32; NUM_WEIGHTS] {
        self.weights
    }

    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Computes the prediction for input `x`.
    pub fn forward(&self, x: f32) -> f32 {
        let [w0, w1] = self.weights;
        w0 * x + w1 * self.bias
    }

    /// Computes the gradient of the error with respect to `[w0, w1]`.
    ///
    /// # Arguments
    /// * `x` - The input given to the matching `forward` call.
    /// * `d` - The derivative of the error with respect to this layer's output.
    ///
    /// # Returns
    /// `[d * x, d * bias]`.
    pub fn backward(&self, x: f32, d: f32) -> [f32; NUM_WEIGHTS] {
        // the local derivatives of the output wrt w0 and w1 are x and bias
        [d * x, d * self.bias]
    }

    /// Subtracts `delta_w0` and `delta_w1` from the weights, in place.
    pub fn apply_update(&mut self, delta_w0: f32, delta_w1: f32) {
        self.weights[0] -= delta_w0;
        self.weights[1] -= delta_w1;
    }
}
