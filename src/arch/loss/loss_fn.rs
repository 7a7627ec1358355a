/// A scalar loss function and its derivative.
///
/// Both methods take their arguments in the same `(target, predicted)` order.
pub trait LossFn {
    /// Returns the loss of `predicted` against `target`.
    fn forward(&self, target: f32, predicted: f32) -> f32;

    /// Returns the derivative of the loss, evaluated at `(target, predicted)`, that is fed
    /// backwards into the layer.
    fn backward(&self, target: f32, predicted: f32) -> f32;
}
