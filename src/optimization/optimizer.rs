use crate::{arch::LinearLayer, Result};

pub trait Optimizer {
    /// Takes one step on `layer`'s weights given the averaged gradient `grad`.
    fn update(&mut self, layer: &mut LinearLayer, grad: &[f32]) -> Result<()>;
}
