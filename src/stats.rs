use crate::{Result, TrainError};

/// Returns the arithmetic mean of `values`.
///
/// # Errors
/// `TrainError::InvalidInput` if `values` is empty.
pub fn average(values: &[f32]) -> Result<f32> {
    if values.is_empty() {
        return Err(TrainError::InvalidInput("cannot average an empty sequence"));
    }

    let sum: f32 = values.iter().sum();
    Ok(sum / values.len() as f32)
}

/// Returns the per-component mean of a batch of gradients.
///
/// # Arguments
/// * `grads` - The gradients, all of them with the length of the first one.
///
/// # Returns
/// A vector whose `i`-th component is the mean of the `i`-th components of `grads`.
///
/// # Errors
/// * `TrainError::InvalidInput` if `grads` is empty.
/// * `TrainError::ShapeMismatch` if some gradient's length differs from the first one's.
pub fn average_gradients<G: AsRef<[f32]>>(grads: &[G]) -> Result<Vec<f32>> {
    let Some(first) = grads.first() else {
        return Err(TrainError::InvalidInput("cannot average an empty gradient batch"));
    };

    let mut avgs = vec![0.0; first.as_ref().len()];
    for grad in grads {
        let grad = grad.as_ref();
        if grad.len() != avgs.len() {
            return Err(TrainError::ShapeMismatch {
                what: "gradient",
                got: grad.len(),
                expected: avgs.len(),
            });
        }

        avgs.iter_mut().zip(grad).for_each(|(a, g)| *a += g);
    }

    let n = grads.len() as f32;
    avgs.iter_mut().for_each(|a| *a /= n);
    Ok(avgs)
}
