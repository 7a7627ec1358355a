use std::{io::Write, num::NonZeroUsize};

use log::{debug, info};

use super::EpochReport;
use crate::{
    arch::{
        loss::{LossFn, SquaredError},
        LinearLayer,
    },
    dataset::Dataset,
    display::{Compact, Pair},
    optimization::{GradientDescent, Optimizer},
    stats, Result, TrainError, TrainingConfig,
};

/// Batch gradient descent over a fixed dataset.
///
/// Every epoch visits the points in order, accumulates one error and one gradient per point, and
/// updates the layer once with the averaged gradient. The run trace is written line by line to the
/// sink given to `train`.
pub struct Trainer<L, O>
where
    L: LossFn,
    O: Optimizer,
{
    layer: LinearLayer,
    optimizer: O,
    dataset: Dataset,
    loss_fn: L,

    epochs: NonZeroUsize,
}

impl Trainer<SquaredError, GradientDescent> {
    /// Builds the squared error, gradient descent trainer described by `cfg`.
    ///
    /// # Errors
    /// `TrainError::InvalidInput` if `cfg` doesn't validate.
    pub fn from_config(cfg: &TrainingConfig) -> Result<Self> {
        cfg.validate()?;

        Ok(Self::new(
            LinearLayer::new(cfg.initial_weights, cfg.bias),
            GradientDescent::new(cfg.learning_rate),
            Dataset::from_rows(&cfg.dataset)?,
            cfg.epochs,
            SquaredError,
        ))
    }
}

impl<L, O> Trainer<L, O>
where
    L: LossFn,
    O: Optimizer,
{
    /// Returns a new `Trainer`.
    ///
    /// # Arguments
    /// * `layer` - The layer that will be trained.
    /// * `optimizer` - Applies the averaged gradient at the end of each epoch.
    /// * `dataset` - The points visited every epoch.
    /// * `epochs` - The amount of sweeps over `dataset`.
    /// * `loss_fn` - Measures the difference between a prediction and its target.
    pub fn new(
        layer: LinearLayer,
        optimizer: O,
        dataset: Dataset,
        epochs: NonZeroUsize,
        loss_fn: L,
    ) -> Self {
        Self {
            layer,
            optimizer,
            dataset,
            loss_fn,
            epochs,
        }
    }

    pub fn layer(&self) -> &LinearLayer {
        &self.layer
    }

    /// Runs every epoch.
    ///
    /// # Returns
    /// One report per epoch, in order.
    ///
    /// # Errors
    /// Whatever `run_epoch` fails with; the run stops at the first failing epoch.
    pub fn train<W: Write>(&mut self, out: &mut W) -> Result<Vec<EpochReport>> {
        let epochs = self.epochs.get();
        let mut reports = Vec::with_capacity(epochs);

        for epoch in 0..epochs {
            reports.push(self.run_epoch(epoch, out)?);
        }

        let [w0, w1] = self.layer.weights();
        info!(epochs = epochs, w0 = w0, w1 = w1; "training finished");
        Ok(reports)
    }

    /// Sweeps the dataset once and updates the layer with the averaged gradient.
    ///
    /// # Arguments
    /// * `epoch` - The number printed on the epoch's trace.
    /// * `out` - The trace sink.
    ///
    /// # Errors
    /// * `TrainError::NumericalInstability` if the averaged error or gradient isn't finite, in
    ///   which case the weights are left untouched.
    /// * `TrainError::Io` if `out` can't be written.
    pub fn run_epoch<W: Write>(&mut self, epoch: usize, out: &mut W) -> Result<EpochReport> {
        writeln!(out, "----START EPOCH {epoch}----")?;

        let mut errors = Vec::with_capacity(self.dataset.len());
        let mut grads = Vec::with_capacity(self.dataset.len());

        for (x, y) in self.dataset.iter() {
            writeln!(out, "--START ITER --")?;
            writeln!(out, "x = {} y = {}", Compact(x), Compact(y))?;

            let prediction = self.layer.forward(x);
            writeln!(out, "prediction = {}", Compact(prediction))?;

            let error = self.loss_fn.forward(y, prediction);
            writeln!(out, "error = {}", Compact(error))?;

            // the trace line carries the error, the derivative only reaches the log
            let dedl = self.loss_fn.backward(y, prediction);
            writeln!(out, "dedl = {}", Compact(error))?;
            debug!(epoch = epoch, x = x, dedl = dedl; "backward pass");

            let grad = self.layer.backward(x, dedl);
            writeln!(out, "gradient = {}", Pair(&grad))?;

            errors.push(error);
            grads.push(grad);

            writeln!(out, "--END ITER --")?;
        }

        let avg_error = stats::average(&errors)?;
        writeln!(out, "avgError = {}", Compact(avg_error))?;

        let avg_gradient = stats::average_gradients(&grads)?;
        writeln!(out, "average gradient = {}", Pair(&avg_gradient))?;

        ensure_finite("average error", avg_error)?;
        for &g in &avg_gradient {
            ensure_finite("average gradient", g)?;
        }

        self.optimizer.update(&mut self.layer, &avg_gradient)?;

        let weights = self.layer.weights();
        writeln!(out, "new weights = {}", Pair(&weights))?;
        writeln!(out, "----END EPOCH {epoch}----")?;

        Ok(EpochReport {
            epoch,
            avg_error,
            avg_gradient,
            weights,
        })
    }
}

fn ensure_finite(what: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TrainError::NumericalInstability { what, value })
    }
}
