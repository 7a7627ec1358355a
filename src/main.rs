use std::io::{self, Write};

use anyhow::Context;
use linear_descent::{training::Trainer, TrainingConfig};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = TrainingConfig::default();
    info!("training config: {}", serde_json::to_string(&cfg)?);

    let mut trainer = Trainer::from_config(&cfg).context("invalid training config")?;

    let mut out = io::stdout().lock();
    let reports = trainer.train(&mut out).context("training failed")?;
    out.flush()?;

    if let Some(last) = reports.last() {
        info!(
            "last epoch {}: avg error {}, weights {:?}",
            last.epoch, last.avg_error, last.weights
        );
    }

    Ok(())
}
