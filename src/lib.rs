pub mod arch;
pub mod config;
pub mod dataset;
pub mod display;
pub mod error;
pub mod optimization;
pub mod stats;
pub mod training;

pub use config::TrainingConfig;
pub use error::{Result, TrainError};
