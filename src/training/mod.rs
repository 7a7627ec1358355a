mod report;
mod trainer;

pub use report::EpochReport;
pub use trainer::Trainer;
