mod decoder;
mod stats;
mod trainer;

pub use decoder::Decoder;
pub use stats::EpochStats;
pub use trainer::Trainer;
