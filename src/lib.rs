//! Online Passive-Aggressive learning for binary, multiclass and structured prediction.
//!
//! After every training instance the dense weight vector is moved along the sparse difference
//! between the reference and the predicted feature activations, by the smallest step that
//! restores the required margin, capped by an aggressiveness bound (PA-I).

pub mod config;
pub mod error;
pub mod instance;
pub mod loss;
pub mod sparse;
pub mod tasks;
pub mod training;
pub mod update;

pub use config::{TrainingConfig, UpdateConfig};
pub use error::{PaError, Result};
pub use instance::{Instance, Sample};
pub use sparse::SparseAccumulator;
pub use update::{Margin, MarginStrategy, PassiveAggressive, Update};
