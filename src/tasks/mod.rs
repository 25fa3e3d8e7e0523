//! Margin strategies and decoders for concrete problem types.
//!
//! Every problem type shares the label-conjoined `Layout` of the weight vector, where each
//! label owns its own block of feature weights.

mod binary;
mod layout;
mod multiclass;
mod sequence;

pub use binary::{BinaryDecoder, BinaryDiff};
pub use layout::Layout;
pub use multiclass::{MulticlassDecoder, MulticlassDiff};
pub use sequence::{SequenceDiff, ViterbiDecoder};
