use crate::instance::Instance;

/// Produces the best scoring label for an instance under the current weights.
pub trait Decoder<I: Instance> {
    /// The weight vector length this decoder expects.
    fn dim(&self) -> usize;

    fn decode(&self, inst: &I, weights: &[f32]) -> I::Label;
}
