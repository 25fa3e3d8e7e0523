use super::Margin;
use crate::instance::Instance;

/// Computes how badly a prediction violates the margin of an instance.
///
/// This is the piece that varies across problem types (binary, multiclass, sequence
/// labelling...). Every pair of differing feature indices must be registered through
/// `Margin::adjust`.
pub trait MarginStrategy<I: Instance> {
    /// Fills `margin` with the difference between `target` and `predicted`.
    ///
    /// # Arguments
    /// * `inst` - The instance being learned.
    /// * `weights` - The current weights, read only.
    /// * `target` - The reference label.
    /// * `predicted` - The predicted label.
    /// * `margin` - The buffer to register the differing index pairs in.
    ///
    /// # Returns
    /// The required margin, which must be `0` exactly when `predicted` already satisfies the
    /// margin constraint of `inst`.
    fn diff(
        &self,
        inst: &I,
        weights: &[f32],
        target: &I::Label,
        predicted: &I::Label,
        margin: &mut Margin,
    ) -> u32;
}

impl<I, F> MarginStrategy<I> for F
where
    I: Instance,
    F: Fn(&I, &[f32], &I::Label, &I::Label, &mut Margin) -> u32,
{
    fn diff(
        &self,
        inst: &I,
        weights: &[f32],
        target: &I::Label,
        predicted: &I::Label,
        margin: &mut Margin,
    ) -> u32 {
        self(inst, weights, target, predicted, margin)
    }
}
