/// Scores how far a prediction is from its reference label.
///
/// Implementations must be pure, the updater only uses them to report the loss of a step.
pub trait Loss<T: ?Sized> {
    fn calc(&self, target: &T, predicted: &T) -> f32;
}
