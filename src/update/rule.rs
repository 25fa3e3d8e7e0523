use crate::instance::Instance;

/// An online update rule for a dense weight vector.
pub trait Update<I: Instance> {
    /// Updates `weights` after comparing `predicted` against an explicit reference label.
    ///
    /// # Arguments
    /// * `inst` - The instance being learned.
    /// * `weights` - The weights to update in place.
    /// * `target` - The reference label, which may differ from `inst.target()`.
    /// * `predicted` - The label predicted with the current `weights`.
    /// * `aggressiveness` - Upper bound for the step size.
    ///
    /// # Returns
    /// The loss between `target` and `predicted`.
    ///
    /// # Panics
    /// If `aggressiveness` is NaN, or if the margin strategy registers an index outside of
    /// `weights`.
    fn update_against(
        &mut self,
        inst: &I,
        weights: &mut [f32],
        target: &I::Label,
        predicted: &I::Label,
        aggressiveness: f32,
    ) -> f32;

    /// Updates `weights` using the instance's own target as reference.
    fn update(
        &mut self,
        inst: &I,
        weights: &mut [f32],
        predicted: &I::Label,
        aggressiveness: f32,
    ) -> f32 {
        self.update_against(inst, weights, inst.target(), predicted, aggressiveness)
    }
}
