use crate::sparse::SparseAccumulator;

/// The state a margin strategy fills during a single update.
///
/// Holds the difference between the reference and the predicted feature activations,
/// `Φ(x, y) - Φ(x, ŷ)`, and the current score gap `wᵀ(Φ(x, y) - Φ(x, ŷ))`. It is owned by
/// the updater and lent mutably to the strategy, so only one update can be filling it at a
/// time. The updater resets it at the end of every update.
#[derive(Debug, Clone, Default)]
pub struct Margin {
    diff: SparseAccumulator,
    score_gap: f32,
}

impl Margin {
    /// Creates a new empty `Margin`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pair of differing indices.
    ///
    /// Adds `1.0` to the reference coefficient, subtracts `1.0` from the predicted one and adds
    /// `weights[reference] - weights[predicted]` to the score gap. Repeated indices accumulate.
    ///
    /// # Arguments
    /// * `weights` - The current weights.
    /// * `reference` - The index activated by the reference label.
    /// * `predicted` - The index activated by the predicted label.
    ///
    /// # Panics
    /// If either index falls outside of `weights`.
    pub fn adjust(&mut self, weights: &[f32], reference: usize, predicted: usize) {
        assert!(
            reference < weights.len() && predicted < weights.len(),
            "unresolved index pair ({reference}, {predicted}) for {} weights",
            weights.len()
        );

        let diff = &mut self.diff;
        diff.set(reference, diff.get(reference) + 1.);
        diff.set(predicted, diff.get(predicted) - 1.);
        self.score_gap += weights[reference] - weights[predicted];
    }

    /// The sparse difference vector registered so far.
    pub fn diff(&self) -> &SparseAccumulator {
        &self.diff
    }

    /// The score gap accumulated so far.
    pub fn score_gap(&self) -> f32 {
        self.score_gap
    }

    pub fn is_clear(&self) -> bool {
        self.diff.is_empty() && self.score_gap == 0.
    }

    /// Empties the difference vector and zeroes the score gap.
    pub(crate) fn reset(&mut self) {
        self.diff.clear();
        self.score_gap = 0.;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_registers_pair() {
        let weights = [0., 2., 0., 0.5];
        let mut margin = Margin::new();
        margin.adjust(&weights, 1, 3);

        assert_eq!(margin.diff().get(1), 1.);
        assert_eq!(margin.diff().get(3), -1.);
        assert_eq!(margin.score_gap(), 1.5);
    }

    #[test]
    fn adjust_accumulates_repeated_indices() {
        let weights = [0.; 4];
        let mut margin = Margin::new();
        margin.adjust(&weights, 0, 1);
        margin.adjust(&weights, 0, 2);
        margin.adjust(&weights, 1, 0);

        assert_eq!(margin.diff().get(0), 1.);
        assert_eq!(margin.diff().get(1), 0.);
        assert_eq!(margin.diff().get(2), -1.);
        assert_eq!(margin.diff().len(), 2);
    }

    #[test]
    fn same_index_cancels_out() {
        let weights = [1.; 2];
        let mut margin = Margin::new();
        margin.adjust(&weights, 1, 1);

        assert!(margin.diff().is_empty());
        assert_eq!(margin.score_gap(), 0.);
    }

    #[test]
    #[should_panic(expected = "unresolved index pair")]
    fn out_of_range_index_panics() {
        let weights = [0.; 3];
        Margin::new().adjust(&weights, 0, 3);
    }

    #[test]
    fn reset_clears_everything() {
        let weights = [1., 0.];
        let mut margin = Margin::new();
        margin.adjust(&weights, 0, 1);
        assert!(!margin.is_clear());

        margin.reset();
        assert!(margin.is_clear());
    }
}
