/// Maps `(label, feature)` pairs and label bigrams into a flat weight vector.
///
/// Flat layout: `[emissions of label 0 | ... | emissions of label n-1 | transitions]`, where the
/// transition block only exists when `transitions` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    n_features: usize,
    n_labels: usize,
    transitions: bool,
}

impl Layout {
    /// Creates a layout without transition weights.
    pub fn new(n_features: usize, n_labels: usize) -> Self {
        Self {
            n_features,
            n_labels,
            transitions: false,
        }
    }

    /// Creates a layout with a `n_labels x n_labels` block of transition weights.
    pub fn with_transitions(n_features: usize, n_labels: usize) -> Self {
        Self {
            transitions: true,
            ..Self::new(n_features, n_labels)
        }
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn n_labels(&self) -> usize {
        self.n_labels
    }

    /// The index of the weight joining `feature` with `label`.
    ///
    /// # Panics
    /// If `label` or `feature` is not part of this layout.
    pub fn emission(&self, label: usize, feature: usize) -> usize {
        assert!(
            label < self.n_labels && feature < self.n_features,
            "unresolved emission: label {label}, feature {feature} in a {}x{} layout",
            self.n_labels,
            self.n_features
        );

        label * self.n_features + feature
    }

    /// The index of the weight for the label bigram `(prev, cur)`.
    ///
    /// # Panics
    /// If the layout has no transitions or either label is not part of it.
    pub fn transition(&self, prev: usize, cur: usize) -> usize {
        assert!(
            self.transitions && prev < self.n_labels && cur < self.n_labels,
            "unresolved transition: ({prev}, {cur}) with {} labels",
            self.n_labels
        );

        self.n_labels * self.n_features + prev * self.n_labels + cur
    }

    /// The length of the weight vector this layout describes.
    pub fn dim(&self) -> usize {
        let emissions = self.n_labels * self.n_features;
        if self.transitions {
            emissions + self.n_labels * self.n_labels
        } else {
            emissions
        }
    }

    /// Sums the emission weights of `label` over the active `features`.
    ///
    /// Features outside of the layout are ignored.
    pub fn score(&self, weights: &[f32], label: usize, features: &[usize]) -> f32 {
        features
            .iter()
            .filter(|&&f| f < self.n_features)
            .filter_map(|&f| weights.get(self.emission(label, f)))
            .sum()
    }
}
