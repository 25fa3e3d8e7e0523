use super::Layout;
use crate::{
    instance::MulticlassSample,
    training::Decoder,
    update::{Margin, MarginStrategy},
};

/// Margin strategy for single label, many class classification.
#[derive(Debug, Clone, Copy)]
pub struct MulticlassDiff {
    layout: Layout,
}

impl MulticlassDiff {
    pub fn new(n_features: usize, n_labels: usize) -> Self {
        Self {
            layout: Layout::new(n_features, n_labels),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }
}

impl MarginStrategy<MulticlassSample> for MulticlassDiff {
    fn diff(
        &self,
        inst: &MulticlassSample,
        weights: &[f32],
        target: &usize,
        predicted: &usize,
        margin: &mut Margin,
    ) -> u32 {
        if target == predicted {
            return 0;
        }

        for &f in inst.features() {
            margin.adjust(
                weights,
                self.layout.emission(*target, f),
                self.layout.emission(*predicted, f),
            );
        }

        1
    }
}

/// Predicts the highest scoring label, ties go to the lowest one.
#[derive(Debug, Clone, Copy)]
pub struct MulticlassDecoder {
    layout: Layout,
}

impl MulticlassDecoder {
    pub fn new(n_features: usize, n_labels: usize) -> Self {
        Self {
            layout: Layout::new(n_features, n_labels),
        }
    }
}

impl Decoder<MulticlassSample> for MulticlassDecoder {
    fn dim(&self) -> usize {
        self.layout.dim()
    }

    fn decode(&self, inst: &MulticlassSample, weights: &[f32]) -> usize {
        let mut best = (0, f32::NEG_INFINITY);
        for label in 0..self.layout.n_labels() {
            let score = self.layout.score(weights, label, inst.features());
            if score > best.1 {
                best = (label, score);
            }
        }

        best.0
    }
}
