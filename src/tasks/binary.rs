use super::Layout;
use crate::{
    instance::BinarySample,
    training::Decoder,
    update::{Margin, MarginStrategy},
};

/// Margin strategy for binary classification.
///
/// Negative and positive labels own the first and second block of feature weights.
#[derive(Debug, Clone, Copy)]
pub struct BinaryDiff {
    layout: Layout,
}

impl BinaryDiff {
    pub fn new(n_features: usize) -> Self {
        Self {
            layout: Layout::new(n_features, 2),
        }
    }
}

impl MarginStrategy<BinarySample> for BinaryDiff {
    fn diff(
        &self,
        inst: &BinarySample,
        weights: &[f32],
        target: &bool,
        predicted: &bool,
        margin: &mut Margin,
    ) -> u32 {
        if target == predicted {
            return 0;
        }

        let (t, p) = (usize::from(*target), usize::from(*predicted));
        for &f in inst.features() {
            margin.adjust(weights, self.layout.emission(t, f), self.layout.emission(p, f));
        }

        1
    }
}

/// Predicts the label whose block scores higher, ties go to `false`.
#[derive(Debug, Clone, Copy)]
pub struct BinaryDecoder {
    layout: Layout,
}

impl BinaryDecoder {
    pub fn new(n_features: usize) -> Self {
        Self {
            layout: Layout::new(n_features, 2),
        }
    }
}

impl Decoder<BinarySample> for BinaryDecoder {
    fn dim(&self) -> usize {
        self.layout.dim()
    }

    fn decode(&self, inst: &BinarySample, weights: &[f32]) -> bool {
        let negative = self.layout.score(weights, 0, inst.features());
        let positive = self.layout.score(weights, 1, inst.features());
        positive > negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_prediction_requires_no_margin() {
        let inst = BinarySample::new(vec![0, 2], true);
        let mut margin = Margin::new();

        let required = BinaryDiff::new(3).diff(&inst, &[0.; 6], &true, &true, &mut margin);

        assert_eq!(required, 0);
        assert!(margin.is_clear());
    }

    #[test]
    fn mistake_pairs_positive_and_negative_blocks() {
        let inst = BinarySample::new(vec![0, 2], true);
        let weights = [0., 0., 1., 0., 0., 0.5];
        let mut margin = Margin::new();

        let required = BinaryDiff::new(3).diff(&inst, &weights, &true, &false, &mut margin);

        assert_eq!(required, 1);
        assert_eq!(margin.diff().get(3), 1.);
        assert_eq!(margin.diff().get(5), 1.);
        assert_eq!(margin.diff().get(0), -1.);
        assert_eq!(margin.diff().get(2), -1.);
        assert_eq!(margin.score_gap(), -0.5);
    }

    #[test]
    fn decoder_breaks_ties_negative() {
        let decoder = BinaryDecoder::new(2);
        let inst = BinarySample::new(vec![1], true);

        assert!(!decoder.decode(&inst, &[0.; 4]));
        assert!(decoder.decode(&inst, &[0., 0., 0., 1.]));
        assert_eq!(decoder.dim(), 4);
    }
}
