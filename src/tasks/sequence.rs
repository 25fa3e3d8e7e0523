use super::Layout;
use crate::{
    instance::SequenceSample,
    training::Decoder,
    update::{Margin, MarginStrategy},
};

/// Margin strategy for first order sequence labelling.
///
/// The required margin is the amount of mislabelled positions. Every mislabelled position
/// registers its emission pairs, and every position whose label bigram differs registers its
/// transition pair.
#[derive(Debug, Clone, Copy)]
pub struct SequenceDiff {
    layout: Layout,
}

impl SequenceDiff {
    pub fn new(n_features: usize, n_labels: usize) -> Self {
        Self {
            layout: Layout::with_transitions(n_features, n_labels),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }
}

impl MarginStrategy<SequenceSample> for SequenceDiff {
    fn diff(
        &self,
        inst: &SequenceSample,
        weights: &[f32],
        target: &Vec<usize>,
        predicted: &Vec<usize>,
        margin: &mut Margin,
    ) -> u32 {
        let features = inst.features();
        assert!(
            target.len() == features.len() && predicted.len() == features.len(),
            "sequence length mismatch: {} positions, {} reference labels, {} predicted labels",
            features.len(),
            target.len(),
            predicted.len()
        );

        let layout = &self.layout;
        let mut required = 0;

        for (i, active) in features.iter().enumerate() {
            let (t, p) = (target[i], predicted[i]);

            if t != p {
                required += 1;
                for &f in active {
                    margin.adjust(weights, layout.emission(t, f), layout.emission(p, f));
                }
            }

            if i > 0 {
                let (t_prev, p_prev) = (target[i - 1], predicted[i - 1]);
                if (t_prev, t) != (p_prev, p) {
                    margin.adjust(
                        weights,
                        layout.transition(t_prev, t),
                        layout.transition(p_prev, p),
                    );
                }
            }
        }

        required
    }
}

/// Exact first order Viterbi decoding over emission and transition weights.
#[derive(Debug, Clone, Copy)]
pub struct ViterbiDecoder {
    layout: Layout,
}

impl ViterbiDecoder {
    pub fn new(n_features: usize, n_labels: usize) -> Self {
        Self {
            layout: Layout::with_transitions(n_features, n_labels),
        }
    }

    fn transition(&self, weights: &[f32], prev: usize, cur: usize) -> f32 {
        weights
            .get(self.layout.transition(prev, cur))
            .copied()
            .unwrap_or_default()
    }
}

impl Decoder<SequenceSample> for ViterbiDecoder {
    fn dim(&self) -> usize {
        self.layout.dim()
    }

    fn decode(&self, inst: &SequenceSample, weights: &[f32]) -> Vec<usize> {
        let features = inst.features();
        let n_labels = self.layout.n_labels();
        if features.is_empty() || n_labels == 0 {
            return vec![0; features.len()];
        }

        // best[l]: score of the best path ending in label l at the current position
        let mut best: Vec<f32> = (0..n_labels)
            .map(|l| self.layout.score(weights, l, &features[0]))
            .collect();
        let mut back = vec![vec![0; n_labels]; features.len()];

        for (i, active) in features.iter().enumerate().skip(1) {
            let mut next = vec![f32::NEG_INFINITY; n_labels];

            for (cur, score) in next.iter_mut().enumerate() {
                let emission = self.layout.score(weights, cur, active);
                for (prev, &prev_score) in best.iter().enumerate() {
                    let candidate = prev_score + self.transition(weights, prev, cur) + emission;
                    if candidate > *score {
                        *score = candidate;
                        back[i][cur] = prev;
                    }
                }
            }

            best = next;
        }

        let mut last = 0;
        for (l, &score) in best.iter().enumerate() {
            if score > best[last] {
                last = l;
            }
        }

        let mut path = vec![0; features.len()];
        path[features.len() - 1] = last;
        for i in (1..features.len()).rev() {
            path[i - 1] = back[i][path[i]];
        }

        path
    }
}
