use super::Loss;

/// Hamming loss over label sequences: the amount of positions holding different labels.
///
/// When the lengths differ every missing position counts as a mismatch.
#[derive(Debug, Default, Clone, Copy)]
pub struct HammingLoss;

impl HammingLoss {
    /// Returns a new `HammingLoss`.
    pub fn new() -> Self {
        Self
    }
}

impl<T: PartialEq> Loss<[T]> for HammingLoss {
    fn calc(&self, target: &[T], predicted: &[T]) -> f32 {
        let mismatches = target
            .iter()
            .zip(predicted)
            .filter(|(t, p)| t != p)
            .count();

        (mismatches + target.len().abs_diff(predicted.len())) as f32
    }
}

impl<T: PartialEq> Loss<Vec<T>> for HammingLoss {
    fn calc(&self, target: &Vec<T>, predicted: &Vec<T>) -> f32 {
        <Self as Loss<[T]>>::calc(self, target, predicted)
    }
}
