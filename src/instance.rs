use crate::{PaError, Result};

/// A training instance as seen by the updater.
pub trait Instance {
    /// The label (or label structure) this instance is annotated with.
    type Label;

    /// The reference label stored in the instance.
    fn target(&self) -> &Self::Label;

    /// The importance of this instance, always finite and non negative.
    fn weight(&self) -> f32 {
        1.
    }
}

/// An annotated sample holding its active features, its target and its weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<X, Y> {
    features: X,
    target: Y,
    weight: f32,
}

/// A sample with a single `bool` label.
pub type BinarySample = Sample<Vec<usize>, bool>;

/// A sample with a single label out of many.
pub type MulticlassSample = Sample<Vec<usize>, usize>;

/// A sample with one label and one set of active features per position.
pub type SequenceSample = Sample<Vec<Vec<usize>>, Vec<usize>>;

impl<X, Y> Sample<X, Y> {
    /// Creates a new `Sample` with a weight of `1.0`.
    ///
    /// # Arguments
    /// * `features` - The active features of the sample.
    /// * `target` - The reference label.
    pub fn new(features: X, target: Y) -> Self {
        Self {
            features,
            target,
            weight: 1.,
        }
    }

    /// Sets the weight of this sample.
    ///
    /// # Returns
    /// An `InvalidInstanceWeight` error if `weight` is negative or not finite.
    pub fn with_weight(mut self, weight: f32) -> Result<Self> {
        if !weight.is_finite() || weight < 0. {
            return Err(PaError::InvalidInstanceWeight(weight));
        }

        self.weight = weight;
        Ok(self)
    }

    pub fn features(&self) -> &X {
        &self.features
    }
}

impl<X, Y> Instance for Sample<X, Y> {
    type Label = Y;

    fn target(&self) -> &Y {
        &self.target
    }

    fn weight(&self) -> f32 {
        self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sample_has_unit_weight() {
        let sample = MulticlassSample::new(vec![1, 2], 3);

        assert_eq!(sample.weight(), 1.);
        assert_eq!(*sample.target(), 3);
        assert_eq!(sample.features(), &[1, 2]);
    }

    #[test]
    fn with_weight_accepts_zero() {
        let sample = BinarySample::new(vec![0], true).with_weight(0.).unwrap();
        assert_eq!(sample.weight(), 0.);
    }

    #[test]
    fn with_weight_rejects_negative_and_nan() {
        assert!(matches!(
            BinarySample::new(vec![0], true).with_weight(-0.5),
            Err(PaError::InvalidInstanceWeight(_))
        ));
        assert!(BinarySample::new(vec![0], true)
            .with_weight(f32::NAN)
            .is_err());
    }
}
