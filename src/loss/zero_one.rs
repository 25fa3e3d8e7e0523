use super::Loss;

/// Zero-one loss, `0.0` for a correct prediction and `1.0` otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroOneLoss;

impl ZeroOneLoss {
    /// Returns a new `ZeroOneLoss`.
    pub fn new() -> Self {
        Self
    }
}

impl<T: PartialEq + ?Sized> Loss<T> for ZeroOneLoss {
    fn calc(&self, target: &T, predicted: &T) -> f32 {
        if target == predicted {
            0.
        } else {
            1.
        }
    }
}
