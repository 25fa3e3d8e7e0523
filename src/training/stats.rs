/// Statistics produced by a single training epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EpochStats {
    epoch: usize,
    samples: usize,
    mistakes: usize,
    loss: f32,
}

impl EpochStats {
    /// Creates a new `EpochStats`.
    ///
    /// # Args
    /// * `epoch` - Zero based index of the epoch.
    /// * `samples` - Number of samples visited.
    /// * `mistakes` - Number of samples predicted with a non zero loss.
    /// * `loss` - Sum of the losses of every visited sample.
    pub fn new(epoch: usize, samples: usize, mistakes: usize, loss: f32) -> Self {
        Self {
            epoch,
            samples,
            mistakes,
            loss,
        }
    }

    pub fn epoch(&self) -> usize {
        self.epoch
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    /// The accumulated loss of the epoch.
    pub fn loss(&self) -> f32 {
        self.loss
    }

    /// The fraction of samples predicted with a non zero loss, `0.0` for an empty epoch.
    pub fn mistake_rate(&self) -> f32 {
        if self.samples == 0 {
            return 0.;
        }

        self.mistakes as f32 / self.samples as f32
    }
}
