use log::info;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use super::{Decoder, EpochStats};
use crate::{config::TrainingConfig, instance::Instance, update::Update, PaError, Result};

/// Online trainer running a fixed amount of epochs over a set of instances.
///
/// Every instance is decoded with the current weights and the prediction is handed to the
/// updater, which moves the weights in place.
pub struct Trainer<U, D, R: Rng> {
    updater: U,
    decoder: D,
    config: TrainingConfig,
    rng: R,
}

impl<U, D> Trainer<U, D, StdRng> {
    /// Creates a new `Trainer` whose visiting order is driven by the config's seed, or by the
    /// operating system when there is none.
    ///
    /// # Returns
    /// An error if `config` is invalid.
    pub fn seeded(updater: U, decoder: D, config: TrainingConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self::new(updater, decoder, config, rng)
    }
}

impl<U, D, R: Rng> Trainer<U, D, R> {
    /// Creates a new `Trainer`.
    ///
    /// # Arguments
    /// * `updater` - The update rule.
    /// * `decoder` - Produces the predictions the updater learns from.
    /// * `config` - Epochs, aggressiveness and shuffling.
    /// * `rng` - Shuffles the visiting order of every epoch.
    ///
    /// # Returns
    /// An error if `config` is invalid.
    pub fn new(updater: U, decoder: D, config: TrainingConfig, rng: R) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            updater,
            decoder,
            config,
            rng,
        })
    }

    pub fn updater(&self) -> &U {
        &self.updater
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    pub fn into_updater(self) -> U {
        self.updater
    }

    /// Trains `weights` over `samples` for the configured amount of epochs.
    ///
    /// # Arguments
    /// * `samples` - The training set.
    /// * `weights` - The weights to train, updated in place.
    ///
    /// # Returns
    /// The statistics of every epoch, or a `SizeMismatch` error if `weights` doesn't have the
    /// length the decoder expects.
    pub fn train<I>(&mut self, samples: &[I], weights: &mut [f32]) -> Result<Vec<EpochStats>>
    where
        I: Instance,
        U: Update<I>,
        D: Decoder<I>,
    {
        let expected = self.decoder.dim();
        if weights.len() != expected {
            return Err(PaError::SizeMismatch {
                what: "weights",
                got: weights.len(),
                expected,
            });
        }

        let c = self.config.update.aggressiveness;
        let mut order: Vec<usize> = (0..samples.len()).collect();
        let mut history = Vec::with_capacity(self.config.epochs.get());

        for epoch in 0..self.config.epochs.get() {
            if self.config.shuffle {
                order.shuffle(&mut self.rng);
            }

            let mut mistakes = 0;
            let mut total_loss = 0.;

            for &idx in &order {
                let inst = &samples[idx];
                let predicted = self.decoder.decode(inst, weights);
                let loss = self.updater.update(inst, weights, &predicted, c);

                if loss > 0. {
                    mistakes += 1;
                }
                total_loss += loss;
            }

            let stats = EpochStats::new(epoch, samples.len(), mistakes, total_loss);
            info!(
                epoch = epoch,
                mistakes = mistakes,
                loss = total_loss;
                "epoch finished"
            );
            history.push(stats);
        }

        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::{
        config::UpdateConfig,
        instance::MulticlassSample,
        loss::ZeroOneLoss,
        tasks::{MulticlassDecoder, MulticlassDiff},
        update::PassiveAggressive,
    };

    fn config(epochs: usize) -> TrainingConfig {
        TrainingConfig {
            epochs: NonZeroUsize::new(epochs).unwrap(),
            update: UpdateConfig::default(),
            shuffle: true,
            seed: Some(42),
        }
    }

    #[test]
    fn rejects_wrong_weight_length() {
        let updater = PassiveAggressive::new(MulticlassDiff::new(2, 2), ZeroOneLoss);
        let decoder = MulticlassDecoder::new(2, 2);
        let mut trainer = Trainer::seeded(updater, decoder, config(1)).unwrap();

        let samples = [MulticlassSample::new(vec![0], 1)];
        let mut weights = [0.; 3];
        let err = trainer.train(&samples, &mut weights).unwrap_err();

        assert!(matches!(
            err,
            PaError::SizeMismatch {
                got: 3,
                expected: 4,
                ..
            }
        ));
    }

    #[test]
    fn rejects_invalid_config() {
        let updater = PassiveAggressive::new(MulticlassDiff::new(2, 2), ZeroOneLoss);
        let decoder = MulticlassDecoder::new(2, 2);
        let mut config = config(1);
        config.update.aggressiveness = -1.;

        assert!(Trainer::seeded(updater, decoder, config).is_err());
    }

    #[test]
    fn separable_problem_stops_making_mistakes() {
        let samples = [
            MulticlassSample::new(vec![0], 0),
            MulticlassSample::new(vec![1], 1),
            MulticlassSample::new(vec![2], 2),
            MulticlassSample::new(vec![0, 3], 0),
            MulticlassSample::new(vec![1, 3], 1),
            MulticlassSample::new(vec![2, 3], 2),
        ];
        let updater = PassiveAggressive::new(MulticlassDiff::new(4, 3), ZeroOneLoss);
        let decoder = MulticlassDecoder::new(4, 3);
        let mut trainer = Trainer::seeded(updater, decoder, config(5)).unwrap();
        let mut weights = vec![0.; 12];

        let history = trainer.train(&samples, &mut weights).unwrap();

        assert_eq!(history.len(), 5);
        assert!(history[0].mistakes() > 0);
        assert_eq!(history.last().unwrap().mistakes(), 0);
        assert_eq!(history.last().unwrap().mistake_rate(), 0.);
        for (i, s) in samples.iter().enumerate() {
            assert_eq!(trainer.decoder().decode(s, &weights), i % 3);
        }
    }
}
