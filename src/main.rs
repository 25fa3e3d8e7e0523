use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use passive_aggressive::{
    instance::MulticlassSample,
    loss::ZeroOneLoss,
    tasks::{MulticlassDecoder, MulticlassDiff},
    training::{Decoder, Trainer},
    Instance, PassiveAggressive, TrainingConfig,
};

const N_LABELS: usize = 4;
const N_FEATURES: usize = 32;

/// Every label owns a few indicator features, the rest is shared noise.
fn synthetic(n: usize, rng: &mut impl Rng) -> Vec<MulticlassSample> {
    (0..n)
        .map(|_| {
            let label = rng.random_range(0..N_LABELS);
            let mut features = vec![label * 4 + rng.random_range(0..4)];
            features.extend((0..3).map(|_| 16 + rng.random_range(0..16)));
            MulticlassSample::new(features, label)
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => TrainingConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => TrainingConfig::default(),
    };

    let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(0));
    let train = synthetic(400, &mut rng);
    let test = synthetic(100, &mut rng);

    let updater = PassiveAggressive::from_config(
        MulticlassDiff::new(N_FEATURES, N_LABELS),
        ZeroOneLoss,
        &config.update,
    );
    let decoder = MulticlassDecoder::new(N_FEATURES, N_LABELS);
    let mut trainer = Trainer::seeded(updater, decoder, config)?;
    let mut weights = vec![0.; decoder.dim()];

    let history = trainer.train(&train, &mut weights)?;
    if let Some(last) = history.last() {
        info!("last epoch mistake rate: {:.3}", last.mistake_rate());
    }

    let correct = test
        .iter()
        .filter(|s| decoder.decode(*s, &weights) == *s.target())
        .count();
    info!(
        "test accuracy: {:.3} ({:?})",
        correct as f32 / test.len() as f32,
        trainer.updater().stats()
    );

    Ok(())
}
