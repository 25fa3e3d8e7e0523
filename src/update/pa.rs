use log::{debug, trace, warn};

use super::{Margin, MarginStrategy, Update, UpdateStats};
use crate::{config::UpdateConfig, instance::Instance, loss::Loss};

/// Passive-Aggressive (PA-I) update rule.
///
/// Given the difference `Φ(x, y) - Φ(x, ŷ)` between the reference and the predicted feature
/// activations, the weights are moved along that difference by
///
/// `α = min(C, (margin - wᵀ(Φ(x, y) - Φ(x, ŷ))) / ||Φ(x, y) - Φ(x, ŷ)||²)`
///
/// which is the smallest step restoring the required margin, capped by the aggressiveness
/// bound `C`. When the margin is already satisfied the weights are left untouched.
///
/// The updater owns a single `Margin` buffer reused across calls, so it must not be shared
/// between concurrent trainers; give every worker its own updater and weight vector.
#[derive(Debug)]
pub struct PassiveAggressive<S, L> {
    margin: Margin,
    strategy: S,
    loss: L,
    use_instance_weight: bool,
    stats: UpdateStats,
}

impl<S, L> PassiveAggressive<S, L> {
    /// Creates a new `PassiveAggressive` updater that ignores instance weights.
    ///
    /// # Arguments
    /// * `strategy` - Computes the margin requirement and the differing indices.
    /// * `loss` - Scores the predictions for the returned loss.
    pub fn new(strategy: S, loss: L) -> Self {
        Self {
            margin: Margin::new(),
            strategy,
            loss,
            use_instance_weight: false,
            stats: UpdateStats::default(),
        }
    }

    /// Creates a new `PassiveAggressive` updater following `config`.
    ///
    /// The aggressiveness bound is passed on every update, only the weighting flag is taken.
    pub fn from_config(strategy: S, loss: L, config: &UpdateConfig) -> Self {
        Self::new(strategy, loss).with_instance_weight(config.use_instance_weight)
    }

    /// Sets whether the instance weight scales the step size.
    pub fn with_instance_weight(mut self, enabled: bool) -> Self {
        self.use_instance_weight = enabled;
        self
    }

    pub fn uses_instance_weight(&self) -> bool {
        self.use_instance_weight
    }

    /// The margin buffer, empty between updates.
    pub fn margin(&self) -> &Margin {
        &self.margin
    }

    pub fn stats(&self) -> UpdateStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = UpdateStats::default();
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Moves the weights along the registered difference, if the margin allows it.
    fn step(&mut self, weights: &mut [f32], required: u32, instance_weight: f32, c: f32) {
        let required = required as f32;
        let gap = self.margin.score_gap();
        let lambda = self.margin.diff().squared_norm();

        if lambda == 0. {
            debug!(required = required, gap = gap; "zero norm difference, skipping step");
            self.stats.degenerate += 1;
            return;
        }

        if gap > required {
            warn!(required = required, gap = gap; "score gap exceeds margin requirement, skipping step");
            self.stats.skipped += 1;
            return;
        }

        let mut alpha = (required - gap) / lambda;
        if self.use_instance_weight {
            alpha *= instance_weight;
        }

        let clipped = alpha > c;
        if clipped {
            alpha = c;
            self.stats.clipped += 1;
        }

        debug!(
            required = required,
            gap = gap,
            lambda = lambda,
            alpha = alpha,
            clipped = clipped;
            "aggressive step"
        );

        for (idx, coef) in self.margin.diff().iter() {
            weights[idx] += coef * alpha;
        }
        self.stats.aggressive += 1;
    }
}

impl<I, S, L> Update<I> for PassiveAggressive<S, L>
where
    I: Instance,
    S: MarginStrategy<I>,
    L: Loss<I::Label>,
{
    fn update_against(
        &mut self,
        inst: &I,
        weights: &mut [f32],
        target: &I::Label,
        predicted: &I::Label,
        aggressiveness: f32,
    ) -> f32 {
        assert!(
            !aggressiveness.is_nan(),
            "aggressiveness bound must not be NaN"
        );

        let required = self
            .strategy
            .diff(inst, weights, target, predicted, &mut self.margin);

        if required == 0 {
            trace!("margin satisfied, passive step");
            self.margin.reset();
            self.stats.passive += 1;
            return 0.;
        }

        self.step(weights, required, inst.weight(), aggressiveness);

        let loss = self.loss.calc(target, predicted);
        self.margin.reset();
        loss
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        instance::{MulticlassSample, Sample},
        loss::ZeroOneLoss,
    };

    type Pair = Sample<(), (usize, usize)>;

    /// Registers the `(reference, predicted)` pair held as label, requiring a margin of 1.
    fn pair_diff(
        _: &Pair,
        weights: &[f32],
        target: &(usize, usize),
        predicted: &(usize, usize),
        margin: &mut Margin,
    ) -> u32 {
        if target == predicted {
            return 0;
        }

        margin.adjust(weights, target.0, predicted.1);
        1
    }

    fn pair(reference: usize, predicted: usize) -> (Pair, (usize, usize)) {
        (
            Sample::new((), (reference, reference)),
            (predicted, predicted),
        )
    }

    #[test]
    fn passive_branch_leaves_weights_untouched() {
        let mut updater = PassiveAggressive::new(pair_diff, ZeroOneLoss);
        let mut weights = [0.25; 4];
        let (inst, _) = pair(1, 2);

        let loss = updater.update(&inst, &mut weights, &(1, 1), 1.);

        assert_eq!(loss, 0.);
        assert_eq!(weights, [0.25; 4]);
        assert!(updater.margin().is_clear());
        assert_eq!(updater.stats().passive, 1);
    }

    #[test]
    fn closed_form_step() {
        let mut updater = PassiveAggressive::new(pair_diff, ZeroOneLoss);
        let mut weights = [0., 0.5, 0., 0.25];
        let (inst, predicted) = pair(1, 3);

        // gap = 0.5 - 0.25, lambda = 2
        let loss = updater.update(&inst, &mut weights, &predicted, 10.);
        let alpha = (1. - 0.25) / 2.;

        assert_eq!(loss, 1.);
        assert!((weights[1] - (0.5 + alpha)).abs() < 1e-6);
        assert!((weights[3] - (0.25 - alpha)).abs() < 1e-6);
        assert_eq!(updater.stats().aggressive, 1);
        assert_eq!(updater.stats().clipped, 0);
    }

    #[test]
    fn step_is_clipped_to_aggressiveness() {
        let mut updater = PassiveAggressive::new(pair_diff, ZeroOneLoss);
        let mut weights = [0.; 4];
        let (inst, predicted) = pair(0, 2);

        updater.update(&inst, &mut weights, &predicted, 0.1);

        assert_eq!(weights, [0.1, 0., -0.1, 0.]);
        assert_eq!(updater.stats().clipped, 1);
    }

    #[test]
    #[should_panic(expected = "aggressiveness bound must not be NaN")]
    fn nan_aggressiveness_panics() {
        let mut updater = PassiveAggressive::new(pair_diff, ZeroOneLoss);
        let mut weights = [0.; 4];
        let (inst, predicted) = pair(0, 2);

        updater.update(&inst, &mut weights, &predicted, f32::NAN);
    }

    #[test]
    fn large_gap_skips_step_but_reports_loss() {
        let mut updater = PassiveAggressive::new(pair_diff, ZeroOneLoss);
        let mut weights = [5., 0., 0., 0.];
        let (inst, predicted) = pair(0, 1);

        let loss = updater.update(&inst, &mut weights, &predicted, 1.);

        assert_eq!(loss, 1.);
        assert_eq!(weights, [5., 0., 0., 0.]);
        assert_eq!(updater.stats().skipped, 1);
        assert!(updater.margin().is_clear());
    }

    #[test]
    fn instance_weight_is_ignored_unless_enabled() {
        let inst = MulticlassSample::new(vec![], 0).with_weight(0.).unwrap();
        let diff = |_: &MulticlassSample, w: &[f32], _: &usize, _: &usize, m: &mut Margin| -> u32 {
            m.adjust(w, 0, 1);
            1
        };

        let mut weights = [0.; 2];
        let mut updater = PassiveAggressive::new(diff, ZeroOneLoss);
        updater.update(&inst, &mut weights, &1, 1.);
        assert_eq!(weights, [0.5, -0.5]);

        let mut weights = [0.; 2];
        let mut updater = PassiveAggressive::new(diff, ZeroOneLoss).with_instance_weight(true);
        updater.update(&inst, &mut weights, &1, 1.);
        assert_eq!(weights, [0., 0.]);
    }

    #[test]
    fn from_config_takes_weighting_flag() {
        let config = UpdateConfig {
            aggressiveness: 0.5,
            use_instance_weight: true,
        };
        let updater = PassiveAggressive::from_config(pair_diff, ZeroOneLoss, &config);

        assert!(updater.uses_instance_weight());
    }
}
