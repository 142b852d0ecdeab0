//! Hill climbing execution loop.

use super::config::HcConfig;
use crate::domain::{random_neighbor, Bounds};
use crate::driver::{self, StepPolicy};
use crate::objective::Objective;
use rand::Rng;

/// Result of a Hill Climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcResult {
    /// The best point found. Equal to the final current point: only
    /// improving moves are ever accepted.
    pub best: Vec<f64>,

    /// Objective value of the best point.
    pub best_value: f64,

    /// Iterations executed (may stop short of the budget on convergence).
    pub iterations: usize,

    /// Objective evaluations, including the initial sample.
    pub evaluations: usize,

    /// Number of accepted (improving) moves.
    pub accepted_moves: usize,

    /// Perturbation radius when the search stopped.
    pub final_step_size: f64,

    /// Best value after the initial sample and after each iteration.
    pub value_history: Vec<f64>,
}

/// Executes Hill Climbing.
pub struct HcRunner;

impl HcRunner {
    /// Minimizes `objective` over `bounds`.
    ///
    /// Starts from a uniform random point. Each iteration perturbs the
    /// current point within the step radius and moves there only if the
    /// value improves by more than `epsilon`; otherwise the radius shrinks
    /// by `step_decay`. Stops early once the current value is within
    /// `epsilon` of zero, so objectives with minima away from zero run the
    /// full budget. Never worsens: the tracked value is non-increasing.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxopt::domain::Bounds;
    /// use boxopt::hc::{HcConfig, HcRunner};
    ///
    /// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
    /// let bounds = Bounds::from_pairs(&[(-5.0, 5.0), (-5.0, 5.0)]);
    ///
    /// let result = HcRunner::run(&sphere, &bounds, &HcConfig::default().with_seed(42));
    /// assert!(bounds.contains(&result.best));
    /// ```
    pub fn run<F: Objective>(objective: &F, bounds: &Bounds, config: &HcConfig) -> HcResult {
        let mut rng = driver::create_rng(config.seed);
        let mut policy = ClimbPolicy {
            step_size: config.initial_step_size,
            step_decay: config.step_decay,
            epsilon: config.epsilon,
        };

        let outcome = driver::run(&mut policy, objective, bounds, config.iterations, &mut rng);

        HcResult {
            best: outcome.best,
            best_value: outcome.best_value,
            iterations: outcome.iterations,
            evaluations: outcome.evaluations,
            accepted_moves: outcome.accepted_moves,
            final_step_size: policy.step_size,
            value_history: outcome.value_history,
        }
    }
}

/// Strict-improvement acceptance with rejection-triggered radius shrink.
struct ClimbPolicy {
    step_size: f64,
    step_decay: f64,
    epsilon: f64,
}

impl StepPolicy for ClimbPolicy {
    fn propose<R: Rng>(&mut self, current: &[f64], bounds: &Bounds, rng: &mut R) -> Vec<f64> {
        random_neighbor(current, bounds, self.step_size, rng)
    }

    fn accept<R: Rng>(&mut self, current_value: f64, candidate_value: f64, _rng: &mut R) -> bool {
        if current_value - candidate_value > self.epsilon {
            true
        } else {
            self.step_size *= self.step_decay;
            false
        }
    }

    fn converged(&self, current_value: f64) -> bool {
        current_value.abs() < self.epsilon
    }
}
