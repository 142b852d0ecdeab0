//! Random local search execution loop.

use super::config::RlsConfig;
use crate::domain::{sample_uniform, Bounds};
use crate::driver::{self, StepPolicy};
use crate::objective::Objective;
use rand::Rng;

/// Result of a Random Local Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RlsResult {
    /// The best point found among all sampled candidates.
    pub best: Vec<f64>,

    /// Objective value of the best point.
    pub best_value: f64,

    /// Iterations executed (may stop short of the budget on convergence).
    pub iterations: usize,

    /// Objective evaluations, including the initial sample.
    pub evaluations: usize,

    /// Number of accepted (improving) candidates.
    pub accepted_moves: usize,

    /// Best value after the initial sample and after each iteration.
    pub value_history: Vec<f64>,
}

/// Executes Random Local Search.
pub struct RlsRunner;

impl RlsRunner {
    /// Minimizes `objective` over `bounds`.
    ///
    /// Each iteration draws a fresh candidate uniformly over the whole
    /// domain, independent of the current best, and keeps it only if it
    /// improves the best value by more than `epsilon`. Stops early once the
    /// best value is within `epsilon` of zero. Never worsens: the tracked
    /// best is non-increasing.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxopt::domain::Bounds;
    /// use boxopt::rls::{RlsConfig, RlsRunner};
    ///
    /// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
    /// let bounds = Bounds::from_pairs(&[(-5.0, 5.0), (-5.0, 5.0)]);
    ///
    /// let result = RlsRunner::run(&sphere, &bounds, &RlsConfig::default().with_seed(42));
    /// assert!(bounds.contains(&result.best));
    /// ```
    pub fn run<F: Objective>(objective: &F, bounds: &Bounds, config: &RlsConfig) -> RlsResult {
        let mut rng = driver::create_rng(config.seed);
        let mut policy = RestartPolicy {
            epsilon: config.epsilon,
        };

        let outcome = driver::run(&mut policy, objective, bounds, config.iterations, &mut rng);

        RlsResult {
            best: outcome.best,
            best_value: outcome.best_value,
            iterations: outcome.iterations,
            evaluations: outcome.evaluations,
            accepted_moves: outcome.accepted_moves,
            value_history: outcome.value_history,
        }
    }
}

/// Global uniform proposal with strict-improvement acceptance.
struct RestartPolicy {
    epsilon: f64,
}

impl StepPolicy for RestartPolicy {
    fn propose<R: Rng>(&mut self, _current: &[f64], bounds: &Bounds, rng: &mut R) -> Vec<f64> {
        sample_uniform(bounds, rng)
    }

    fn accept<R: Rng>(&mut self, current_value: f64, candidate_value: f64, _rng: &mut R) -> bool {
        current_value - candidate_value > self.epsilon
    }

    fn converged(&self, current_value: f64) -> bool {
        current_value.abs() < self.epsilon
    }
}
