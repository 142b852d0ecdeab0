//! Simulated annealing execution loop.

use super::config::SaConfig;
use crate::domain::{random_neighbor, Bounds};
use crate::driver::{self, StepPolicy};
use crate::objective::Objective;
use rand::Rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The incumbent best: the lowest-valued state ever accepted, not the
    /// final current state.
    pub best: Vec<f64>,

    /// Objective value of the incumbent best.
    pub best_value: f64,

    /// Iterations executed (may stop short of the budget on freeze).
    pub iterations: usize,

    /// Objective evaluations, including the initial sample.
    pub evaluations: usize,

    /// Number of accepted moves, worsening ones included.
    pub accepted_moves: usize,

    /// Number of accepted moves that improved on the current value.
    pub improving_moves: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Best value after the initial sample and after each iteration.
    pub value_history: Vec<f64>,
}

/// Executes Simulated Annealing.
pub struct SaRunner;

impl SaRunner {
    /// Minimizes `objective` over `bounds`.
    ///
    /// Starts from a uniform random point. Each iteration perturbs the
    /// current point within the fixed step radius and applies the
    /// Metropolis criterion: improving moves are always taken, worsening
    /// moves with probability `exp(-delta / T)`. The temperature then cools
    /// by `cooling_rate`, and the run stops once it falls below `epsilon` —
    /// the point where any worsening move is effectively rejected.
    ///
    /// The returned [`SaResult::best`] is the incumbent tracked across all
    /// accepted states; accepted worsening moves never regress it. With a
    /// `cooling_rate` of 1.0 or more, or a non-positive
    /// `initial_temperature`, the freeze exit never fires and the run is
    /// bounded by `iterations` alone (see [`SaConfig::validate`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use boxopt::domain::Bounds;
    /// use boxopt::sa::{SaConfig, SaRunner};
    ///
    /// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
    /// let bounds = Bounds::from_pairs(&[(-5.0, 5.0), (-5.0, 5.0)]);
    ///
    /// let result = SaRunner::run(&sphere, &bounds, &SaConfig::default().with_seed(42));
    /// assert!(result.best_value <= result.value_history[0]);
    /// ```
    pub fn run<F: Objective>(objective: &F, bounds: &Bounds, config: &SaConfig) -> SaResult {
        let mut rng = driver::create_rng(config.seed);
        let mut policy = AnnealPolicy {
            temperature: config.initial_temperature,
            cooling_rate: config.cooling_rate,
            step_size: config.step_size,
            epsilon: config.epsilon,
        };

        let outcome = driver::run(&mut policy, objective, bounds, config.iterations, &mut rng);

        SaResult {
            best: outcome.best,
            best_value: outcome.best_value,
            iterations: outcome.iterations,
            evaluations: outcome.evaluations,
            accepted_moves: outcome.accepted_moves,
            improving_moves: outcome.improving_moves,
            final_temperature: policy.temperature,
            value_history: outcome.value_history,
        }
    }
}

/// Metropolis acceptance under geometric cooling.
struct AnnealPolicy {
    temperature: f64,
    cooling_rate: f64,
    step_size: f64,
    epsilon: f64,
}

impl StepPolicy for AnnealPolicy {
    fn propose<R: Rng>(&mut self, current: &[f64], bounds: &Bounds, rng: &mut R) -> Vec<f64> {
        random_neighbor(current, bounds, self.step_size, rng)
    }

    fn accept<R: Rng>(&mut self, current_value: f64, candidate_value: f64, rng: &mut R) -> bool {
        let delta = candidate_value - current_value;
        // IEEE-754 handles the frozen edge: at T = 0 the probability
        // collapses to exp(-inf) = 0 rather than erroring.
        delta < 0.0 || rng.random_range(0.0..1.0) < (-delta / self.temperature).exp()
    }

    fn after_step(&mut self) {
        self.temperature *= self.cooling_rate;
    }

    fn converged(&self, _current_value: f64) -> bool {
        self.temperature < self.epsilon
    }
}
