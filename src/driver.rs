//! The search loop shared by all strategies.
//!
//! Every strategy in this crate is the same loop — sample a starting point,
//! repeatedly propose and evaluate a candidate, decide whether to move,
//! stop on convergence or when the iteration budget runs out — differing
//! only in how candidates are proposed and judged. [`StepPolicy`] captures
//! exactly those differences; [`run`] owns everything else, including the
//! incumbent-best bookkeeping and the per-run statistics.

use crate::domain::{sample_uniform, Bounds};
use crate::objective::Objective;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Strategy-specific behavior plugged into the shared loop.
///
/// Methods take `&mut self` so policies can carry adaptive state: the hill
/// climber's shrinking step size, the annealer's temperature.
pub(crate) trait StepPolicy {
    /// Proposes the next candidate from the current point.
    fn propose<R: Rng>(&mut self, current: &[f64], bounds: &Bounds, rng: &mut R) -> Vec<f64>;

    /// Decides whether to move to the candidate. Called exactly once per
    /// iteration; rejection-triggered adaptation happens here.
    fn accept<R: Rng>(&mut self, current_value: f64, candidate_value: f64, rng: &mut R) -> bool;

    /// Unconditional end-of-iteration state update (e.g. cooling).
    fn after_step(&mut self) {}

    /// Whether the search has converged. Checked at the end of each
    /// iteration, after [`after_step`](StepPolicy::after_step).
    fn converged(&self, current_value: f64) -> bool;
}

/// What the loop hands back to the strategy runners.
#[derive(Debug, Clone)]
pub(crate) struct Outcome {
    pub best: Vec<f64>,
    pub best_value: f64,
    pub iterations: usize,
    pub evaluations: usize,
    pub accepted_moves: usize,
    pub improving_moves: usize,
    pub value_history: Vec<f64>,
}

/// Creates the per-run RNG: seeded for reproducibility, or from a random
/// seed when the caller did not pin one.
pub(crate) fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

/// Runs the shared search loop.
///
/// The incumbent best is tracked for every policy. Strategies whose
/// acceptance is strictly improving (hill climbing, random local search)
/// keep `best` identical to their current point; the annealer's current
/// state may worsen while `best` never regresses. The initial sample counts
/// as one evaluation and seeds the history; with `max_iterations == 0` the
/// loop body never executes and the initial sample is the result.
pub(crate) fn run<P, F, R>(
    policy: &mut P,
    objective: &F,
    bounds: &Bounds,
    max_iterations: usize,
    rng: &mut R,
) -> Outcome
where
    P: StepPolicy,
    F: Objective,
    R: Rng,
{
    let mut current = sample_uniform(bounds, rng);
    let mut current_value = objective.evaluate(&current);
    let mut best = current.clone();
    let mut best_value = current_value;

    let mut iterations = 0usize;
    let mut evaluations = 1usize;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;

    let mut value_history = Vec::with_capacity(max_iterations + 1);
    value_history.push(best_value);

    for _ in 0..max_iterations {
        let candidate = policy.propose(&current, bounds, rng);
        let candidate_value = objective.evaluate(&candidate);
        evaluations += 1;

        if policy.accept(current_value, candidate_value, rng) {
            if candidate_value < current_value {
                improving_moves += 1;
            }
            current = candidate;
            current_value = candidate_value;
            accepted_moves += 1;

            if current_value < best_value {
                best = current.clone();
                best_value = current_value;
            }
        }

        policy.after_step();
        iterations += 1;
        value_history.push(best_value);

        if policy.converged(current_value) {
            break;
        }
    }

    Outcome {
        best,
        best_value,
        iterations,
        evaluations,
        accepted_moves,
        improving_moves,
        value_history,
    }
}
