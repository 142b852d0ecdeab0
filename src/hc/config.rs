//! Hill climbing configuration.

/// Configuration for Hill Climbing.
///
/// # Examples
///
/// ```
/// use boxopt::hc::HcConfig;
///
/// let config = HcConfig::default()
///     .with_iterations(5000)
///     .with_initial_step_size(0.2)
///     .with_seed(42);
/// assert_eq!(config.iterations, 5000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcConfig {
    /// Maximum number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Improvement threshold. A neighbor is accepted only when it improves
    /// the current value by more than this; also the near-zero convergence
    /// threshold for the early exit.
    pub epsilon: f64,

    /// Starting perturbation radius, as a fraction of each dimension's
    /// range.
    pub initial_step_size: f64,

    /// Multiplicative shrink applied to the step size on every rejected
    /// move. Values close to 1.0 cool the radius slowly.
    pub step_decay: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            epsilon: 1e-6,
            initial_step_size: 0.1,
            step_decay: 0.99,
            seed: None,
        }
    }
}

impl HcConfig {
    /// Sets the iteration budget.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the improvement/convergence threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the starting perturbation radius.
    pub fn with_initial_step_size(mut self, step_size: f64) -> Self {
        self.initial_step_size = step_size;
        self
    }

    /// Sets the per-rejection step shrink factor.
    pub fn with_step_decay(mut self, decay: f64) -> Self {
        self.step_decay = decay;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
