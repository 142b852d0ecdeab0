//! Random local search configuration.

/// Configuration for Random Local Search.
///
/// # Examples
///
/// ```
/// use boxopt::rls::RlsConfig;
///
/// let config = RlsConfig::default().with_iterations(2000).with_seed(42);
/// assert_eq!(config.iterations, 2000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RlsConfig {
    /// Maximum number of iterations (candidate evaluations).
    pub iterations: usize,

    /// Improvement threshold. A candidate is accepted only when it improves
    /// the best value by more than this; also the near-zero convergence
    /// threshold for the early exit.
    pub epsilon: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for RlsConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            epsilon: 1e-6,
            seed: None,
        }
    }
}

impl RlsConfig {
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

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
