//! Simulated annealing configuration.

/// Configuration for Simulated Annealing.
///
/// # Examples
///
/// ```
/// use boxopt::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.98)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Maximum number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Initial temperature. Higher values accept more worsening moves early
    /// on.
    pub initial_temperature: f64,

    /// Geometric cooling factor applied once per iteration, in `(0, 1)`.
    /// Values closer to 1.0 cool more slowly.
    pub cooling_rate: f64,

    /// Perturbation radius for neighbor generation, as a fraction of each
    /// dimension's range. Fixed for the whole run.
    pub step_size: f64,

    /// Freeze threshold: the run stops once the temperature drops below
    /// this. Temperature-scale, but shares its default with the
    /// value-scale improvement threshold used by the other strategies.
    pub epsilon: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
            step_size: 0.1,
            epsilon: 1e-6,
            seed: None,
        }
    }
}

impl SaConfig {
    /// Sets the iteration budget.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the initial temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the geometric cooling factor.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Sets the neighbor perturbation radius.
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Sets the freeze threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// The runner itself never rejects a configuration: out-of-range
    /// parameters (a cooling rate of 1.0 or more, a non-positive
    /// temperature) simply keep the temperature from ever crossing the
    /// freeze threshold, leaving the iteration budget as the only stop.
    /// Call this to reject such configurations up front.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if self.step_size <= 0.0 {
            return Err("step_size must be positive".into());
        }
        if self.epsilon <= 0.0 {
            return Err("epsilon must be positive".into());
        }
        Ok(())
    }
}
