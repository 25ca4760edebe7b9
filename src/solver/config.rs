//! Solver configuration.

use crate::christofides::ChristofidesConfig;

/// Configuration shared by [`solve`](super::solve) and [`solve_all`](super::solve_all).
///
/// # Examples
///
/// ```
/// use u_tsp::solver::SolverConfig;
/// use u_tsp::christofides::ChristofidesConfig;
///
/// let config = SolverConfig::default()
///     .with_seed(42)
///     .with_start(0)
///     .with_christofides(ChristofidesConfig::default().with_max_attempts(10));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Nearest-neighbour start vertex. `None` picks one at random.
    pub start: Option<usize>,

    /// Christofides settings.
    pub christofides: ChristofidesConfig,
}

impl SolverConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_christofides(mut self, config: ChristofidesConfig) -> Self {
        self.christofides = config;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.christofides
            .validate()
            .map_err(|e| format!("christofides: {e}"))
    }
}
