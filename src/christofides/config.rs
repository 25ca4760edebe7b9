//! Christofides configuration.

/// Configuration for the Christofides pipeline.
///
/// # Examples
///
/// ```
/// use u_tsp::christofides::ChristofidesConfig;
///
/// let config = ChristofidesConfig::default()
///     .with_max_attempts(20)
///     .with_max_steps_per_attempt(50_000)
///     .with_shuffle_edge_order(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ChristofidesConfig {
    /// Maximum number of Eulerian-circuit attempts, each from a fresh random
    /// start vertex. Exceeding it is a construction error.
    pub max_attempts: usize,

    /// Maximum edge traversals within one attempt, backtracked ones included.
    /// 0 = no limit.
    pub max_steps_per_attempt: usize,

    /// Shuffle each attempt's incident-edge order so retries differ in more
    /// than their start vertex.
    pub shuffle_edge_order: bool,
}

impl Default for ChristofidesConfig {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            max_steps_per_attempt: 1_000_000,
            shuffle_edge_order: true,
        }
    }
}

impl ChristofidesConfig {
    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    pub fn with_max_steps_per_attempt(mut self, n: usize) -> Self {
        self.max_steps_per_attempt = n;
        self
    }

    pub fn with_shuffle_edge_order(mut self, shuffle: bool) -> Self {
        self.shuffle_edge_order = shuffle;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".into());
        }
        Ok(())
    }
}
