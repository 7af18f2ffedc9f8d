//! Iteration budgets for the local search algorithms.

use serde::{Deserialize, Serialize};

/// Configuration settings shared by the solvers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of full 2-opt improvement passes.
    pub two_opt_max_passes: u32,
    /// Number of random swap rounds in the capacity local search.
    pub local_search_iterations: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            two_opt_max_passes: 1000,
            local_search_iterations: 100,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the 2-opt pass limit.
    pub fn with_two_opt_max_passes(mut self, passes: u32) -> Self {
        self.two_opt_max_passes = passes;
        self
    }

    /// Set the capacity local search iteration count.
    pub fn with_local_search_iterations(mut self, iterations: u32) -> Self {
        self.local_search_iterations = iterations;
        self
    }
}
