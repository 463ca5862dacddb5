//! Annealing schedule parameters.

use serde::{Deserialize, Serialize};

/// Geometric cooling schedule and iteration budget.
///
/// `Default` reproduces the reference scenario: T₀ = 1000, floor 0.01,
/// cooling rate 0.95, 1000 iterations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaConfig {
    /// Starting temperature.
    pub initial_temperature: f64,
    /// Temperature floor; the search stops once cooling passes it.
    pub min_temperature: f64,
    /// Geometric decay factor applied every iteration (must be in
    /// (0, 1)).
    pub cooling_rate: f64,
    /// Iteration budget, counting skipped and rejected iterations.
    pub max_iterations: usize,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 0.01,
            cooling_rate: 0.95,
            max_iterations: 1000,
        }
    }
}

impl SaConfig {
    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, t0: f64) -> Self {
        self.initial_temperature = t0;
        self
    }

    /// Sets the temperature floor.
    pub fn with_min_temperature(mut self, t_min: f64) -> Self {
        self.min_temperature = t_min;
        self
    }

    /// Sets the geometric cooling rate.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }
}
