//! Run configuration.
//!
//! Every parameter of the reference scenario — time horizon, objective
//! weights, facility PUE, energy constants — is a named field here
//! rather than a module-level literal, supplied by value at allocator
//! construction and validated eagerly (see [`crate::validation`]).

use serde::{Deserialize, Serialize};

/// Parameters governing a single allocation run.
///
/// `Default` reproduces the reference scenario: a one-day horizon,
/// a 0.6/0.4 time/energy objective split, and a PUE of 1.2.
///
/// # Example
/// ```
/// use hetalloc::config::AllocatorConfig;
///
/// let config = AllocatorConfig::default()
///     .with_weights(0.5, 0.5)
///     .with_pue(1.4);
/// assert!((config.alpha - 0.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocatorConfig {
    /// Wall-clock window bounding cumulative per-node load (seconds).
    pub time_horizon_s: f64,
    /// Objective weight on total completion time (makespan).
    pub alpha: f64,
    /// Objective weight on total energy (in kWh).
    pub beta: f64,
    /// Power Usage Effectiveness: facility-level multiplier on
    /// processing energy (cooling and overhead included).
    pub pue: f64,
    /// Data-movement energy constant (joules per unit of task work),
    /// independent of node choice.
    pub energy_per_transfer_byte: f64,
    /// Energy price used by the reporting layer (currency per kWh).
    pub cost_per_kwh: f64,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            time_horizon_s: 86_400.0,
            alpha: 0.6,
            beta: 0.4,
            pue: 1.2,
            energy_per_transfer_byte: 0.08,
            cost_per_kwh: 0.2,
        }
    }
}

impl AllocatorConfig {
    /// Sets the load-accumulation horizon (seconds).
    pub fn with_time_horizon(mut self, seconds: f64) -> Self {
        self.time_horizon_s = seconds;
        self
    }

    /// Sets the objective weights (time, energy).
    pub fn with_weights(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Sets the facility PUE multiplier.
    pub fn with_pue(mut self, pue: f64) -> Self {
        self.pue = pue;
        self
    }

    /// Sets the transfer-energy constant (J per unit of work).
    pub fn with_transfer_energy(mut self, joules_per_byte: f64) -> Self {
        self.energy_per_transfer_byte = joules_per_byte;
        self
    }

    /// Sets the energy price for reporting (currency per kWh).
    pub fn with_energy_price(mut self, cost_per_kwh: f64) -> Self {
        self.cost_per_kwh = cost_per_kwh;
        self
    }
}
