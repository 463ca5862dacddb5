//! Human-readable run summaries.
//!
//! Formats a `CostReport` into the units people read (hours, kWh,
//! currency) and computes before/after savings between a baseline and
//! an optimized allocation. Values only — the rendering layer that
//! prints or charts them lives outside this crate and imposes no
//! constraints back on the optimizer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cost::CostReport;

/// A cost report paired with the energy price it should be read at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// The underlying metrics.
    pub report: CostReport,
    /// Energy price (currency per kWh).
    pub cost_per_kwh: f64,
}

impl RunSummary {
    /// Creates a summary.
    pub fn new(report: CostReport, cost_per_kwh: f64) -> Self {
        Self {
            report,
            cost_per_kwh,
        }
    }

    /// Makespan in hours.
    pub fn total_time_hours(&self) -> f64 {
        self.report.total_time_s / 3600.0
    }

    /// Energy bill at the configured price.
    pub fn energy_cost(&self) -> f64 {
        self.report.energy_cost(self.cost_per_kwh)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  T_total: {:.0} s ({:.1} hours)",
            self.report.total_time_s,
            self.total_time_hours()
        )?;
        writeln!(f, "  E_total: {:.0} kWh", self.report.energy_kwh())?;
        writeln!(f, "  Cost: {:.1}", self.energy_cost())?;
        write!(
            f,
            "  GPU tasks: {:.0}%",
            self.report.gpu_task_fraction() * 100.0
        )
    }
}

/// Savings of an optimized allocation over a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    /// Energy saved (kWh); negative when the optimized run uses more.
    pub energy_kwh: f64,
    /// Energy saved as a fraction of the baseline (0.0..1.0).
    pub energy_fraction: f64,
    /// Makespan reduction as a fraction of the baseline.
    pub time_fraction: f64,
    /// Energy-bill reduction at the given price.
    pub cost: f64,
}

impl Savings {
    /// Computes savings of `optimized` relative to `baseline`.
    ///
    /// Fractions are 0 when the baseline quantity is zero or
    /// non-finite, so a degenerate baseline never produces NaN.
    pub fn between(baseline: &CostReport, optimized: &CostReport, cost_per_kwh: f64) -> Self {
        let energy_kwh = baseline.energy_kwh() - optimized.energy_kwh();
        let energy_fraction = safe_fraction(energy_kwh, baseline.energy_kwh());
        let time_fraction = safe_fraction(
            baseline.total_time_s - optimized.total_time_s,
            baseline.total_time_s,
        );
        let cost = energy_kwh * cost_per_kwh;

        Self {
            energy_kwh,
            energy_fraction,
            time_fraction,
            cost,
        }
    }
}

fn safe_fraction(delta: f64, base: f64) -> f64 {
    if base.is_finite() && base != 0.0 {
        delta / base
    } else {
        0.0
    }
}

impl fmt::Display for Savings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  Energy: {:.0} kWh ({:.0}%)",
            self.energy_kwh,
            self.energy_fraction * 100.0
        )?;
        writeln!(f, "  Time: {:.1}%", self.time_fraction * 100.0)?;
        write!(f, "  Cost: {:.1}", self.cost)
    }
}
