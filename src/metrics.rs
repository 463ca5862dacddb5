//! Per-task timing and energy model.
//!
//! Pure function mapping a (node, task) pair to processing time and
//! energy. CPU nodes running below peak clock are proportionally
//! slower; power follows a cubic dynamic-voltage-scaling curve.
//!
//! GPU nodes are modeled as always clocked at `max_frequency_ghz`, so
//! both the timing correction and the cubic power term collapse to
//! identity for them — the power term is kept in the same form for
//! both node types on purpose.
//!
//! # Reference
//! Barroso & Hölzle (2007), "The Case for Energy-Proportional Computing"

use crate::models::{Node, NodeType, Task};

/// Projected time and energy for one task on one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskMetrics {
    /// Processing time (seconds).
    pub time_s: f64,
    /// Processing energy plus transfer energy (joules).
    pub energy_j: f64,
}

/// Computes the processing time and energy for a task on a node.
///
/// - `time = work × size / compute_capacity`, scaled by
///   `max_freq / current_freq` for CPU nodes.
/// - `power = tdp × (current_freq / max_freq)³`.
/// - `energy = power × time × pue + energy_per_transfer_byte × work`.
///
/// Total for validated inputs; zero capacities and frequencies are an
/// input-validation concern, not handled here.
pub fn task_metrics(
    node: &Node,
    task: &Task,
    pue: f64,
    energy_per_transfer_byte: f64,
) -> TaskMetrics {
    let mut time_s = task.compute_demand() / node.compute_capacity;
    if node.node_type == NodeType::Cpu {
        time_s *= node.max_frequency_ghz / node.current_frequency_ghz;
    }

    let frequency_ratio = node.current_frequency_ghz / node.max_frequency_ghz;
    let power_w = node.tdp_watts * frequency_ratio.powi(3);

    let processing_energy = power_w * time_s * pue;
    let transfer_energy = energy_per_transfer_byte * task.work;

    TaskMetrics {
        time_s,
        energy_j: processing_energy + transfer_energy,
    }
}
