//! Allocation cost evaluation.
//!
//! Aggregates per-task metrics into the run-level report: makespan
//! under sequential per-node processing, total energy, the scalarized
//! objective, and a GPU-utilization statistic.
//!
//! A fully-unassigned allocation evaluates to an infinite makespan —
//! maximally bad, so the search can never prefer it over a populated
//! one. The evaluator itself never fails; partially-unassigned
//! allocations are a representable state, not an error.

use serde::{Deserialize, Serialize};

use crate::config::AllocatorConfig;
use crate::metrics::task_metrics;
use crate::models::{Allocation, Node, Task};

/// Joules per kilowatt-hour.
const JOULES_PER_KWH: f64 = 3.6e6;

/// Projected run-level metrics for an allocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    /// Makespan: completion time of the bottleneck node (seconds).
    /// Infinite when no task is assigned anywhere.
    pub total_time_s: f64,
    /// Total processing plus transfer energy (joules).
    pub total_energy_j: f64,
    /// Weighted objective: `alpha × time + beta × energy_kwh`.
    pub scalarized_cost: f64,
    /// Tasks placed on GPU nodes.
    pub gpu_tasks: usize,
    /// Total tasks in the batch (assigned or not).
    pub task_count: usize,
}

impl CostReport {
    /// Total energy in kilowatt-hours.
    pub fn energy_kwh(&self) -> f64 {
        self.total_energy_j / JOULES_PER_KWH
    }

    /// Energy bill at the given price (currency per kWh).
    pub fn energy_cost(&self, cost_per_kwh: f64) -> f64 {
        self.energy_kwh() * cost_per_kwh
    }

    /// Fraction of the batch placed on GPU nodes (0.0..1.0).
    pub fn gpu_task_fraction(&self) -> f64 {
        if self.task_count == 0 {
            0.0
        } else {
            self.gpu_tasks as f64 / self.task_count as f64
        }
    }
}

/// Evaluates an allocation's projected time, energy, and cost.
///
/// Each node processes its assigned tasks sequentially, so its
/// completion time is the sum of their processing times; the makespan
/// is the maximum over nodes. Energy sums over assigned tasks only.
pub fn evaluate_cost(
    allocation: &Allocation,
    nodes: &[Node],
    tasks: &[Task],
    config: &AllocatorConfig,
) -> CostReport {
    let mut node_times = vec![0.0_f64; nodes.len()];
    let mut total_energy_j = 0.0;
    let mut gpu_tasks = 0;
    let mut assigned = 0;

    for (task_idx, node_idx) in allocation.assigned() {
        let node = &nodes[node_idx];
        let m = task_metrics(
            node,
            &tasks[task_idx],
            config.pue,
            config.energy_per_transfer_byte,
        );
        node_times[node_idx] += m.time_s;
        total_energy_j += m.energy_j;
        if node.is_gpu() {
            gpu_tasks += 1;
        }
        assigned += 1;
    }

    // A zero alpha would turn 0 × ∞ into NaN and poison cost
    // comparisons, so the unassigned sentinel bypasses the weighting.
    let (total_time_s, scalarized_cost) = if assigned == 0 {
        (f64::INFINITY, f64::INFINITY)
    } else {
        let time = node_times.iter().cloned().fold(0.0, f64::max);
        let cost = config.alpha * time + config.beta * (total_energy_j / JOULES_PER_KWH);
        (time, cost)
    };

    CostReport {
        total_time_s,
        total_energy_j,
        scalarized_cost,
        gpu_tasks,
        task_count: allocation.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeType;

    fn nodes() -> Vec<Node> {
        vec![
            Node::cpu(10.0)
                .with_tdp(100.0)
                .with_memory(1e9)
                .with_bandwidth(1e9),
            Node::gpu(20.0)
                .with_tdp(200.0)
                .with_memory(1e9)
                .with_bandwidth(1e9),
        ]
    }

    fn config() -> AllocatorConfig {
        AllocatorConfig::default()
            .with_time_horizon(1.0)
            .with_transfer_energy(0.0)
            .with_pue(1.0)
    }

    #[test]
    fn test_makespan_is_bottleneck_node() {
        let nodes = nodes();
        let tasks = vec![Task::new(10.0), Task::new(10.0), Task::new(20.0)];
        // Node 0: 1 s + 1 s; node 1: 1 s. Bottleneck is node 0 at 2 s.
        let alloc = Allocation::from_slots(vec![Some(0), Some(0), Some(1)]);

        let report = evaluate_cost(&alloc, &nodes, &tasks, &config());
        assert!((report.total_time_s - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_gpu_task_counting() {
        let nodes = nodes();
        let tasks = vec![Task::new(1.0), Task::new(1.0), Task::new(1.0), Task::new(1.0)];
        let alloc = Allocation::from_slots(vec![Some(1), Some(1), Some(0), Some(1)]);

        let report = evaluate_cost(&alloc, &nodes, &tasks, &config());
        assert_eq!(report.gpu_tasks, 3);
        assert!((report.gpu_task_fraction() - 0.75).abs() < 1e-12);
        assert_eq!(nodes[1].node_type, NodeType::Gpu);
    }

    #[test]
    fn test_fully_unassigned_is_infinitely_bad() {
        let nodes = nodes();
        let tasks = vec![Task::new(1.0), Task::new(1.0)];
        let alloc = Allocation::unassigned(tasks.len());

        let report = evaluate_cost(&alloc, &nodes, &tasks, &config());
        assert!(report.total_time_s.is_infinite());
        assert!(report.scalarized_cost.is_infinite());
        assert!((report.total_energy_j - 0.0).abs() < 1e-12);
        assert_eq!(report.gpu_tasks, 0);
    }

    #[test]
    fn test_unassigned_cost_is_infinite_even_with_zero_weights() {
        let nodes = nodes();
        let tasks = vec![Task::new(1.0), Task::new(1.0)];
        let alloc = Allocation::unassigned(tasks.len());

        for (alpha, beta) in [(0.0, 0.4), (0.6, 0.0), (0.0, 0.0)] {
            let cfg = config().with_weights(alpha, beta);
            let report = evaluate_cost(&alloc, &nodes, &tasks, &cfg);
            assert!(report.scalarized_cost.is_infinite());
            assert!(!report.scalarized_cost.is_nan());
        }
    }

    #[test]
    fn test_partially_unassigned_counts_assigned_only() {
        let nodes = nodes();
        let tasks = vec![Task::new(10.0), Task::new(10.0)];
        let alloc = Allocation::from_slots(vec![Some(0), None]);

        let report = evaluate_cost(&alloc, &nodes, &tasks, &config());
        assert!((report.total_time_s - 1.0).abs() < 1e-12);
        assert!(report.total_energy_j > 0.0);
    }

    #[test]
    fn test_scalarized_cost_weighting() {
        let nodes = nodes();
        let tasks = vec![Task::new(20.0)];
        let alloc = Allocation::from_slots(vec![Some(1)]);
        let cfg = config().with_weights(2.0, 0.0);

        let report = evaluate_cost(&alloc, &nodes, &tasks, &cfg);
        // 1 s on the GPU, energy weight zeroed.
        assert!((report.scalarized_cost - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_energy_unit_conversions() {
        let report = CostReport {
            total_time_s: 0.0,
            total_energy_j: 7.2e6,
            scalarized_cost: 0.0,
            gpu_tasks: 0,
            task_count: 1,
        };
        assert!((report.energy_kwh() - 2.0).abs() < 1e-12);
        assert!((report.energy_cost(0.2) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_gpu_fraction_of_empty_batch() {
        let report = CostReport {
            total_time_s: f64::INFINITY,
            total_energy_j: 0.0,
            scalarized_cost: f64::INFINITY,
            gpu_tasks: 0,
            task_count: 0,
        };
        assert!((report.gpu_task_fraction() - 0.0).abs() < 1e-12);
    }
}
