//! Allocation feasibility check.
//!
//! Validates an allocation against aggregate per-node budgets: compute
//! and bandwidth scaled by the time horizon, memory as-is. Always a
//! full recomputation over the allocation — no running totals are
//! trusted across calls, which bounds each check at O(M + N) and keeps
//! the refiner's invariant (never step into an infeasible state) easy
//! to audit.

use crate::models::{Allocation, Node, Task};

/// Whether an allocation satisfies every node's capacity budgets.
///
/// Per node, over its assigned tasks:
/// - Σ `work × size` must not exceed `compute_capacity × horizon`,
/// - Σ `memory_demand` must not exceed `memory_capacity`,
/// - Σ `work` must not exceed `bandwidth_capacity × horizon`.
///
/// Unassigned tasks contribute nothing.
pub fn check_constraints(
    allocation: &Allocation,
    nodes: &[Node],
    tasks: &[Task],
    time_horizon_s: f64,
) -> bool {
    let mut compute_load = vec![0.0; nodes.len()];
    let mut memory_load = vec![0.0; nodes.len()];
    let mut bandwidth_load = vec![0.0; nodes.len()];

    for (task_idx, node_idx) in allocation.assigned() {
        let task = &tasks[task_idx];
        compute_load[node_idx] += task.compute_demand();
        memory_load[node_idx] += task.memory_demand;
        bandwidth_load[node_idx] += task.work;
    }

    for (node_idx, node) in nodes.iter().enumerate() {
        if compute_load[node_idx] > node.compute_capacity * time_horizon_s {
            return false;
        }
        if memory_load[node_idx] > node.memory_capacity {
            return false;
        }
        if bandwidth_load[node_idx] > node.bandwidth_capacity * time_horizon_s {
            return false;
        }
    }

    true
}
