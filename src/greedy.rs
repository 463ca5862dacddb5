//! Initial allocation constructors.
//!
//! # Algorithm
//!
//! `greedy_allocation` walks tasks in index order and places each on
//! the feasible node with the largest raw compute capacity — a
//! first-fit-by-power heuristic, not a bin-packing-optimal choice.
//! Ties go to the lower node index, so the pass is fully deterministic.
//! A task no node can hold is left unassigned; there is no backtracking
//! or task reordering — fixing poor placements is the refiner's job.
//!
//! `uniform_allocation` is the comparison baseline: round-robin over
//! CPU nodes only, ignoring budgets.

use crate::models::{Allocation, Node, NodeType, Task};

/// Builds a best-effort feasible allocation by greedy first-fit.
///
/// Per-node remaining budgets start at full capacity — compute and
/// bandwidth scaled by the horizon, memory unscaled — and are debited
/// on every assignment.
pub fn greedy_allocation(nodes: &[Node], tasks: &[Task], time_horizon_s: f64) -> Allocation {
    let mut allocation = Allocation::unassigned(tasks.len());
    let mut available_compute: Vec<f64> = nodes
        .iter()
        .map(|n| n.compute_capacity * time_horizon_s)
        .collect();
    let mut available_memory: Vec<f64> = nodes.iter().map(|n| n.memory_capacity).collect();
    let mut available_bandwidth: Vec<f64> = nodes
        .iter()
        .map(|n| n.bandwidth_capacity * time_horizon_s)
        .collect();

    for (task_idx, task) in tasks.iter().enumerate() {
        let mut best: Option<usize> = None;
        let mut best_capacity = f64::NEG_INFINITY;

        for (node_idx, node) in nodes.iter().enumerate() {
            let fits = task.compute_demand() <= available_compute[node_idx]
                && task.memory_demand <= available_memory[node_idx]
                && task.work <= available_bandwidth[node_idx];
            if fits && node.compute_capacity > best_capacity {
                best = Some(node_idx);
                best_capacity = node.compute_capacity;
            }
        }

        if let Some(node_idx) = best {
            allocation.assign(task_idx, node_idx);
            available_compute[node_idx] -= task.compute_demand();
            available_memory[node_idx] -= task.memory_demand;
            available_bandwidth[node_idx] -= task.work;
        }
    }

    allocation
}

/// Builds the uniform baseline: tasks round-robin across CPU nodes,
/// budgets ignored.
///
/// Tasks stay unassigned when the pool has no CPU node. Used for
/// before/after comparison in the reporting layer, not as a search
/// starting point.
pub fn uniform_allocation(nodes: &[Node], tasks: &[Task]) -> Allocation {
    let cpu_nodes: Vec<usize> = nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| n.node_type == NodeType::Cpu)
        .map(|(i, _)| i)
        .collect();

    let mut allocation = Allocation::unassigned(tasks.len());
    if cpu_nodes.is_empty() {
        return allocation;
    }
    for task_idx in 0..tasks.len() {
        allocation.assign(task_idx, cpu_nodes[task_idx % cpu_nodes.len()]);
    }
    allocation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::check_constraints;

    fn ample(node: Node) -> Node {
        node.with_memory(1e15).with_bandwidth(1e15)
    }

    #[test]
    fn test_greedy_prefers_highest_capacity() {
        // 1 CPU (capacity 10) + 1 GPU (capacity 20), ample elsewhere.
        let nodes = vec![ample(Node::cpu(10.0)), ample(Node::gpu(20.0))];
        let tasks = vec![Task::new(5.0), Task::new(5.0), Task::new(5.0)];

        let alloc = greedy_allocation(&nodes, &tasks, 10.0);
        assert!(alloc.is_fully_assigned());
        assert!(alloc.assigned().all(|(_, node)| node == 1));
        assert!(check_constraints(&alloc, &nodes, &tasks, 10.0));
    }

    #[test]
    fn test_greedy_spills_when_best_node_fills() {
        // GPU compute budget: 20 × 1 = 20; two tasks of 15 cannot share it.
        let nodes = vec![ample(Node::cpu(16.0)), ample(Node::gpu(20.0))];
        let tasks = vec![Task::new(15.0), Task::new(15.0)];

        let alloc = greedy_allocation(&nodes, &tasks, 1.0);
        assert_eq!(alloc.node_of(0), Some(1));
        assert_eq!(alloc.node_of(1), Some(0));
    }

    #[test]
    fn test_greedy_tie_breaks_to_first_node() {
        let nodes = vec![ample(Node::cpu(10.0)), ample(Node::cpu(10.0))];
        let tasks = vec![Task::new(1.0)];

        let alloc = greedy_allocation(&nodes, &tasks, 1.0);
        assert_eq!(alloc.node_of(0), Some(0));
    }

    #[test]
    fn test_oversized_task_left_unassigned() {
        let nodes = vec![ample(Node::cpu(10.0)), ample(Node::gpu(20.0))];
        // Demand exceeds every node's compute budget at horizon 1.
        let tasks = vec![Task::new(1000.0)];

        let alloc = greedy_allocation(&nodes, &tasks, 1.0);
        assert_eq!(alloc.node_of(0), None);
        assert_eq!(alloc.unassigned_count(), 1);
    }

    #[test]
    fn test_greedy_respects_memory_budget() {
        let nodes = vec![
            Node::gpu(20.0).with_memory(10.0).with_bandwidth(1e15),
            Node::cpu(10.0).with_memory(100.0).with_bandwidth(1e15),
        ];
        let tasks = vec![
            Task::new(1.0).with_memory(8.0),
            Task::new(1.0).with_memory(8.0),
        ];

        let alloc = greedy_allocation(&nodes, &tasks, 1e6);
        // First task takes the GPU; the second no longer fits its memory.
        assert_eq!(alloc.node_of(0), Some(0));
        assert_eq!(alloc.node_of(1), Some(1));
    }

    #[test]
    fn test_greedy_result_passes_constraint_check() {
        let nodes = vec![
            Node::cpu(15.0).with_memory(64.0).with_bandwidth(6.0),
            Node::gpu(30.0).with_memory(64.0).with_bandwidth(6.0),
        ];
        let tasks: Vec<Task> = (0..8)
            .map(|_| Task::new(4.0).with_memory(10.0).with_size(2.0))
            .collect();

        let horizon = 3.0;
        let alloc = greedy_allocation(&nodes, &tasks, horizon);
        assert!(check_constraints(&alloc, &nodes, &tasks, horizon));
    }

    #[test]
    fn test_uniform_round_robin_over_cpus() {
        let nodes = vec![
            ample(Node::cpu(10.0)),
            ample(Node::gpu(20.0)),
            ample(Node::cpu(10.0)),
        ];
        let tasks = vec![Task::new(1.0), Task::new(1.0), Task::new(1.0)];

        let alloc = uniform_allocation(&nodes, &tasks);
        assert_eq!(alloc.node_of(0), Some(0));
        assert_eq!(alloc.node_of(1), Some(2));
        assert_eq!(alloc.node_of(2), Some(0));
    }

    #[test]
    fn test_uniform_with_no_cpus_leaves_unassigned() {
        let nodes = vec![ample(Node::gpu(20.0))];
        let tasks = vec![Task::new(1.0)];

        let alloc = uniform_allocation(&nodes, &tasks);
        assert_eq!(alloc.assigned_count(), 0);
    }
}
