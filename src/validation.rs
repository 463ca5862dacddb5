//! Eager input and configuration validation.
//!
//! Checks node, task, and configuration integrity before any
//! optimization runs. Detects:
//! - Empty node or task sets
//! - Non-positive capacities or broken frequency pairs
//! - Negative demands
//! - Negative objective weights, non-positive horizon or PUE
//! - Degenerate annealing schedules
//!
//! Everything downstream of this gate works with sentinel values
//! (unassigned slots, infinite cost) instead of errors, so the search
//! loop never has to stop for an infeasible candidate. Only this
//! construction-time validation surfaces hard errors.

use crate::config::AllocatorConfig;
use crate::models::{Allocation, Node, Task};
use crate::sa::SaConfig;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The node pool is empty.
    EmptyNodeSet,
    /// The task batch is empty.
    EmptyTaskSet,
    /// A node has a non-positive capacity, power, or frequency pair.
    InvalidNode,
    /// A task has a negative demand or non-positive size.
    InvalidTask,
    /// An objective weight is negative.
    InvalidWeight,
    /// The time horizon is not positive.
    InvalidHorizon,
    /// PUE, transfer constant, or energy price is out of range.
    InvalidEnergyParameter,
    /// The annealing schedule cannot terminate or cool.
    InvalidSchedule,
    /// An allocation references a node outside the pool or has the
    /// wrong number of slots.
    InvalidAllocation,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates nodes, tasks, and configuration for an allocation run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_inputs(
    nodes: &[Node],
    tasks: &[Task],
    config: &AllocatorConfig,
    sa: &SaConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    if nodes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyNodeSet,
            "Node pool is empty",
        ));
    }
    if tasks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTaskSet,
            "Task batch is empty",
        ));
    }

    for (i, node) in nodes.iter().enumerate() {
        if node.compute_capacity <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidNode,
                format!("Node {i} has non-positive compute capacity"),
            ));
        }
        if node.memory_capacity < 0.0 || node.bandwidth_capacity < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidNode,
                format!("Node {i} has a negative memory or bandwidth capacity"),
            ));
        }
        if node.tdp_watts < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidNode,
                format!("Node {i} has a negative TDP"),
            ));
        }
        if node.current_frequency_ghz <= 0.0
            || node.max_frequency_ghz <= 0.0
            || node.current_frequency_ghz > node.max_frequency_ghz
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidNode,
                format!(
                    "Node {i} has an invalid frequency pair ({} / {} GHz)",
                    node.current_frequency_ghz, node.max_frequency_ghz
                ),
            ));
        }
    }

    for (j, task) in tasks.iter().enumerate() {
        if task.work < 0.0 || task.memory_demand < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTask,
                format!("Task {j} has a negative demand"),
            ));
        }
        if task.size <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTask,
                format!("Task {j} has a non-positive size factor"),
            ));
        }
    }

    if config.alpha < 0.0 || config.beta < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWeight,
            format!(
                "Objective weights must be non-negative (alpha={}, beta={})",
                config.alpha, config.beta
            ),
        ));
    }
    if config.time_horizon_s <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidHorizon,
            format!(
                "Time horizon must be positive (got {})",
                config.time_horizon_s
            ),
        ));
    }
    if config.pue <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidEnergyParameter,
            format!("PUE must be positive (got {})", config.pue),
        ));
    }
    if config.energy_per_transfer_byte < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidEnergyParameter,
            "Transfer-energy constant must be non-negative",
        ));
    }
    if config.cost_per_kwh < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidEnergyParameter,
            "Energy price must be non-negative",
        ));
    }

    if sa.initial_temperature <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSchedule,
            format!(
                "Initial temperature must be positive (got {})",
                sa.initial_temperature
            ),
        ));
    }
    if sa.min_temperature < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSchedule,
            "Temperature floor must be non-negative",
        ));
    }
    if sa.cooling_rate <= 0.0 || sa.cooling_rate >= 1.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSchedule,
            format!("Cooling rate must lie in (0, 1) (got {})", sa.cooling_rate),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an allocation's shape against a scenario: one slot per
/// task, every assigned slot referencing a node inside the pool.
///
/// Allocations produced by the constructors and the refiner satisfy
/// this by construction; the check guards caller-built allocations
/// handed to the evaluation boundary.
pub fn validate_allocation(
    allocation: &Allocation,
    node_count: usize,
    task_count: usize,
) -> ValidationResult {
    let mut errors = Vec::new();

    if allocation.len() != task_count {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidAllocation,
            format!(
                "Allocation has {} slots for {} tasks",
                allocation.len(),
                task_count
            ),
        ));
    }
    if !allocation.references_valid_nodes(node_count) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidAllocation,
            format!("Allocation references a node outside the {node_count}-node pool"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_nodes() -> Vec<Node> {
        vec![
            Node::cpu(15e12)
                .with_tdp(400.0)
                .with_frequency(2.8, 4.0)
                .with_memory(2e12)
                .with_bandwidth(25e9),
            Node::gpu(30e12)
                .with_tdp(800.0)
                .with_frequency(4.0, 4.0)
                .with_memory(2e12)
                .with_bandwidth(25e9),
        ]
    }

    fn sample_tasks() -> Vec<Task> {
        vec![Task::new(280e9).with_memory(128e9).with_size(2e6)]
    }

    #[test]
    fn test_valid_inputs() {
        let result = validate_inputs(
            &sample_nodes(),
            &sample_tasks(),
            &AllocatorConfig::default(),
            &SaConfig::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_sets() {
        let errors = validate_inputs(&[], &[], &AllocatorConfig::default(), &SaConfig::default())
            .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyNodeSet));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyTaskSet));
    }

    #[test]
    fn test_zero_capacity_node() {
        let nodes = vec![Node::cpu(0.0).with_memory(1.0).with_bandwidth(1.0)];
        let errors = validate_inputs(
            &nodes,
            &sample_tasks(),
            &AllocatorConfig::default(),
            &SaConfig::default(),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidNode));
    }

    #[test]
    fn test_frequency_above_peak() {
        let nodes = vec![Node::cpu(1e9)
            .with_frequency(5.0, 4.0)
            .with_memory(1.0)
            .with_bandwidth(1.0)];
        let errors = validate_inputs(
            &nodes,
            &sample_tasks(),
            &AllocatorConfig::default(),
            &SaConfig::default(),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidNode
                && e.message.contains("frequency")));
    }

    #[test]
    fn test_negative_task_demand() {
        let tasks = vec![Task::new(-1.0)];
        let errors = validate_inputs(
            &sample_nodes(),
            &tasks,
            &AllocatorConfig::default(),
            &SaConfig::default(),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTask));
    }

    #[test]
    fn test_negative_weight() {
        let config = AllocatorConfig::default().with_weights(-0.1, 0.4);
        let errors = validate_inputs(
            &sample_nodes(),
            &sample_tasks(),
            &config,
            &SaConfig::default(),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidWeight));
    }

    #[test]
    fn test_non_positive_horizon() {
        let config = AllocatorConfig::default().with_time_horizon(0.0);
        let errors = validate_inputs(
            &sample_nodes(),
            &sample_tasks(),
            &config,
            &SaConfig::default(),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidHorizon));
    }

    #[test]
    fn test_cooling_rate_bounds() {
        for rate in [0.0, 1.0, 1.5] {
            let sa = SaConfig::default().with_cooling_rate(rate);
            let errors = validate_inputs(
                &sample_nodes(),
                &sample_tasks(),
                &AllocatorConfig::default(),
                &sa,
            )
            .unwrap_err();
            assert!(errors
                .iter()
                .any(|e| e.kind == ValidationErrorKind::InvalidSchedule));
        }
    }

    #[test]
    fn test_allocation_shape_checks() {
        let alloc = Allocation::from_slots(vec![Some(0), Some(3), None]);

        assert!(validate_allocation(&alloc, 4, 3).is_ok());

        // Node 3 is outside a 3-node pool.
        let errors = validate_allocation(&alloc, 3, 3).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidAllocation));

        // Wrong slot count for the batch.
        let errors = validate_allocation(&alloc, 4, 5).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidAllocation));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let config = AllocatorConfig::default()
            .with_weights(-1.0, -1.0)
            .with_time_horizon(-5.0);
        let errors =
            validate_inputs(&[], &sample_tasks(), &config, &SaConfig::default()).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
