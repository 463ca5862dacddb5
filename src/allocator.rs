//! Allocation run facade.
//!
//! Wires the pipeline together: validate inputs eagerly, build the
//! greedy starting allocation, refine it with simulated annealing, and
//! evaluate the final report. One `Allocator` owns one immutable
//! scenario (nodes, tasks, configuration); each `run` is an
//! independent one-shot optimization driven by a caller-supplied RNG.

use rand::Rng;

use crate::config::AllocatorConfig;
use crate::cost::{evaluate_cost, CostReport};
use crate::greedy::{greedy_allocation, uniform_allocation};
use crate::models::{Allocation, Node, Task};
use crate::sa::{SaConfig, SaResult, SaRunner};
use crate::validation::{validate_allocation, validate_inputs, ValidationError};

/// Final allocation plus its projected metrics.
#[derive(Debug, Clone)]
pub struct AllocationOutcome {
    /// The optimized allocation.
    pub allocation: Allocation,
    /// Projected metrics for `allocation`.
    pub report: CostReport,
    /// Refinement diagnostics (iterations, accepted moves).
    pub refinement: SaResult,
}

/// One-shot optimizer for a fixed allocation scenario.
///
/// # Example
/// ```
/// use hetalloc::allocator::Allocator;
/// use hetalloc::config::AllocatorConfig;
/// use hetalloc::models::{Node, Task};
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let nodes = vec![
///     Node::cpu(15e12).with_tdp(400.0).with_frequency(2.8, 4.0)
///         .with_memory(2e12).with_bandwidth(25e9),
///     Node::gpu(30e12).with_tdp(800.0).with_frequency(4.0, 4.0)
///         .with_memory(2e12).with_bandwidth(25e9),
/// ];
/// let tasks = vec![Task::new(280e9).with_memory(128e9).with_size(2e6); 4];
///
/// let allocator = Allocator::new(nodes, tasks, AllocatorConfig::default()).unwrap();
/// let mut rng = SmallRng::seed_from_u64(42);
/// let outcome = allocator.run(&mut rng);
/// assert!(outcome.report.scalarized_cost.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct Allocator {
    nodes: Vec<Node>,
    tasks: Vec<Task>,
    config: AllocatorConfig,
    sa_config: SaConfig,
}

impl Allocator {
    /// Creates an allocator, validating the scenario eagerly.
    ///
    /// # Errors
    /// Returns every validation problem found; nothing is silently
    /// clamped or defaulted.
    pub fn new(
        nodes: Vec<Node>,
        tasks: Vec<Task>,
        config: AllocatorConfig,
    ) -> Result<Self, Vec<ValidationError>> {
        let sa_config = SaConfig::default();
        validate_inputs(&nodes, &tasks, &config, &sa_config)?;
        Ok(Self {
            nodes,
            tasks,
            config,
            sa_config,
        })
    }

    /// Replaces the annealing schedule.
    ///
    /// # Errors
    /// Re-validates the schedule against the scenario.
    pub fn with_annealing(mut self, sa_config: SaConfig) -> Result<Self, Vec<ValidationError>> {
        validate_inputs(&self.nodes, &self.tasks, &self.config, &sa_config)?;
        self.sa_config = sa_config;
        Ok(self)
    }

    /// The node pool.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The task batch.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The run configuration.
    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Runs the full pipeline: greedy construction, annealing
    /// refinement, final evaluation.
    pub fn run<R: Rng>(&self, rng: &mut R) -> AllocationOutcome {
        let initial = greedy_allocation(&self.nodes, &self.tasks, self.config.time_horizon_s);
        let runner = SaRunner::new(self.sa_config.clone());
        let refinement = runner.refine(&self.nodes, &self.tasks, &initial, &self.config, rng);
        let report = evaluate_cost(&refinement.allocation, &self.nodes, &self.tasks, &self.config);

        AllocationOutcome {
            allocation: refinement.allocation.clone(),
            report,
            refinement,
        }
    }

    /// Evaluates an arbitrary allocation under this scenario.
    ///
    /// # Errors
    /// Rejects allocations whose shape does not match the scenario
    /// (wrong slot count, or a slot referencing a node outside the
    /// pool) instead of panicking on the bad index.
    pub fn evaluate(&self, allocation: &Allocation) -> Result<CostReport, Vec<ValidationError>> {
        validate_allocation(allocation, self.nodes.len(), self.tasks.len())?;
        Ok(evaluate_cost(
            allocation,
            &self.nodes,
            &self.tasks,
            &self.config,
        ))
    }

    /// The uniform CPU round-robin baseline for this scenario.
    pub fn uniform_baseline(&self) -> Allocation {
        uniform_allocation(&self.nodes, &self.tasks)
    }
}
