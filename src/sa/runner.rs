//! Metropolis search loop.
//!
//! # Algorithm
//!
//! Per iteration, up to the budget:
//! 1. Draw a task uniformly; unassigned → skip.
//! 2. Draw a destination node uniformly; no-op move → skip.
//! 3. Clone the current allocation and reassign the one task.
//! 4. Infeasible candidates are filtered out before the acceptance
//!    test, never merely penalized.
//! 5. Accept improving moves unconditionally; accept worsening moves
//!    with probability `exp(-delta / temperature)`.
//! 6. Track the best allocation seen.
//! 7. Cool geometrically every iteration — skipped and rejected
//!    iterations included — and stop once the floor is passed.
//!
//! Returns the best allocation, never the possibly-worse current one,
//! so the result cannot regress below the input. Any-time heuristic:
//! there is no convergence detection beyond the budget and the floor.

use rand::Rng;

use super::SaConfig;
use crate::config::AllocatorConfig;
use crate::constraints::check_constraints;
use crate::cost::evaluate_cost;
use crate::models::{Allocation, Node, Task};

/// Outcome of a refinement run.
#[derive(Debug, Clone, PartialEq)]
pub struct SaResult {
    /// Best allocation found (possibly the input unchanged).
    pub allocation: Allocation,
    /// Scalarized cost of `allocation`.
    pub cost: f64,
    /// Iterations actually executed.
    pub iterations: usize,
    /// Moves accepted (improving or Metropolis).
    pub accepted: usize,
}

/// Simulated-annealing refiner over feasible allocations.
#[derive(Debug, Clone, Default)]
pub struct SaRunner {
    config: SaConfig,
}

struct SearchState {
    current: Allocation,
    current_cost: f64,
    best: Allocation,
    best_cost: f64,
}

impl SaRunner {
    /// Creates a runner with the given schedule.
    pub fn new(config: SaConfig) -> Self {
        Self { config }
    }

    /// The annealing schedule in use.
    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Refines an initial allocation under the given scenario.
    ///
    /// Randomness comes exclusively from `rng`, so a seeded generator
    /// reproduces a run exactly.
    ///
    /// An empty task batch is invalid configuration (see
    /// [`crate::validation::validate_inputs`]); called with one anyway,
    /// the refiner returns the input untouched rather than drawing from
    /// an empty range.
    pub fn refine<R: Rng>(
        &self,
        nodes: &[Node],
        tasks: &[Task],
        initial: &Allocation,
        config: &AllocatorConfig,
        rng: &mut R,
    ) -> SaResult {
        let initial_cost = evaluate_cost(initial, nodes, tasks, config).scalarized_cost;
        if tasks.is_empty() {
            return SaResult {
                allocation: initial.clone(),
                cost: initial_cost,
                iterations: 0,
                accepted: 0,
            };
        }
        let mut state = SearchState {
            current: initial.clone(),
            current_cost: initial_cost,
            best: initial.clone(),
            best_cost: initial_cost,
        };

        let mut temperature = self.config.initial_temperature;
        let mut iterations = 0;
        let mut accepted = 0;

        for _ in 0..self.config.max_iterations {
            iterations += 1;
            if self.attempt_move(nodes, tasks, config, &mut state, temperature, rng) {
                accepted += 1;
            }

            temperature *= self.config.cooling_rate;
            if temperature < self.config.min_temperature {
                break;
            }
        }

        SaResult {
            allocation: state.best,
            cost: state.best_cost,
            iterations,
            accepted,
        }
    }

    /// Proposes and possibly adopts one neighbor move. Returns whether
    /// the move was accepted.
    fn attempt_move<R: Rng>(
        &self,
        nodes: &[Node],
        tasks: &[Task],
        config: &AllocatorConfig,
        state: &mut SearchState,
        temperature: f64,
        rng: &mut R,
    ) -> bool {
        let task_idx = rng.random_range(0..tasks.len());
        let current_node = match state.current.node_of(task_idx) {
            Some(node) => node,
            None => return false,
        };

        let candidate_node = rng.random_range(0..nodes.len());
        if candidate_node == current_node {
            return false;
        }

        let mut candidate = state.current.clone();
        candidate.assign(task_idx, candidate_node);

        if !check_constraints(&candidate, nodes, tasks, config.time_horizon_s) {
            return false;
        }

        let candidate_cost = evaluate_cost(&candidate, nodes, tasks, config).scalarized_cost;
        let delta = candidate_cost - state.current_cost;

        // The Metropolis draw happens only for worsening moves, so
        // improving moves consume one fewer random number.
        let accept = delta <= 0.0 || rng.random::<f64>() < (-delta / temperature).exp();
        if !accept {
            return false;
        }

        state.current = candidate;
        state.current_cost = candidate_cost;
        if candidate_cost < state.best_cost {
            state.best = state.current.clone();
            state.best_cost = candidate_cost;
        }
        true
    }
}
