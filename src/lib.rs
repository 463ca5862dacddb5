//! Energy-aware task allocation for heterogeneous CPU/GPU pools.
//!
//! A one-shot combinatorial optimizer: assigns a fixed batch of compute
//! tasks to a pool of CPU and GPU nodes, minimizing a weighted
//! combination of makespan and energy under per-node compute, memory,
//! and bandwidth budgets. It plans offline and reports projected
//! metrics — it is not a live scheduler.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Node`, `Task`, `Allocation`
//! - **`metrics`**: Per-task time/energy model (DVS power curve, PUE)
//! - **`constraints`**: Full-recomputation feasibility check
//! - **`cost`**: `CostReport` and the scalarized objective
//! - **`greedy`**: Deterministic first-fit-by-capacity constructor
//! - **`sa`**: Simulated-annealing refinement (Metropolis acceptance,
//!   geometric cooling)
//! - **`allocator`**: Validate → greedy → refine → report facade
//! - **`validation`**: Eager input/configuration integrity checks
//! - **`report`**: Human-readable summaries and baseline savings
//!
//! # Pipeline
//!
//! ```text
//! Nodes + Tasks → greedy_allocation → SaRunner::refine → CostReport
//! ```
//!
//! The search is single-threaded by design: a sequential Markov chain
//! where each step depends on the last accepted state. Randomness is
//! injected as a `rand::Rng`, so a seeded generator reproduces a run
//! bit-for-bit.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Barroso & Hölzle (2007), "The Case for Energy-Proportional Computing"

pub mod allocator;
pub mod config;
pub mod constraints;
pub mod cost;
pub mod greedy;
pub mod metrics;
pub mod models;
pub mod report;
pub mod sa;
pub mod validation;
