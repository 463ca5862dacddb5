//! Compute task model.
//!
//! A task is a fixed unit of batch work: a number of operations, a
//! resident-memory demand, and a size factor scaling the work (in the
//! reference scenario, a bytes-to-transfer proxy).
//!
//! A task's identity is its index in the task slice passed to the
//! allocator; tasks are immutable for the duration of a run.

use serde::{Deserialize, Serialize};

/// A unit of batch compute work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Total operations required.
    pub work: f64,
    /// Resident memory demand (bytes).
    pub memory_demand: f64,
    /// Scale factor multiplying `work` in the compute-load and timing
    /// model (default: 1.0).
    pub size: f64,
}

impl Task {
    /// Creates a task with the given operation count.
    pub fn new(work: f64) -> Self {
        Self {
            work,
            memory_demand: 0.0,
            size: 1.0,
        }
    }

    /// Sets the memory demand (bytes).
    pub fn with_memory(mut self, memory_demand: f64) -> Self {
        self.memory_demand = memory_demand;
        self
    }

    /// Sets the size factor.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Effective compute demand: `work × size`.
    pub fn compute_demand(&self) -> f64 {
        self.work * self.size
    }
}
