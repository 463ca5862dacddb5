//! Processing node model.
//!
//! Nodes are the compute resources tasks are placed on: CPU hosts and
//! GPU accelerators. Each node carries a raw compute capacity, a power
//! envelope, a clock-frequency pair, and memory/bandwidth budgets.
//!
//! A node's identity is its index in the node slice passed to the
//! allocator; nodes themselves are immutable for the duration of a run.

use serde::{Deserialize, Serialize};

/// Node classification.
///
/// Determines the frequency-derating semantics in the timing model:
/// CPU nodes running below peak clock are proportionally slower, GPU
/// nodes are assumed to always run at their maximum frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    /// General-purpose host processor.
    Cpu,
    /// Accelerator; modeled as always clocked at `max_frequency_ghz`.
    Gpu,
}

/// A processing node in the heterogeneous pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node classification.
    pub node_type: NodeType,
    /// Raw compute capacity (operations per second).
    pub compute_capacity: f64,
    /// Thermal design power (watts).
    pub tdp_watts: f64,
    /// Operating clock frequency (GHz).
    pub current_frequency_ghz: f64,
    /// Peak clock frequency (GHz).
    pub max_frequency_ghz: f64,
    /// Memory budget (bytes).
    pub memory_capacity: f64,
    /// Link bandwidth budget (bytes per second).
    pub bandwidth_capacity: f64,
}

impl Node {
    /// Creates a node of the given type with the given compute capacity.
    ///
    /// Frequencies default to 1.0/1.0 GHz (no derating); power, memory,
    /// and bandwidth default to zero and should be set via the builders.
    pub fn new(node_type: NodeType, compute_capacity: f64) -> Self {
        Self {
            node_type,
            compute_capacity,
            tdp_watts: 0.0,
            current_frequency_ghz: 1.0,
            max_frequency_ghz: 1.0,
            memory_capacity: 0.0,
            bandwidth_capacity: 0.0,
        }
    }

    /// Creates a CPU node.
    pub fn cpu(compute_capacity: f64) -> Self {
        Self::new(NodeType::Cpu, compute_capacity)
    }

    /// Creates a GPU node.
    pub fn gpu(compute_capacity: f64) -> Self {
        Self::new(NodeType::Gpu, compute_capacity)
    }

    /// Sets the thermal design power (watts).
    pub fn with_tdp(mut self, tdp_watts: f64) -> Self {
        self.tdp_watts = tdp_watts;
        self
    }

    /// Sets the operating and peak clock frequencies (GHz).
    pub fn with_frequency(mut self, current_ghz: f64, max_ghz: f64) -> Self {
        self.current_frequency_ghz = current_ghz;
        self.max_frequency_ghz = max_ghz;
        self
    }

    /// Sets the memory budget (bytes).
    pub fn with_memory(mut self, memory_capacity: f64) -> Self {
        self.memory_capacity = memory_capacity;
        self
    }

    /// Sets the bandwidth budget (bytes per second).
    pub fn with_bandwidth(mut self, bandwidth_capacity: f64) -> Self {
        self.bandwidth_capacity = bandwidth_capacity;
        self
    }

    /// Whether this node is a GPU.
    pub fn is_gpu(&self) -> bool {
        self.node_type == NodeType::Gpu
    }
}
