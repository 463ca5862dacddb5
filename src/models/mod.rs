//! Allocation domain models.
//!
//! Core data types for the allocation problem: the node pool, the task
//! batch, and the task-to-node allocation the search explores. Nodes
//! and tasks are identified by their index in the slices handed to the
//! allocator and stay immutable for the duration of a run; only the
//! `Allocation` mutates, and only by clone-and-reassign.

mod allocation;
mod node;
mod task;

pub use allocation::Allocation;
pub use node::{Node, NodeType};
pub use task::Task;
