//! Task-to-node allocation.
//!
//! The central entity explored by the search: a fixed-size slot vector,
//! one slot per task, holding the assigned node index or `None` for
//! unassigned. Task count is fixed up front, so an indexed vector with
//! an explicit absent marker beats a sparse map here.
//!
//! Candidate moves clone the allocation and mutate one slot; the search
//! keeps the original intact so rejection costs nothing.

use serde::{Deserialize, Serialize};

/// A mapping from task index to node index (or unassigned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    slots: Vec<Option<usize>>,
}

impl Allocation {
    /// Creates an allocation with every task unassigned.
    pub fn unassigned(task_count: usize) -> Self {
        Self {
            slots: vec![None; task_count],
        }
    }

    /// Creates an allocation from explicit slots.
    pub fn from_slots(slots: Vec<Option<usize>>) -> Self {
        Self { slots }
    }

    /// Number of task slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the allocation has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The node assigned to a task, if any.
    pub fn node_of(&self, task: usize) -> Option<usize> {
        self.slots[task]
    }

    /// Assigns a task to a node.
    pub fn assign(&mut self, task: usize, node: usize) {
        self.slots[task] = Some(node);
    }

    /// Clears a task's assignment.
    pub fn unassign(&mut self, task: usize) {
        self.slots[task] = None;
    }

    /// Iterates over `(task, node)` pairs for assigned tasks only.
    pub fn assigned(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(task, slot)| slot.map(|node| (task, node)))
    }

    /// Number of assigned tasks.
    pub fn assigned_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Number of unassigned tasks.
    pub fn unassigned_count(&self) -> usize {
        self.len() - self.assigned_count()
    }

    /// Whether every task has a node.
    pub fn is_fully_assigned(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }

    /// Whether every assigned slot references a node index below
    /// `node_count`.
    pub fn references_valid_nodes(&self, node_count: usize) -> bool {
        self.slots.iter().flatten().all(|&node| node < node_count)
    }

    /// Read-only view of the raw slots.
    pub fn slots(&self) -> &[Option<usize>] {
        &self.slots
    }
}
