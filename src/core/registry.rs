//! Immutable capture-task catalog.
//!
//! The registry is populated once at startup from an externally-loaded
//! configuration document and never mutated afterwards. It performs no I/O
//! of its own; callers hand it already-loaded task definitions (or the text
//! of an already-read JSON document).

use std::collections::HashMap;

use crate::core::errors::RegistryError;
use crate::domain::CaptureTask;

/// Read-only catalog of capture tasks, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    tasks: Vec<CaptureTask>,
    by_id: HashMap<String, usize>,
}

impl TaskRegistry {
    /// Builds a registry from task definitions, preserving their order.
    ///
    /// Fails if two tasks share an id: silent shadowing would misattribute
    /// verdicts later.
    pub fn from_tasks(tasks: Vec<CaptureTask>) -> Result<Self, RegistryError> {
        let mut by_id = HashMap::with_capacity(tasks.len());
        for (index, task) in tasks.iter().enumerate() {
            if by_id.insert(task.id.clone(), index).is_some() {
                return Err(RegistryError::DuplicateTaskId {
                    id: task.id.clone(),
                });
            }
        }
        Ok(Self { tasks, by_id })
    }

    /// Parses an already-loaded JSON array of task definitions.
    pub fn from_json(document: &str) -> Result<Self, RegistryError> {
        let tasks: Vec<CaptureTask> = serde_json::from_str(document)?;
        Self::from_tasks(tasks)
    }

    /// Looks up a task by id.
    pub fn lookup(&self, id: &str) -> Result<&CaptureTask, RegistryError> {
        self.by_id
            .get(id)
            .map(|&index| &self.tasks[index])
            .ok_or_else(|| RegistryError::TaskNotFound { id: id.to_string() })
    }

    /// All tasks in insertion order.
    pub fn all(&self) -> &[CaptureTask] {
        &self.tasks
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true when the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
