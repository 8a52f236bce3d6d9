//! Progress tracking across an ordered set of capture tasks.
//!
//! Tasks unlock sequentially: the first task starts active, and each task
//! activates once the task before it is completed. Completing a task out of
//! order therefore re-activates its successor even while earlier tasks are
//! still open. Completion is derived from satisfied verdicts; nothing here
//! is persisted.

use serde::{Deserialize, Serialize};

use crate::domain::{CaptureTask, VerificationVerdict};

/// Lifecycle state of one capture task for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Locked: an earlier task is still incomplete.
    Inactive,
    /// Unlocked and awaiting a satisfying capture.
    Active,
    /// A satisfied verdict exists for this task.
    Completed,
}

/// Status of one task, keyed by task id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskProgress {
    /// Id of the task this status belongs to.
    pub task_id: String,
    /// Current lifecycle state.
    pub status: TaskStatus,
}

/// Rollup of completion across all tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallProgress {
    /// Number of completed tasks.
    pub completed: usize,
    /// Total number of tasks.
    pub total: usize,
    /// Completion percentage, rounded to the nearest whole percent.
    pub percentage: u8,
}

/// Derives per-task progress from the verdicts produced so far.
///
/// A task is completed when any satisfied verdict exists for it; activation
/// then follows catalog order: a task is active when its immediate
/// predecessor is completed (or it is first), so an out-of-order completion
/// re-activates the task after it. `tasks` is expected in catalog order, as
/// returned by [`TaskRegistry::all`](crate::core::registry::TaskRegistry::all).
pub fn derive_progress(
    tasks: &[CaptureTask],
    verdicts: &[VerificationVerdict],
) -> Vec<TaskProgress> {
    let mut previous_completed = true;
    tasks
        .iter()
        .map(|task| {
            let completed = verdicts
                .iter()
                .any(|verdict| verdict.satisfied && verdict.task_id == task.id);
            let status = if completed {
                previous_completed = true;
                TaskStatus::Completed
            } else if previous_completed {
                previous_completed = false;
                TaskStatus::Active
            } else {
                TaskStatus::Inactive
            };
            TaskProgress {
                task_id: task.id.clone(),
                status,
            }
        })
        .collect()
}

/// Returns the id of the currently active task, if any.
pub fn current_active_task(progress: &[TaskProgress]) -> Option<&str> {
    progress
        .iter()
        .find(|entry| entry.status == TaskStatus::Active)
        .map(|entry| entry.task_id.as_str())
}

/// Computes the overall completion rollup.
pub fn overall_progress(progress: &[TaskProgress]) -> OverallProgress {
    let total = progress.len();
    let completed = progress
        .iter()
        .filter(|entry| entry.status == TaskStatus::Completed)
        .count();
    let percentage = if total > 0 {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    } else {
        0
    };
    OverallProgress {
        completed,
        total,
        percentage,
    }
}
