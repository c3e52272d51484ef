//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted and projected by core.
//! - Provide creation helpers and field validation.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is non-empty after trimming for every accepted task.
//! - `id` and `created_at` are assigned once and never rewritten.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task in the collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Validation error for caller-supplied task fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Caller-supplied editable subset of task fields.
///
/// Used by both create and update paths; the store owns `id`, `created_at`
/// and `completed` and never takes them from a draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    /// Display label. Must be non-empty after trimming.
    pub title: String,
    /// Free-form detail text. May be empty.
    pub description: String,
    /// Absolute due instant. `None` means no due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Priority flag used for sorting and badging.
    pub important: bool,
}

impl TaskDraft {
    /// Checks the draft against the task field invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Canonical task record.
///
/// The serialized form keeps the storage payload's camelCase field names so
/// snapshots written by earlier builds keep loading unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable global ID used for lookups and mutation targeting.
    pub id: TaskId,
    /// Display label. Non-empty after trimming.
    pub title: String,
    /// Free-form detail text. May be empty.
    pub description: String,
    /// Absolute due instant. `None` means no due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Completion state. Starts `false`.
    pub completed: bool,
    /// Priority flag. Starts `false` unless set in the draft.
    pub important: bool,
    /// Creation instant, assigned once.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from a draft with a generated ID and the current
    /// instant as `created_at`.
    ///
    /// Does not validate the draft; write paths validate before construction.
    pub fn new(draft: TaskDraft) -> Self {
        Self::with_id(Uuid::new_v4(), Utc::now(), draft)
    }

    /// Creates a task with caller-provided identity fields.
    ///
    /// Used by seed and test paths where `id`/`created_at` are fixed.
    pub fn with_id(id: TaskId, created_at: DateTime<Utc>, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            completed: false,
            important: draft.important,
            created_at,
        }
    }

    /// Checks the record against the task field invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Returns whether the task is past due and still open at `now`.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.due_date {
            Some(due) => !self.completed && due < now,
            None => false,
        }
    }
}
