//! Task store use-case service.
//!
//! # Responsibility
//! - Hold the canonical ordered task collection for the current session.
//! - Mediate every mutation and keep persisted and in-memory state
//!   consistent.
//!
//! # Invariants
//! - Raw collection order is most-recently-added-first; projections never
//!   reorder it.
//! - Every successful mutation rewrites the whole snapshot before returning.
//! - A load failure degrades to an empty collection instead of failing the
//!   host application.

use crate::model::task::{Task, TaskDraft, TaskId, TaskValidationError};
use crate::repo::snapshot_repo::{RepoError, SnapshotRepository};
use chrono::{Duration, Utc};
use log::{error, info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Service error for task store mutations.
#[derive(Debug)]
pub enum StoreError {
    /// Draft fields violate task invariants.
    Validation(TaskValidationError),
    /// Update target does not exist.
    TaskNotFound(TaskId),
    /// Persistence failed. The in-memory mutation is kept; the caller decides
    /// whether to notify the user or retry the action.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::TaskNotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Canonical task collection plus its injected persistence collaborator.
///
/// Mutations take `&mut self`, so a single-threaded host gets the required
/// load/mutate/persist exclusivity from ownership alone; a multi-threaded
/// host wraps the store in its own lock.
pub struct TaskStore<R: SnapshotRepository> {
    repo: R,
    tasks: Vec<Task>,
}

impl<R: SnapshotRepository> TaskStore<R> {
    /// Opens the store by loading the persisted collection once.
    ///
    /// # Contract
    /// - No snapshot stored yet: seed two example tasks and persist them.
    /// - Unreadable or invariant-violating snapshot: log and start empty.
    pub fn open(repo: R) -> Self {
        let tasks = match repo.load_tasks() {
            Ok(Some(tasks)) => match snapshot_defect(&tasks) {
                None => {
                    info!(
                        "event=store_load module=store status=ok total={}",
                        tasks.len()
                    );
                    tasks
                }
                Some(reason) => {
                    warn!("event=store_load module=store status=degraded reason={reason}");
                    Vec::new()
                }
            },
            Ok(None) => {
                let tasks = seed_tasks();
                match repo.save_tasks(&tasks) {
                    Ok(()) => info!(
                        "event=store_seed module=store status=ok total={}",
                        tasks.len()
                    ),
                    Err(err) => {
                        error!("event=store_seed module=store status=error error={err}")
                    }
                }
                tasks
            }
            Err(err) => {
                warn!("event=store_load module=store status=degraded error={err}");
                Vec::new()
            }
        };

        Self { repo, tasks }
    }

    /// Creates a task from the draft and prepends it to the collection.
    ///
    /// Returns a copy of the stored task with its generated `id` and
    /// `created_at`.
    pub fn add(&mut self, draft: TaskDraft) -> StoreResult<Task> {
        draft.validate()?;

        let task = Task::new(draft);
        self.tasks.insert(0, task.clone());
        self.persist("task_add")?;
        Ok(task)
    }

    /// Replaces the editable fields of the identified task.
    ///
    /// `id`, `created_at` and `completed` are never touched by an update.
    pub fn update(&mut self, id: TaskId, draft: TaskDraft) -> StoreResult<Task> {
        draft.validate()?;

        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        task.title = draft.title;
        task.description = draft.description;
        task.due_date = draft.due_date;
        task.important = draft.important;
        let updated = task.clone();

        self.persist("task_update")?;
        Ok(updated)
    }

    /// Flips the completion state of the identified task.
    ///
    /// Returns the new state, or `None` when no task has this `id` (silent
    /// no-op, nothing is persisted).
    pub fn toggle_completed(&mut self, id: TaskId) -> StoreResult<Option<bool>> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        task.completed = !task.completed;
        let completed = task.completed;

        self.persist("task_toggle")?;
        Ok(Some(completed))
    }

    /// Deletes the identified task permanently.
    ///
    /// Returns `false` when no task has this `id`; removal is idempotent and
    /// an absent target persists nothing.
    pub fn remove(&mut self, id: TaskId) -> StoreResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }

        self.persist("task_remove")?;
        Ok(true)
    }

    /// Read-only view of the raw collection, newest-added first.
    ///
    /// Callers mutate only through the store operations above.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn persist(&self, event: &str) -> StoreResult<()> {
        match self.repo.save_tasks(&self.tasks) {
            Ok(()) => {
                info!(
                    "event={event} module=store status=ok total={}",
                    self.tasks.len()
                );
                Ok(())
            }
            Err(err) => {
                error!("event={event} module=store status=error error={err}");
                Err(StoreError::Repo(err))
            }
        }
    }
}

/// Two example tasks shown on first launch, newest first.
fn seed_tasks() -> Vec<Task> {
    let now = Utc::now();
    let welcome = Task::with_id(
        uuid::Uuid::new_v4(),
        now,
        TaskDraft {
            title: "Welcome to TaskWave".to_string(),
            description: "Start by adding your first task".to_string(),
            ..TaskDraft::default()
        },
    );
    let mut explore = Task::with_id(
        uuid::Uuid::new_v4(),
        now - Duration::days(1),
        TaskDraft {
            title: "Explore features".to_string(),
            description: "Check out all the cool features".to_string(),
            ..TaskDraft::default()
        },
    );
    explore.completed = true;

    vec![welcome, explore]
}

/// Returns why a loaded snapshot cannot be trusted, if anything.
fn snapshot_defect(tasks: &[Task]) -> Option<&'static str> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if task.validate().is_err() {
            return Some("empty_title");
        }
        if !seen.insert(task.id) {
            return Some("duplicate_id");
        }
    }
    None
}
