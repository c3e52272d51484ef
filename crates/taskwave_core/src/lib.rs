//! Core domain logic for TaskWave.
//! This crate is the single source of truth for task-collection invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use db::{open_db, open_db_in_memory};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskDraft, TaskId, TaskValidationError};
pub use repo::snapshot_repo::{
    RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository,
};
pub use service::task_store::{StoreError, StoreResult, TaskStore};
pub use view::projection::{
    completed_count, completion_percentage, filtered, project, sorted, SortOrder, StatusFilter,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
