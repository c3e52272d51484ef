//! Snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Load and replace the whole persisted task collection in one operation.
//! - Keep SQL and codec details inside the core persistence boundary.
//!
//! # Invariants
//! - The collection is stored as one JSON document under a single key; every
//!   save rewrites it wholesale, so no partially updated state can persist.
//! - A payload that fails to decode is reported as `RepoError::Payload`, not
//!   masked as an empty collection.

use crate::db::DbError;
use crate::model::task::Task;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the session-scoped task collection.
pub const TASKS_KEY: &str = "guest_tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// Storage transport failure (connection, SQL, quota).
    Db(DbError),
    /// Snapshot payload could not be encoded or decoded.
    Payload(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Payload(err) => write!(f, "invalid snapshot payload: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Payload(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value)
    }
}

/// Persistence collaborator for the task collection.
///
/// Implementations persist the collection as one atomic snapshot; there is no
/// per-task write path.
pub trait SnapshotRepository {
    /// Loads the stored collection. `Ok(None)` means no snapshot has ever
    /// been saved.
    fn load_tasks(&self) -> RepoResult<Option<Vec<Task>>>;

    /// Serializes and replaces the stored collection.
    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository over the `storage` key-value table.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn load_tasks(&self) -> RepoResult<Option<Vec<Task>>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM storage WHERE key = ?1;",
                params![TASKS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()> {
        let json = serde_json::to_string(tasks)?;
        self.conn.execute(
            "INSERT INTO storage (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![TASKS_KEY, json],
        )?;
        Ok(())
    }
}
