//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the whole-snapshot data access contract.
//! - Isolate SQLite and codec details from service orchestration.
//!
//! # Invariants
//! - Repository writes replace the full snapshot; there is no partial update.
//! - Repository APIs return typed errors separating transport from payload
//!   failures.

pub mod snapshot_repo;
