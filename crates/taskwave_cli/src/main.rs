//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskwave_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskwave_core::{
    completed_count, completion_percentage, open_db_in_memory, SqliteSnapshotRepository, TaskStore,
};

fn main() {
    println!("taskwave_core version={}", taskwave_core::core_version());

    // Seed an in-memory store and print the dashboard summary numbers.
    match open_db_in_memory() {
        Ok(conn) => {
            let store = TaskStore::open(SqliteSnapshotRepository::new(&conn));
            let tasks = store.all();
            println!(
                "seeded tasks={} completed={} percent={}",
                tasks.len(),
                completed_count(tasks),
                completion_percentage(tasks)
            );
        }
        Err(err) => eprintln!("failed to open in-memory store: {err}"),
    }
}
