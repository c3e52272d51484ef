//! Display projection over the task collection.
//!
//! # Responsibility
//! - Compute the subset and order of tasks a renderer should display.
//! - Derive summary statistics for the dashboard footer.
//!
//! # Invariants
//! - Projections borrow the collection and never reorder or mutate it.
//! - Sorting is stable; equal keys keep their relative collection order.

use crate::model::task::Task;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Completion-status filter selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks.
    Completed,
}

/// Display ordering selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Newest `created_at` first.
    #[default]
    DateCreated,
    /// Earliest due date first; tasks without one sort last.
    DueDate,
    /// Case-insensitive ascending title order.
    Alphabetical,
    /// Important tasks first, oldest `created_at` first within a tier.
    Priority,
}

/// Returns the subsequence matching `filter` in collection order.
pub fn filtered(tasks: &[Task], filter: StatusFilter) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| match filter {
            StatusFilter::All => true,
            StatusFilter::Active => !task.completed,
            StatusFilter::Completed => task.completed,
        })
        .collect()
}

/// Returns the collection reordered by `sort` without touching the input.
pub fn sorted(tasks: &[Task], sort: SortOrder) -> Vec<&Task> {
    let mut picked: Vec<&Task> = tasks.iter().collect();
    sort_in_place(&mut picked, sort);
    picked
}

/// Composition a renderer consumes: `sorted(filtered(tasks))`.
pub fn project(tasks: &[Task], filter: StatusFilter, sort: SortOrder) -> Vec<&Task> {
    let mut picked = filtered(tasks, filter);
    sort_in_place(&mut picked, sort);
    picked
}

/// Number of completed tasks.
pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| task.completed).count()
}

/// Completed share rounded to a whole percent; `0` for an empty collection.
pub fn completion_percentage(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let share = completed_count(tasks) as f64 / tasks.len() as f64;
    (share * 100.0).round() as u8
}

fn sort_in_place(tasks: &mut [&Task], sort: SortOrder) {
    tasks.sort_by(|a, b| compare(a, b, sort));
}

fn compare(a: &Task, b: &Task, sort: SortOrder) -> Ordering {
    match sort {
        SortOrder::DateCreated => b.created_at.cmp(&a.created_at),
        SortOrder::DueDate => match (a.due_date, b.due_date) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(left), Some(right)) => left.cmp(&right),
        },
        SortOrder::Alphabetical => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        // Oldest-first tie-break within an importance tier, the opposite of
        // the DateCreated ordering.
        SortOrder::Priority => b
            .important
            .cmp(&a.important)
            .then_with(|| a.created_at.cmp(&b.created_at)),
    }
}
