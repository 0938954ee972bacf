//! Client-side aggregation over the fetched task collection.
//!
//! Every function here is pure: no I/O, no shared state, deterministic for a
//! given input slice. The dashboard recomputes [`status_counts`] on every
//! change of the task collection; the rest are general-purpose helpers over
//! the same data.

use crate::types::{STATUS_DONE, STATUS_IN_PROGRESS, STATUS_TODO, StatusCounts, Task};
use std::collections::{HashMap, HashSet};

/// Keep tasks whose status equals `status`, preserving relative order.
pub fn filter_by_status<'a>(tasks: &'a [Task], status: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.status.as_deref() == Some(status))
        .collect()
}

/// Group tasks by owner id. Tasks without an owner group under `None`.
/// Within each group the original insertion order is preserved.
pub fn group_by_owner(tasks: &[Task]) -> HashMap<Option<i64>, Vec<&Task>> {
    let mut groups: HashMap<Option<i64>, Vec<&Task>> = HashMap::new();
    for task in tasks {
        groups.entry(task.owner_id).or_default().push(task);
    }
    groups
}

/// Tasks with priority >= 3, highest priority first.
///
/// Implemented as a stable ascending sort followed by a reversal, so tasks
/// of equal priority come out in the reverse of their original relative
/// order. That ordering is part of the observable contract; callers depend
/// on it, so this must not be rewritten as a plain descending sort.
pub fn high_priority_tasks(tasks: &[Task]) -> Vec<&Task> {
    let mut high: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.priority.is_some_and(|p| p >= 3))
        .collect();
    high.sort_by_key(|t| t.priority);
    high.reverse();
    high
}

/// Percentage of tasks with status "done", rounded to two decimals.
/// Returns 0.0 for an empty collection.
pub fn completion_rate(tasks: &[Task]) -> f64 {
    let total = tasks.len();
    if total == 0 {
        return 0.0;
    }
    let completed = tasks
        .iter()
        .filter(|t| t.status.as_deref() == Some(STATUS_DONE))
        .count();
    let rate = (completed as f64 / total as f64) * 100.0;
    (rate * 100.0).round() / 100.0
}

/// Distinct statuses in first-occurrence order. Tasks without a status
/// contribute nothing.
pub fn unique_statuses(tasks: &[Task]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for status in tasks.iter().filter_map(|t| t.status.as_deref()) {
        if seen.insert(status) {
            out.push(status.to_owned());
        }
    }
    out
}

/// Find a task by id.
pub fn find_by_id(tasks: &[Task], id: i64) -> Option<&Task> {
    tasks.iter().find(|t| t.id == Some(id))
}

/// Stable descending sort on priority; absent priorities sort last.
pub fn sort_by_priority_desc(tasks: &[Task]) -> Vec<&Task> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by(|a, b| b.priority.cmp(&a.priority));
    sorted
}

/// Count tasks per known status. Unknown or absent statuses fall in no
/// bucket, so the bucket sum may be less than `tasks.len()`.
pub fn status_counts(tasks: &[Task]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for task in tasks {
        match task.status.as_deref() {
            Some(STATUS_TODO) => counts.todo += 1,
            Some(STATUS_IN_PROGRESS) => counts.in_progress += 1,
            Some(STATUS_DONE) => counts.done += 1,
            _ => {}
        }
    }
    counts
}

/// Completion rate as shown on the dashboard: integer-rounded percentage of
/// done tasks over the full collection. Intentionally independent of the
/// two-decimal [`completion_rate`]; the two surfaces do not share precision.
pub fn dashboard_completion_rate(tasks: &[Task]) -> u32 {
    if tasks.is_empty() {
        return 0;
    }
    let done = status_counts(tasks).done;
    ((done as f64 / tasks.len() as f64) * 100.0).round() as u32
}
