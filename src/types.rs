//! Core types for the taskboard client.

use serde::{Deserialize, Serialize};

/// Known task statuses. The backend may emit values outside this set;
/// unrecognized statuses are carried through and tolerated everywhere.
pub const STATUS_TODO: &str = "todo";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_DONE: &str = "done";

/// A task as decoded from the backend's positional tuple format.
///
/// Every field is optional: the wire format is a fixed-order array and
/// nothing guarantees its length. Absent fields render as fallback labels
/// instead of failing the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub owner_id: Option<i64>,
    pub priority: Option<i64>,
}

impl Task {
    /// Status for display, falling back to "unknown".
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }

    /// Title for display, falling back to a placeholder.
    pub fn title_label(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }
}

/// Convert a priority integer to its display label.
/// The backend uses 1..=3; anything else is "Unknown".
pub fn priority_label(priority: Option<i64>) -> &'static str {
    match priority {
        Some(1) => "Low",
        Some(2) => "Medium",
        Some(3) => "High",
        _ => "Unknown",
    }
}

/// Per-user aggregate computed by the backend. The client only sorts and
/// selects from these, it never recomputes the counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub name: String,
    pub total_tasks: i64,
    pub completed_tasks: i64,
}

/// Dashboard counters over the three known statuses. Tasks with any other
/// status land in no bucket, so the bucket sum may trail the task count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}
