//! Decoding of the backend's positional task records.
//!
//! `/api/tasks/` transmits each task as a fixed-order array rather than a
//! named object: `[id, title, description, status, user_id, priority]`.
//! Decoding is infallible by contract: positions that are missing or carry
//! the wrong JSON type decode to `None` and render as fallback labels
//! downstream. Short records are logged so malformed data stays visible
//! without being rejected.

use crate::types::Task;
use serde_json::Value;
use tracing::debug;

/// Number of positions in a full task record.
const TASK_RECORD_LEN: usize = 6;

/// Decode one positional record into a [`Task`].
pub fn decode_task(raw: &Value) -> Task {
    if let Some(fields) = raw.as_array() {
        if fields.len() < TASK_RECORD_LEN {
            debug!(
                len = fields.len(),
                expected = TASK_RECORD_LEN,
                "short task record, missing positions decode as absent"
            );
        }
    }
    Task {
        id: raw.get(0).and_then(Value::as_i64),
        title: raw.get(1).and_then(Value::as_str).map(str::to_owned),
        description: raw.get(2).and_then(Value::as_str).map(str::to_owned),
        status: raw.get(3).and_then(Value::as_str).map(str::to_owned),
        owner_id: raw.get(4).and_then(Value::as_i64),
        priority: raw.get(5).and_then(Value::as_i64),
    }
}

/// Decode a sequence of positional records, preserving order.
pub fn decode_tasks(raw: &[Value]) -> Vec<Task> {
    raw.iter().map(decode_task).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_record_by_position() {
        let raw = json!([7, "Write docs", "API reference", "in_progress", 3, 2]);
        let task = decode_task(&raw);
        assert_eq!(task.id, Some(7));
        assert_eq!(task.title.as_deref(), Some("Write docs"));
        assert_eq!(task.description.as_deref(), Some("API reference"));
        assert_eq!(task.status.as_deref(), Some("in_progress"));
        assert_eq!(task.owner_id, Some(3));
        assert_eq!(task.priority, Some(2));
    }

    #[test]
    fn short_record_decodes_missing_positions_as_none() {
        let raw = json!([1, "Fix login"]);
        let task = decode_task(&raw);
        assert_eq!(task.id, Some(1));
        assert_eq!(task.title.as_deref(), Some("Fix login"));
        assert_eq!(task.description, None);
        assert_eq!(task.status, None);
        assert_eq!(task.owner_id, None);
        assert_eq!(task.priority, None);
    }

    #[test]
    fn wrong_typed_positions_decode_as_none() {
        let raw = json!(["not-a-number", 42, null, 5, "x", "high"]);
        let task = decode_task(&raw);
        assert_eq!(task.id, None);
        assert_eq!(task.title, None);
        assert_eq!(task.description, None);
        assert_eq!(task.status, None);
        assert_eq!(task.owner_id, None);
        assert_eq!(task.priority, None);
    }

    #[test]
    fn non_array_record_decodes_fully_absent() {
        let task = decode_task(&json!({"id": 1}));
        assert_eq!(task, Task::default());
    }

    #[test]
    fn decode_tasks_preserves_order() {
        let raw = vec![
            json!([1, "a", "", "todo", 1, 1]),
            json!([2, "b", "", "done", 1, 2]),
        ];
        let tasks = decode_tasks(&raw);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, Some(1));
        assert_eq!(tasks[1].id, Some(2));
    }
}
