//! Text rendering for the one-shot `show` subcommand.
//!
//! Produces the same three panels as the interactive board, as markdown-ish
//! text on stdout.

use crate::analytics::{dashboard_completion_rate, status_counts};
use crate::api::{AnalyticsSnapshot, top_contributor};
use crate::types::{Task, priority_label};

/// Format the dashboard panel: per-status counts, total, completion rate.
pub fn format_dashboard(tasks: &[Task]) -> String {
    let counts = status_counts(tasks);
    let mut out = String::new();
    out.push_str("## Dashboard\n");
    out.push_str(&format!("- **To Do**: {}\n", counts.todo));
    out.push_str(&format!("- **In Progress**: {}\n", counts.in_progress));
    out.push_str(&format!("- **Done**: {}\n", counts.done));
    out.push_str(&format!("- **Total Tasks**: {}\n", tasks.len()));
    out.push_str(&format!(
        "- **Completion Rate**: {}%\n",
        dashboard_completion_rate(tasks)
    ));
    out
}

/// Format the analytics panel: backend stats plus top contributor.
pub fn format_analytics(snapshot: &AnalyticsSnapshot) -> String {
    let mut out = String::new();
    out.push_str("## Analytics\n");
    out.push_str("### Status Overview\n");
    for (status, count) in &snapshot.stats {
        out.push_str(&format!("- {}: {}\n", format_status_name(status), count));
    }
    out.push_str(&format!("- **Total**: {}\n", snapshot.total_tasks()));
    if let Some(top) = top_contributor(&snapshot.summaries) {
        out.push_str("### Top Contributor\n");
        out.push_str(&format!(
            "- **{}**: {} tasks ({} completed)\n",
            top.name, top.total_tasks, top.completed_tasks
        ));
    }
    out
}

/// Format the task list with status and priority labels.
pub fn format_task_list(tasks: &[Task]) -> String {
    let mut out = String::new();
    out.push_str(&format!("## All Tasks ({})\n", tasks.len()));
    for task in tasks {
        let id = task
            .id
            .map_or_else(|| "-".to_owned(), |id| id.to_string());
        out.push_str(&format!(
            "- [{}] {} ({} | Priority: {})\n",
            id,
            task.title_label(),
            task.status_label(),
            priority_label(task.priority)
        ));
    }
    out
}

/// Render all three panels in page order.
pub fn format_report(tasks: &[Task], analytics: &AnalyticsSnapshot) -> String {
    let mut out = String::new();
    out.push_str("# Task Manager\n\n");
    out.push_str(&format_dashboard(tasks));
    out.push('\n');
    out.push_str(&format_analytics(analytics));
    out.push('\n');
    out.push_str(&format_task_list(tasks));
    out
}

/// Capitalize a status name for display ("in_progress" -> "In Progress").
pub fn format_status_name(status: &str) -> String {
    status
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
