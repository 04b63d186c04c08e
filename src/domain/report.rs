//! Plain-text task report

use super::task::{Task, TaskStats};

/// Number of tasks listed under "Recent tasks"
pub const RECENT_TASK_LIMIT: usize = 5;

/// Builds the report as a list of lines: counts, then the newest tasks
pub fn generate(tasks: &[Task]) -> Vec<String> {
    let stats = TaskStats::from_tasks(tasks);
    let mut lines = vec![
        "Task Report".to_string(),
        format!("Total: {}", stats.total),
        format!("Pending: {}", stats.pending),
        format!("Completed: {}", stats.completed),
        String::new(),
        "Recent tasks:".to_string(),
    ];

    let mut recent: Vec<&Task> = tasks.iter().collect();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

    for task in recent.into_iter().take(RECENT_TASK_LIMIT) {
        lines.push(format!(
            "- [{}] #{} {} ({})",
            task.status_label(),
            task.id,
            task.title,
            task.created_at.format("%Y-%m-%d %H:%M:%S")
        ));
    }

    if tasks.is_empty() {
        lines.push("No tasks available.".to_string());
    }

    lines
}
