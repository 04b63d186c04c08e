//! Task command handlers

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::domain::TaskFilter;
use crate::manager::TaskManager;
use crate::storage::TaskUpdate;

pub fn add(
    manager: &TaskManager,
    output: &Output,
    title: &str,
    description: Option<&str>,
) -> Result<()> {
    let task = manager.add_task(title, description)?;

    if output.is_json() {
        output.data(&task.to_map());
    } else {
        output.success(&format!("Created task #{}: {}", task.id, task.title));
    }
    Ok(())
}

pub fn list(manager: &TaskManager, output: &Output, filter: TaskFilter) -> Result<()> {
    let tasks = manager.list_tasks(filter)?;
    output.tasks(&tasks);
    Ok(())
}

pub fn show(manager: &TaskManager, output: &Output, id: u64) -> Result<()> {
    let task = manager.find_task(id)?;

    if output.is_json() {
        output.data(&task.to_map());
    } else {
        output.success(&task.to_string());
    }
    Ok(())
}

pub fn update(
    manager: &TaskManager,
    output: &Output,
    id: u64,
    title: Option<String>,
    description: Option<String>,
    completed: Option<bool>,
) -> Result<()> {
    let changes = TaskUpdate {
        title,
        description,
        completed,
    };
    if changes.is_empty() {
        output.verbose_ctx("update", "no fields given, refreshing timestamp only");
    }
    let task = manager.update_task(id, changes)?;

    if output.is_json() {
        output.data(&task.to_map());
    } else {
        output.success(&format!("Updated task #{}", task.id));
    }
    Ok(())
}

pub fn delete(manager: &TaskManager, output: &Output, id: u64) -> Result<()> {
    manager.delete_task(id)?;
    output.success(&format!("Deleted task #{}", id));
    Ok(())
}

pub fn stats(manager: &TaskManager, output: &Output) -> Result<()> {
    let stats = manager.stats()?;

    if output.is_json() {
        output.data(&stats);
    } else {
        output.success(&format!("Total: {}", stats.total));
        output.success(&format!("Pending: {}", stats.pending));
        output.success(&format!("Completed: {}", stats.completed));
    }
    Ok(())
}

pub fn export(manager: &TaskManager, output: &Output, path: &Path, format: &str) -> Result<()> {
    let count = manager.export_tasks(format, path)?;
    output.success(&format!("Exported {} tasks to {}", count, path.display()));
    Ok(())
}

pub fn import(
    manager: &TaskManager,
    output: &Output,
    path: &Path,
    format: Option<&str>,
) -> Result<()> {
    let imported = manager.import_tasks(path, format)?;
    output.success(&format!(
        "Imported {} tasks from {}",
        imported.len(),
        path.display()
    ));
    Ok(())
}

pub fn report(manager: &TaskManager, output: &Output) -> Result<()> {
    let lines = manager.report()?;
    output.lines(&lines);
    Ok(())
}
