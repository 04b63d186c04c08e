//! Entry point tying configuration, repository, and file formats together

use std::path::Path;

use crate::domain::{report, Task, TaskFilter, TaskStats};
use crate::error::Result;
use crate::storage::{Config, Repository, TaskStore, TaskUpdate};
use crate::transfer::{Exporter, Importer};

/// High-level task operations for one configured store
#[derive(Debug, Clone)]
pub struct TaskManager {
    config: Config,
    repository: Repository,
}

impl TaskManager {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            repository: Repository::new(TaskStore::new(&config.storage_path)),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn add_task(&self, title: &str, description: Option<&str>) -> Result<Task> {
        self.repository.create(title, description)
    }

    pub fn list_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        self.repository.list(filter)
    }

    pub fn find_task(&self, id: u64) -> Result<Task> {
        self.repository.find(id)
    }

    pub fn update_task(&self, id: u64, changes: TaskUpdate) -> Result<Task> {
        self.repository.update(id, changes)
    }

    pub fn delete_task(&self, id: u64) -> Result<Task> {
        self.repository.delete(id)
    }

    pub fn stats(&self) -> Result<TaskStats> {
        self.repository.stats()
    }

    /// Exports every task and returns how many were written
    pub fn export_tasks(&self, format: &str, path: &Path) -> Result<usize> {
        let tasks = self.repository.list(TaskFilter::All)?;
        Exporter::new().export(&tasks, format, path)?;
        Ok(tasks.len())
    }

    pub fn import_tasks(&self, path: &Path, format: Option<&str>) -> Result<Vec<Task>> {
        Importer::default().import(path, format, &self.repository)
    }

    pub fn report(&self) -> Result<Vec<String>> {
        Ok(report::generate(&self.repository.list(TaskFilter::All)?))
    }
}
