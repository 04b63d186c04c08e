//! Task repository
//!
//! CRUD over the stored collection. Every call re-reads the file, applies
//! its change, and writes the whole collection back; nothing is cached
//! between calls. The store's locks cover each read and each write, but not
//! the gap between them, so two processes mutating at once can lose an
//! update.

use tracing::debug;

use super::TaskStore;
use crate::domain::sanitize::{normalize_description, normalize_title};
use crate::domain::{Task, TaskFilter, TaskStats};
use crate::error::{Error, Result};

/// Field changes for [`Repository::update`]. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TaskUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

/// Owns ID assignment and the field rules for stored tasks
#[derive(Debug, Clone)]
pub struct Repository {
    store: TaskStore,
}

impl Repository {
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Creates a pending task with the next free ID
    pub fn create(&self, title: &str, description: Option<&str>) -> Result<Task> {
        let mut tasks = self.store.load()?;
        let task = Task::new(
            self.next_id(&tasks)?,
            normalize_title(Some(title)),
            normalize_description(description),
        );
        task.validate()?;

        tasks.push(task.clone());
        self.store.save(&tasks)?;

        debug!(id = task.id, "created task");
        Ok(task)
    }

    /// Returns the tasks matching `filter`, ordered by ID
    pub fn list(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        let mut tasks: Vec<Task> = self
            .store
            .load()?
            .into_iter()
            .filter(|task| filter.matches(task))
            .collect();
        tasks.sort_by_key(|task| task.id);
        Ok(tasks)
    }

    pub fn find(&self, id: u64) -> Result<Task> {
        self.store
            .load()?
            .into_iter()
            .find(|task| task.id == id)
            .ok_or(Error::NotFound(id))
    }

    /// Applies the supplied fields, refreshes `updated_at`, and persists.
    ///
    /// An empty update still refreshes the timestamp.
    pub fn update(&self, id: u64, changes: TaskUpdate) -> Result<Task> {
        let mut tasks = self.store.load()?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(Error::NotFound(id))?;

        if let Some(title) = changes.title.as_deref() {
            task.title = normalize_title(Some(title));
        }
        if let Some(description) = changes.description.as_deref() {
            task.description = normalize_description(Some(description));
        }
        if let Some(completed) = changes.completed {
            task.completed = completed;
        }
        task.touch();
        task.validate()?;

        let updated = task.clone();
        self.store.save(&tasks)?;

        debug!(id, completed = updated.completed, "updated task");
        Ok(updated)
    }

    /// Removes a task and returns it
    pub fn delete(&self, id: u64) -> Result<Task> {
        let mut tasks = self.store.load()?;
        let index = tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Error::NotFound(id))?;

        let removed = tasks.remove(index);
        self.store.save(&tasks)?;

        debug!(id, "deleted task");
        Ok(removed)
    }

    pub fn stats(&self) -> Result<TaskStats> {
        Ok(TaskStats::from_tasks(&self.store.load()?))
    }

    /// One past the highest stored ID
    fn next_id(&self, tasks: &[Task]) -> Result<u64> {
        let max = tasks.iter().map(|task| task.id).max().unwrap_or(0);
        max.checked_add(1).ok_or_else(|| Error::Storage {
            path: self.store.path().to_path_buf(),
            message: format!("no task ID left after {}", max),
        })
    }
}
