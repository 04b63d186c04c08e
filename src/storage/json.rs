//! JSON document storage for tasks
//!
//! The whole collection lives in one pretty-printed JSON array. Reads take a
//! shared lock and writes take an exclusive lock on the file itself, each
//! held only for the duration of that single read or write.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::domain::Task;
use crate::error::{Error, Result};

/// An open file holding an advisory lock, released when dropped
struct LockedFile {
    file: File,
}

impl LockedFile {
    fn shared(file: File) -> io::Result<Self> {
        file.lock_shared()?;
        Ok(Self { file })
    }

    fn exclusive(file: File) -> io::Result<Self> {
        file.lock_exclusive()?;
        Ok(Self { file })
    }
}

impl Drop for LockedFile {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// Store for the task collection as a single JSON array
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Creates a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all tasks in stored order. A missing file is an empty collection.
    pub fn load(&self) -> Result<Vec<Task>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "task store missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut locked = LockedFile::shared(file)?;
        let mut content = String::new();
        locked.file.read_to_string(&mut content)?;
        drop(locked);

        // A writer may have created the file but not yet filled it
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|e| self.invalid(e))?;
        debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Overwrites the file with `tasks`, keeping the order given
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Serialize before touching the file so a failure leaves it intact
        let payload = serde_json::to_string_pretty(tasks).map_err(|e| self.invalid(e))?;

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;

        let mut locked = LockedFile::exclusive(file)?;
        locked.file.set_len(0)?;
        locked.file.write_all(payload.as_bytes())?;
        locked.file.write_all(b"\n")?;
        locked.file.flush()?;
        locked.file.sync_all()?;
        drop(locked);

        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }

    fn invalid(&self, err: serde_json::Error) -> Error {
        Error::Storage {
            path: self.path.clone(),
            message: err.to_string(),
        }
    }
}
