//! taskman - A local task tracker
//!
//! Tasks live in a single JSON file guarded by advisory file locks. The
//! library covers creating, listing, updating, and deleting tasks, summary
//! counts, a text report, and JSON/CSV import and export.

pub mod cli;
pub mod domain;
pub mod error;
pub mod manager;
pub mod storage;
pub mod transfer;

pub use domain::{Task, TaskFilter, TaskStats};
pub use error::{Error, Result, ValidationError};
pub use manager::TaskManager;
pub use storage::{Config, Repository, TaskStore, TaskUpdate};
