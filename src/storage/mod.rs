//! # Storage Layer
//!
//! Persistence for taskman.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Tasks | Pretty-printed JSON array | `storage_path` from [`Config`] |
//! | Config | TOML, one table per environment | `config/task_manager.toml` |
//!
//! ## Concurrency Safety
//!
//! - [`TaskStore`] takes a shared `fs2` lock for each read and an exclusive
//!   lock for each write, released before the call returns
//! - [`Repository`] operations are load, modify, save; no lock spans the
//!   whole sequence
//!
//! ## Key Types
//!
//! - [`Repository`] - Create, list, update, delete tasks
//! - [`TaskStore`] - Read/write the task file
//! - [`Config`] - Resolved environment and storage path

mod config;
mod json;
mod repository;

pub use config::{Config, EnvironmentConfig, CONFIG_FILE, DEFAULT_ENV};
pub use json::TaskStore;
pub use repository::{Repository, TaskUpdate};
