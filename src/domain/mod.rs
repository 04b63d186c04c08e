//! Domain models for taskman
//!
//! Contains the task record, text normalization, and reporting without any
//! I/O concerns.

mod task;
pub mod report;
pub mod sanitize;

pub use task::{
    current_timestamp, format_timestamp, ParseFilterError, Task, TaskFilter, TaskStats,
    MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH,
};
