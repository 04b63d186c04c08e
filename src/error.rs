//! Error types for taskman
//!
//! Every core operation returns [`Result`]. Callers match on [`Error`] to
//! tell validation failures apart from missing tasks, unreadable storage,
//! and import/export problems.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};

/// A field rule broken by a task or an import entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required.")]
    TitleRequired,

    #[error("Title must be <= {} characters.", MAX_TITLE_LENGTH)]
    TitleTooLong,

    #[error("Description must be <= {} characters.", MAX_DESCRIPTION_LENGTH)]
    DescriptionTooLong,

    #[error("Completed must be true or false.")]
    CompletedNotBoolean,
}

/// Main error type for taskman operations
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Task {0} not found.")]
    NotFound(u64),

    #[error("Invalid data in {}: {message}", .path.display())]
    Storage { path: PathBuf, message: String },

    #[error("{0}")]
    Export(String),

    #[error("{0}")]
    Import(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for errors caused by bad input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::Validation(_) | Error::NotFound(_) | Error::Export(_) | Error::Import(_)
        )
    }
}

/// Result type alias for taskman operations
pub type Result<T> = std::result::Result<T, Error>;
