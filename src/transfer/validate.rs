//! Field rules for imported entries
//!
//! Entries arrive as [`RawImportRecord`]s with every field optional and
//! loosely typed. The importer coerces `completed`, runs
//! [`InputValidator::validate_import_entry`], and only then turns the record
//! into a [`ValidatedRecord`].

use crate::domain::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};
use crate::error::ValidationError;

/// A `completed` value as it appeared in the source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawFlag {
    Bool(bool),
    Text(String),
}

/// One import entry before coercion and validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawImportRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<RawFlag>,
}

impl RawImportRecord {
    /// Replaces `completed` with its coerced boolean form
    pub fn coerced(self, validator: &InputValidator) -> Self {
        let completed = validator
            .coerce_boolean(self.completed.as_ref())
            .map(RawFlag::Bool);
        Self { completed, ..self }
    }
}

/// An entry that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Validation and coercion rules shared by importers
#[derive(Debug, Clone, Copy, Default)]
pub struct InputValidator;

impl InputValidator {
    pub fn new() -> Self {
        Self
    }

    /// Lists every rule the entry breaks; empty means valid
    pub fn validate_import_entry(&self, entry: &RawImportRecord) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        match entry.title.as_deref() {
            None => errors.push(ValidationError::TitleRequired),
            Some(title) if title.trim().is_empty() => errors.push(ValidationError::TitleRequired),
            Some(title) if title.chars().count() > MAX_TITLE_LENGTH => {
                errors.push(ValidationError::TitleTooLong)
            }
            Some(_) => {}
        }

        if let Some(description) = &entry.description {
            if description.chars().count() > MAX_DESCRIPTION_LENGTH {
                errors.push(ValidationError::DescriptionTooLong);
            }
        }

        if let Some(RawFlag::Text(_)) = entry.completed {
            errors.push(ValidationError::CompletedNotBoolean);
        }

        errors
    }

    /// Booleans pass through; text is true only when it reads `true`
    /// (trimmed, any case). Absent stays absent.
    pub fn coerce_boolean(&self, value: Option<&RawFlag>) -> Option<bool> {
        match value? {
            RawFlag::Bool(flag) => Some(*flag),
            RawFlag::Text(text) => Some(text.trim().eq_ignore_ascii_case("true")),
        }
    }

    /// Validates an entry and converts it into a typed record
    pub fn validate(
        &self,
        entry: RawImportRecord,
    ) -> std::result::Result<ValidatedRecord, Vec<ValidationError>> {
        let errors = self.validate_import_entry(&entry);
        if !errors.is_empty() {
            return Err(errors);
        }

        let completed = self.coerce_boolean(entry.completed.as_ref()).unwrap_or(false);
        Ok(ValidatedRecord {
            title: entry.title.unwrap_or_default(),
            description: entry.description,
            completed,
        })
    }
}
