//! Task import from JSON or CSV
//!
//! Each entry is coerced, validated, and created through the repository in
//! file order. An invalid entry stops the import, but tasks created for the
//! entries before it stay in the store.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use super::format::Format;
use super::validate::{InputValidator, RawFlag, RawImportRecord};
use crate::domain::sanitize::decode_lossy;
use crate::domain::Task;
use crate::error::{Error, Result};
use crate::storage::{Repository, TaskUpdate};

/// Reads task entries from a file and creates them
#[derive(Debug, Clone, Default)]
pub struct Importer {
    validator: InputValidator,
}

impl Importer {
    pub fn new(validator: InputValidator) -> Self {
        Self { validator }
    }

    /// Imports every entry in `path` into `repository`.
    ///
    /// Without an explicit `format` the file extension decides.
    pub fn import(
        &self,
        path: &Path,
        format: Option<&str>,
        repository: &Repository,
    ) -> Result<Vec<Task>> {
        if !path.exists() {
            return Err(Error::Import(format!(
                "Import file not found: {}",
                path.display()
            )));
        }

        let format_name = match format {
            Some(raw) => Format::normalize(raw),
            None => Format::extension_of(path),
        };
        let format = Format::parse(&format_name).ok_or_else(|| {
            Error::Import(format!("Unsupported import format: {}", format_name))
        })?;

        let content = decode_lossy(&fs::read(path)?);
        let records = match format {
            Format::Json => parse_json(&content)?,
            Format::Csv => parse_csv(&content)?,
        };

        let mut imported = Vec::with_capacity(records.len());
        for (index, raw) in records.into_iter().enumerate() {
            let record = self
                .validator
                .validate(raw.coerced(&self.validator))
                .map_err(|errors| {
                    warn!(entry = index + 1, created = imported.len(), "import entry rejected");
                    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                    Error::Import(messages.join(" "))
                })?;

            let task = repository.create(&record.title, record.description.as_deref())?;
            let task = repository.update(task.id, TaskUpdate::new().completed(record.completed))?;
            imported.push(task);
        }

        info!(path = %path.display(), %format, count = imported.len(), "imported tasks");
        Ok(imported)
    }
}

/// Parses a JSON array of entry objects
pub fn parse_json(content: &str) -> Result<Vec<RawImportRecord>> {
    let data: Value =
        serde_json::from_str(content).map_err(|e| Error::Import(format!("Invalid JSON: {}", e)))?;

    let Value::Array(entries) = data else {
        return Err(Error::Import(
            "JSON import expects an array of tasks.".to_string(),
        ));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Object(fields) => Ok(RawImportRecord {
                title: json_text(fields.get("title")),
                description: json_text(fields.get("description")),
                completed: json_flag(fields.get("completed")),
            }),
            _ => Err(Error::Import(format!(
                "Entry {} must be an object.",
                index + 1
            ))),
        })
        .collect()
}

/// Parses CSV rows by header name; empty cells count as absent
pub fn parse_csv(content: &str) -> Result<Vec<RawImportRecord>> {
    let csv_error = |e: csv::Error| Error::Import(format!("Invalid CSV: {}", e));

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(csv_error)?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);
    let (title_col, description_col, completed_col) =
        (column("title"), column("description"), column("completed"));

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let cell = |col: Option<usize>| {
            col.and_then(|i| row.get(i))
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        records.push(RawImportRecord {
            title: cell(title_col),
            description: cell(description_col),
            completed: cell(completed_col).map(RawFlag::Text),
        });
    }

    Ok(records)
}

fn json_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn json_flag(value: Option<&Value>) -> Option<RawFlag> {
    match value? {
        Value::Null => None,
        Value::Bool(flag) => Some(RawFlag::Bool(*flag)),
        Value::String(text) => Some(RawFlag::Text(text.clone())),
        other => Some(RawFlag::Text(other.to_string())),
    }
}
