//! Task export to JSON or CSV

use std::fs;
use std::path::Path;

use tracing::info;

use super::format::Format;
use crate::domain::{format_timestamp, Task};
use crate::error::{Error, Result};

/// Column order of exported CSV files
pub const CSV_HEADER: [&str; 6] = [
    "id",
    "title",
    "description",
    "completed",
    "created_at",
    "updated_at",
];

/// Writes tasks to a file in the requested format
#[derive(Debug, Clone, Copy, Default)]
pub struct Exporter;

impl Exporter {
    pub fn new() -> Self {
        Self
    }

    /// Writes `tasks` to `path`. `format` is matched case-insensitively.
    pub fn export(&self, tasks: &[Task], format: &str, path: &Path) -> Result<()> {
        let format = Format::parse(format).ok_or_else(|| {
            Error::Export(format!(
                "Unsupported export format: {}",
                Format::normalize(format)
            ))
        })?;

        match format {
            Format::Json => export_json(tasks, path)?,
            Format::Csv => export_csv(tasks, path)?,
        }

        info!(path = %path.display(), %format, count = tasks.len(), "exported tasks");
        Ok(())
    }
}

fn export_json(tasks: &[Task], path: &Path) -> Result<()> {
    let payload: Vec<_> = tasks.iter().map(Task::to_map).collect();
    let json = serde_json::to_string_pretty(&payload)
        .map_err(|e| Error::Export(format!("Failed to serialize tasks: {}", e)))?;
    fs::write(path, json)?;
    Ok(())
}

fn export_csv(tasks: &[Task], path: &Path) -> Result<()> {
    let csv_error = |e: csv::Error| Error::Export(format!("Failed to write CSV: {}", e));

    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer.write_record(CSV_HEADER).map_err(csv_error)?;

    for task in tasks {
        writer
            .write_record([
                task.id.to_string(),
                task.title.clone(),
                task.description.clone().unwrap_or_default(),
                task.completed.to_string(),
                format_timestamp(&task.created_at),
                format_timestamp(&task.updated_at),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn sample_tasks() -> Vec<Task> {
        let stamp = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let mut first = Task::new(1, "Export me", Some("with, comma".to_string()));
        first.created_at = stamp;
        first.updated_at = stamp;
        let mut second = Task::new(2, "Done", None);
        second.completed = true;
        second.created_at = stamp;
        second.updated_at = stamp;
        vec![first, second]
    }

    #[test]
    fn export_json_writes_array_of_mappings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");

        Exporter::new().export(&sample_tasks(), "json", &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["title"], "Export me");
        assert_eq!(items[1]["description"], serde_json::Value::Null);
        assert_eq!(items[1]["completed"], true);
        assert_eq!(items[0]["created_at"], "2024-05-01T08:30:00Z");
    }

    #[test]
    fn export_csv_writes_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.csv");

        Exporter::new().export(&sample_tasks(), "csv", &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "id,title,description,completed,created_at,updated_at");
        assert_eq!(
            lines[1],
            "1,Export me,\"with, comma\",false,2024-05-01T08:30:00Z,2024-05-01T08:30:00Z"
        );
        assert_eq!(lines[2], "2,Done,,true,2024-05-01T08:30:00Z,2024-05-01T08:30:00Z");
    }

    #[test]
    fn export_normalizes_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("normalize_export.json");

        Exporter::new().export(&[], " JSON ", &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unsupported_format_is_export_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.xml");

        let err = Exporter::new().export(&sample_tasks(), "XML", &path).unwrap_err();
        assert!(matches!(err, Error::Export(_)));
        assert_eq!(err.to_string(), "Unsupported export format: xml");
        assert!(!path.exists());
    }
}
