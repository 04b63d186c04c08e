//! Task domain model
//!
//! A task is the only persisted record. It carries a numeric ID assigned by
//! the repository, a title, an optional description, a completion flag, and
//! creation/update timestamps kept at whole-second precision.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ValidationError;

/// Maximum title length in characters
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum description length in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Returns the current time truncated to whole seconds
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// RFC 3339 timestamps with second precision and a `Z` suffix
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
    }
}

/// Formats a timestamp the way it is written to disk and to exports
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    timestamp::format(value)
}

/// A tracked unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,

    pub title: String,

    /// `None` when no description was given; distinct from an empty string
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub completed: bool,

    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task stamped with the current time
    pub fn new(id: u64, title: impl Into<String>, description: Option<String>) -> Self {
        let now = current_timestamp();
        Self {
            id,
            title: title.into(),
            description,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks the field rules: non-blank title within length, description within length
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if self.title.chars().count() > MAX_TITLE_LENGTH {
            return Err(ValidationError::TitleTooLong);
        }
        if let Some(description) = &self.description {
            if description.chars().count() > MAX_DESCRIPTION_LENGTH {
                return Err(ValidationError::DescriptionTooLong);
            }
        }
        Ok(())
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_pending(&self) -> bool {
        !self.completed
    }

    /// Returns `"Completed"` or `"Pending"`
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }

    /// Title, followed by ` - description` when one is set
    pub fn summary(&self) -> String {
        match &self.description {
            Some(description) => format!("{} - {}", self.title, description),
            None => self.title.clone(),
        }
    }

    /// Refreshes `updated_at`, never moving it before `created_at`
    pub fn touch(&mut self) {
        self.updated_at = current_timestamp().max(self.created_at);
    }

    /// Converts the task into a string-keyed mapping of primitive values
    pub fn to_map(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert("id".into(), self.id.into());
        map.insert("title".into(), self.title.clone().into());
        map.insert(
            "description".into(),
            self.description
                .clone()
                .map(serde_json::Value::String)
                .unwrap_or(serde_json::Value::Null),
        );
        map.insert("completed".into(), self.completed.into());
        map.insert("created_at".into(), format_timestamp(&self.created_at).into());
        map.insert("updated_at".into(), format_timestamp(&self.updated_at).into());
        map
    }

    /// Rebuilds a task from a mapping produced by [`Task::to_map`]
    pub fn from_map(map: serde_json::Map<String, serde_json::Value>) -> serde_json::Result<Self> {
        serde_json::from_value(serde_json::Value::Object(map))
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task {}: {} [{}]", self.id, self.summary(), self.status_label())
    }
}

#[derive(Debug, Error)]
#[error("Unknown filter '{0}'. Expected one of: all, pending, completed")]
pub struct ParseFilterError(String);

/// Selects tasks by completion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => task.is_pending(),
            TaskFilter::Completed => task.is_completed(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Pending => "pending",
            TaskFilter::Completed => "completed",
        }
    }
}

impl FromStr for TaskFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TaskFilter::All),
            "pending" => Ok(TaskFilter::Pending),
            "completed" => Ok(TaskFilter::Completed),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts over a task collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            if task.completed {
                stats.completed += 1;
            } else {
                stats.pending += 1;
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn make_task(id: u64) -> Task {
        Task::new(id, format!("Task {}", id), None)
    }

    #[test]
    fn new_task_is_pending() {
        let task = make_task(1);
        assert!(task.is_pending());
        assert_eq!(task.status_label(), "Pending");
        assert_eq!(task.created_at, task.updated_at);
        assert_eq!(task.created_at.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn validate_title_boundaries() {
        let mut task = Task::new(1, "a".repeat(MAX_TITLE_LENGTH), None);
        assert!(task.validate().is_ok());

        task.title = "a".repeat(MAX_TITLE_LENGTH + 1);
        assert_eq!(task.validate(), Err(ValidationError::TitleTooLong));

        task.title = "   ".to_string();
        assert_eq!(task.validate(), Err(ValidationError::TitleRequired));
    }

    #[test]
    fn validate_description_boundaries() {
        let mut task = Task::new(1, "Title", Some("d".repeat(MAX_DESCRIPTION_LENGTH)));
        assert!(task.validate().is_ok());

        task.description = Some("d".repeat(MAX_DESCRIPTION_LENGTH + 1));
        assert_eq!(task.validate(), Err(ValidationError::DescriptionTooLong));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let task = Task::new(1, "é".repeat(MAX_TITLE_LENGTH), None);
        assert!(task.validate().is_ok());
    }

    #[test]
    fn summary_and_display() {
        let mut task = Task::new(3, "Buy milk", Some("2 litres".to_string()));
        assert_eq!(task.summary(), "Buy milk - 2 litres");

        task.completed = true;
        assert_eq!(task.to_string(), "Task 3: Buy milk - 2 litres [Completed]");

        task.description = None;
        assert_eq!(task.summary(), "Buy milk");
    }

    #[test]
    fn touch_never_precedes_creation() {
        let mut task = make_task(1);
        task.created_at = Utc.with_ymd_and_hms(2999, 1, 1, 0, 0, 0).unwrap();
        task.touch();
        assert!(task.updated_at >= task.created_at);
    }

    #[test]
    fn serialized_shape() {
        let mut task = make_task(4);
        task.created_at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        task.updated_at = task.created_at;

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["completed"], false);
        assert_eq!(json["created_at"], "2024-03-09T14:05:00Z");
    }

    #[test]
    fn deserialize_normalizes_offsets() {
        let json = r#"{
            "id": 1,
            "title": "Offset",
            "description": null,
            "completed": true,
            "created_at": "2024-03-09T16:05:00+02:00",
            "updated_at": "2024-03-09T16:05:00+02:00"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.created_at, Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap());
        assert!(task.completed);
    }

    #[test]
    fn deserialize_rejects_bad_timestamp() {
        let json = r#"{"id": 1, "title": "x", "created_at": "yesterday", "updated_at": "today"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn filter_parsing() {
        assert_eq!("all".parse::<TaskFilter>().unwrap(), TaskFilter::All);
        assert_eq!(" Pending ".parse::<TaskFilter>().unwrap(), TaskFilter::Pending);
        assert_eq!("COMPLETED".parse::<TaskFilter>().unwrap(), TaskFilter::Completed);
        assert!("done".parse::<TaskFilter>().is_err());
    }

    #[test]
    fn stats_from_tasks() {
        let mut done = make_task(2);
        done.completed = true;
        let tasks = vec![make_task(1), done, make_task(3)];

        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(
            stats,
            TaskStats {
                total: 3,
                pending: 2,
                completed: 1
            }
        );
    }

    fn task_strategy() -> impl Strategy<Value = Task> {
        (
            1u64..100_000,
            "[a-zA-Z0-9 ]{1,50}",
            prop::option::of("[ -~]{0,80}"),
            any::<bool>(),
            0i64..4_000_000_000,
            0i64..1_000_000,
        )
            .prop_map(|(id, title, description, completed, created, delta)| {
                let created_at = Utc.timestamp_opt(created, 0).unwrap();
                Task {
                    id,
                    title,
                    description,
                    completed,
                    created_at,
                    updated_at: Utc.timestamp_opt(created + delta, 0).unwrap(),
                }
            })
    }

    proptest! {
        #[test]
        fn map_roundtrip_is_exact(task in task_strategy()) {
            let restored = Task::from_map(task.to_map()).unwrap();
            prop_assert_eq!(restored, task);
        }

        #[test]
        fn filters_partition_all(flags in prop::collection::vec(any::<bool>(), 0..40)) {
            let tasks: Vec<Task> = flags
                .iter()
                .enumerate()
                .map(|(i, &completed)| {
                    let mut task = make_task(i as u64 + 1);
                    task.completed = completed;
                    task
                })
                .collect();

            for task in &tasks {
                let pending = TaskFilter::Pending.matches(task);
                let completed = TaskFilter::Completed.matches(task);
                prop_assert!(TaskFilter::All.matches(task));
                prop_assert!(pending != completed);
            }
        }
    }
}
