//! Output formatting for CLI commands

use serde::Serialize;

use crate::domain::Task;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Column titles of the task table
const HEADER: [&str; 5] = ["ID", "Title", "Description", "Status", "Created_At"];

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints an error message
    pub fn error(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("Error: {}", message),
            OutputFormat::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "success": false,
                        "error": message
                    })
                );
            }
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        let rendered = match self.format {
            OutputFormat::Text => serde_json::to_string_pretty(data),
            OutputFormat::Json => serde_json::to_string(data),
        };
        if let Ok(json) = rendered {
            println!("{}", json);
        }
    }

    /// Prints tasks as a table, or as an array of mappings in JSON mode
    pub fn tasks(&self, tasks: &[Task]) {
        match self.format {
            OutputFormat::Text => {
                for line in render_table(tasks) {
                    println!("{}", line);
                }
            }
            OutputFormat::Json => {
                let items: Vec<_> = tasks.iter().map(Task::to_map).collect();
                self.data(&items);
            }
        }
    }

    /// Prints plain lines (text only; JSON mode gets them as an array)
    pub fn lines(&self, lines: &[String]) {
        match self.format {
            OutputFormat::Text => {
                for line in lines {
                    println!("{}", line);
                }
            }
            OutputFormat::Json => self.data(&lines),
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

/// Renders the task table: padded columns joined by ` | `
pub fn render_table(tasks: &[Task]) -> Vec<String> {
    if tasks.is_empty() {
        return vec!["No tasks found.".to_string()];
    }

    let rows: Vec<[String; 5]> = tasks.iter().map(task_row).collect();
    let widths: Vec<usize> = (0..HEADER.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(HEADER[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(row_line(HEADER.iter().copied(), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(row_line(row.iter().map(String::as_str), &widths));
    }
    lines
}

fn task_row(task: &Task) -> [String; 5] {
    [
        task.id.to_string(),
        task.title.clone(),
        task.description.clone().unwrap_or_default(),
        task.status_label().to_string(),
        task.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    ]
}

fn row_line<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    values
        .zip(widths)
        .map(|(value, width)| format!("{:<width$}", value, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
}
