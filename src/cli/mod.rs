//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `add --title T [--description D]` | Create a task |
//! | `list [--filter all\|pending\|completed]` | Table of tasks |
//! | `show --id N` | One task |
//! | `update --id N [--title] [--description] [--completed true\|false]` | Change fields |
//! | `delete --id N` | Remove a task |
//! | `stats` | Total, pending, and completed counts |
//! | `export --output PATH [--format json\|csv]` | Write all tasks to a file |
//! | `import --input PATH [--format json\|csv]` | Create tasks from a file |
//! | `report` | Counts plus the five newest tasks |
//! | `config` | Resolved environment and storage path |
//!
//! ## Output Formats
//!
//! Text by default; `--json` prints machine-parseable JSON.
//!
//! ## Environment
//!
//! - `TASK_MANAGER_ENV` / `APP_ENV` select the environment (default `development`)
//! - `TASK_MANAGER_DATA_PATH` overrides the storage file
//! - `RUST_LOG` enables tracing output on stderr

mod app;
mod output;
mod task;

pub use app::{run, Cli, Commands};
pub use output::{render_table, Output, OutputFormat};
