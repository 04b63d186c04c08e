//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::task;
use crate::domain::TaskFilter;
use crate::manager::TaskManager;
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "taskman")]
#[command(author, version, about = "Track tasks in a local JSON file")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Environment whose storage path is used (falls back to APP_ENV, then development)
    #[arg(long, global = true, env = "TASK_MANAGER_ENV")]
    pub env: Option<String>,

    /// Storage file to use instead of the configured one
    #[arg(long, global = true, env = "TASK_MANAGER_DATA_PATH")]
    pub data_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Title for the task
        #[arg(long)]
        title: String,

        /// Description for the task
        #[arg(long)]
        description: Option<String>,
    },

    /// List tasks
    List {
        /// Which tasks to show: all, pending, or completed
        #[arg(long, default_value = "all")]
        filter: TaskFilter,
    },

    /// Show a single task
    Show {
        /// Task ID
        #[arg(long)]
        id: u64,
    },

    /// Update a task
    Update {
        /// Task ID
        #[arg(long)]
        id: u64,

        /// Updated title
        #[arg(long)]
        title: Option<String>,

        /// Updated description
        #[arg(long)]
        description: Option<String>,

        /// Completed status (true or false)
        #[arg(long)]
        completed: Option<bool>,
    },

    /// Delete a task
    Delete {
        /// Task ID
        #[arg(long)]
        id: u64,
    },

    /// Show task counts
    Stats,

    /// Export tasks to a file
    Export {
        /// Export destination
        #[arg(long)]
        output: PathBuf,

        /// Export format (json or csv)
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Import tasks from a file
    Import {
        /// Import source
        #[arg(long)]
        input: PathBuf,

        /// Import format (json or csv); inferred from the extension when omitted
        #[arg(long)]
        format: Option<String>,
    },

    /// Show a detailed task report
    Report,

    /// Show the resolved environment and storage path
    Config,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Resolves configuration and executes the parsed command
pub fn run(cli: Cli) -> Result<()> {
    let output = Output::new(cli.output_format(), cli.verbose);

    let root = std::env::current_dir().context("Failed to determine working directory")?;
    let env = cli.env.clone().or_else(|| std::env::var("APP_ENV").ok());
    let config = Config::resolve(&root, env.as_deref(), cli.data_path.as_deref())
        .context("Failed to load configuration")?;
    output.verbose_ctx(
        "config",
        &format!("env={} storage={}", config.env, config.storage_path.display()),
    );

    let manager = TaskManager::new(&config);

    match cli.command {
        Commands::Add { title, description } => {
            task::add(&manager, &output, &title, description.as_deref())?
        }
        Commands::List { filter } => {
            output.verbose_ctx("list", &format!("filter={}", filter));
            task::list(&manager, &output, filter)?
        }
        Commands::Show { id } => task::show(&manager, &output, id)?,
        Commands::Update {
            id,
            title,
            description,
            completed,
        } => task::update(&manager, &output, id, title, description, completed)?,
        Commands::Delete { id } => task::delete(&manager, &output, id)?,
        Commands::Stats => task::stats(&manager, &output)?,
        Commands::Export {
            output: path,
            format,
        } => {
            output.verbose_ctx("export", &format!("format={} path={}", format, path.display()));
            task::export(&manager, &output, &path, &format)?
        }
        Commands::Import { input, format } => {
            output.verbose_ctx("import", &format!("format={:?} path={}", format, input.display()));
            task::import(&manager, &output, &input, format.as_deref())?
        }
        Commands::Report => task::report(&manager, &output)?,
        Commands::Config => output.data(&config),
    }

    Ok(())
}
