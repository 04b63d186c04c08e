//! taskman - Local task tracking

use std::process::ExitCode;

use clap::Parser;
use taskman::cli::{self, Cli, Output};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(verbose: bool) {
    // RUST_LOG wins; ignore empty or invalid filters rather than failing startup
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new(if verbose { "taskman=debug" } else { "off" }));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Bad input exits with 1; unreadable storage, config, or IO failures with 2
fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<taskman::Error>() {
        Some(e) if e.is_user_error() => ExitCode::FAILURE,
        _ => ExitCode::from(2),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = Output::new(cli.output_format(), cli.verbose);
    if let Err(e) = cli::run(cli) {
        output.error(&format!("{:#}", e));
        exit_code(&e)
    } else {
        ExitCode::SUCCESS
    }
}
