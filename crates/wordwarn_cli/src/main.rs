//! wordwarn CLI
//!
//! Highlights words whose length falls in a range, in HTML files.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::{run_apply, run_init, run_remove, run_scan};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(found) => {
            if found {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

/// Runs the selected command. `Ok(true)` means `scan` found offending words.
fn run(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Commands::Apply {
            file,
            options,
            reset,
            output,
        } => run_apply(cli, file, options, *reset, output.as_deref()).map(|_| false),
        Commands::Remove { file, output } => run_remove(file, output.as_deref()).map(|_| false),
        Commands::Scan {
            file,
            options,
            format,
        } => run_scan(cli, file, options, *format),
        Commands::Init { force } => run_init(*force).map(|_| false),
    }
}
