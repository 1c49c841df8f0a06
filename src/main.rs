//! pre-commit-templates
//!
//! Pre-commit hook that keeps files generated from templates in sync with
//! their templates.

mod cli;
mod error;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use pct_core::{Config, SyncEngine, SyncOptions, SyncReport};
use pct_fs::NormalizedPath;

use cli::Cli;
use error::Result;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }

    match run(&cli) {
        Ok(report) if report.success() => ExitCode::SUCCESS,
        Ok(report) => {
            tracing::debug!(failed = report.failures.len(), "Some templates failed");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<SyncReport> {
    let root = match &cli.root {
        Some(root) => NormalizedPath::canonicalize(root)?,
        None => pct_git::current_root()?,
    };

    let config = Config::load(root)?;
    let options = SyncOptions {
        mkdirs: cli.mkdirs(),
        use_mtime: cli.use_mtime(),
    };
    tracing::debug!(?options, files = cli.files.len(), "Starting sync");

    let engine = SyncEngine::new(config, options);
    Ok(engine.run(&cli.files)?)
}
