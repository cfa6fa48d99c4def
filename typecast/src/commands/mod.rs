mod cast;
mod check;
mod completions;
mod tables;

use std::path::{Path, PathBuf};

use cast::CastCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use tables::TablesCommand;
use typecast_core::TargetFormat;

use crate::config::Config;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crate::config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Use CLI flags where provided, otherwise fall back to typecast.toml.
///
/// The config file is only touched when at least one flag is missing, so a
/// fully-flagged invocation works without one.
pub(crate) fn resolve_conversion(
    config_path: &Path,
    db: Option<PathBuf>,
    out: Option<PathBuf>,
    target: Option<TargetFormat>,
) -> (PathBuf, PathBuf, TargetFormat) {
    match (db, out, target) {
        (Some(db), Some(out), Some(target)) => (db, out, target),
        (db, out, target) => {
            let conversion = Config::open(config_path).unwrap_or_exit().conversion;
            (
                db.unwrap_or(conversion.database),
                out.unwrap_or(conversion.output),
                target.unwrap_or(conversion.target),
            )
        }
    }
}

#[derive(Parser)]
#[command(name = "typecast")]
#[command(version)]
#[command(about = "Generate TypeScript and Rust type definitions from a SQLite schema")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Cast(cmd) => cmd.run(),
            Commands::Tables(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one definition file per table
    Cast(CastCommand),

    /// List tables and columns in the database
    Tables(TablesCommand),

    /// Validate config, paths, and schema without writing files
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
