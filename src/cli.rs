// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::Variant;

/// Command-line arguments for `gr`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gr",
    version,
    about = "Run build workflow tasks in order with live progress.",
    long_about = None
)]
pub struct CliArgs {
    /// Tasks to run, in order: clean, build, check, install, dist, show-log.
    ///
    /// Identifiers are validated before anything runs; the sequence stops at
    /// the first failing task.
    #[arg(value_name = "TASK", required = true, num_args = 1..)]
    pub tasks: Vec<String>,

    /// Build variant: d|debug or r|release.
    #[arg(short = 'v', long, value_name = "VARIANT")]
    pub variant: Option<Variant>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Gr.toml` in the current working directory if present,
    /// built-in defaults otherwise.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Send task output to the terminal instead of the log file.
    #[arg(long)]
    pub inherit_output: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GR_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print every task's command, but don't execute any.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
