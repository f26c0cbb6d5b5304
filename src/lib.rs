// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod report;
pub mod task;
pub mod types;

use std::sync::Arc;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, load_effective};
use crate::engine::{SequenceOutcome, Sequencer, TaskRunner};
use crate::errors::Result;
use crate::exec::{FileLogSink, RealProcessExecutor};
use crate::fs::RealFileSystem;
use crate::report::{Reporter, StdoutTerminal};
use crate::task::{ConfiguredTaskFactory, Operation};
use crate::types::{OutputMode, Variant};

/// Per-run choices taken from the CLI, with config fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    /// `-v`, else `[config].default_variant`.
    pub variant: Option<Variant>,
    /// `Some(Inherit)` when `--inherit-output` was given.
    pub output_override: Option<OutputMode>,
}

impl RunSettings {
    pub fn from_args(args: &CliArgs, cfg: &ConfigFile) -> Self {
        Self {
            variant: args.variant.or(cfg.config_section().default_variant),
            output_override: args.inherit_output.then_some(OutputMode::Inherit),
        }
    }
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the task factory (commands, artifact lookup)
/// - the process executor and its log sink
/// - the reporter on stdout
/// - the sequencer
pub async fn run(args: CliArgs) -> Result<SequenceOutcome> {
    let cfg = load_effective(args.config.as_deref())?;
    let settings = RunSettings::from_args(&args, &cfg);
    let log_file = cfg.log_file().to_path_buf();
    info!(variant = ?settings.variant, tasks = ?args.tasks, "starting run");

    let factory = ConfiguredTaskFactory::new(cfg, Arc::new(RealFileSystem))
        .with_output_override(settings.output_override);

    let executor = RealProcessExecutor::new(Arc::new(FileLogSink::new(log_file)));
    let reporter = Reporter::new(Arc::new(StdoutTerminal));
    let sequencer = Sequencer::new(factory, TaskRunner::new(executor, reporter));

    if args.dry_run {
        let operations = sequencer.plan(&args.tasks, settings.variant)?;
        print!("{}", render_dry_run(settings.variant, &operations));
        debug!("dry-run complete (no execution)");
        return Ok(SequenceOutcome::default());
    }

    sequencer.run(&args.tasks, settings.variant).await
}

/// Dry-run listing: one block per resolved operation.
pub fn render_dry_run(variant: Option<Variant>, operations: &[Operation]) -> String {
    let mut out = String::from("gr dry-run\n");
    match variant {
        Some(v) => out.push_str(&format!("  variant = {v}\n")),
        None => out.push_str("  variant = (none)\n"),
    }
    out.push('\n');

    out.push_str(&format!("tasks ({}):\n", operations.len()));
    for op in operations {
        out.push_str(&format!("  - {}\n", op.task()));
        out.push_str(&format!("      cmd: {}\n", op.command()));
        if let Some(deferred) = op.deferred_arg() {
            out.push_str(&format!("      + {}\n", deferred.description()));
        }
        out.push_str(&format!("      output: {}\n", op.output()));
    }
    out
}
