// src/task/mod.rs

//! Tasks resolved into runnable operations.
//!
//! - [`Operation`] pairs a [`Task`] with the command to run and an optional
//!   [`DeferredArg`] that is only evaluated when the process is about to
//!   start.
//! - [`factory`] maps `(Task, Variant)` to an `Operation`.
//! - [`artifact`] locates build outputs for the `install` task.
//! - [`template`] expands `{variant}` / `{Variant}` / `{log}` placeholders.

pub mod artifact;
pub mod factory;
pub mod template;

use std::fmt;

use crate::errors::{GrError, Result};
use crate::types::{OutputMode, Task};

pub use artifact::ArtifactLocator;
pub use factory::{ConfiguredTaskFactory, TaskFactory};

type Producer = Box<dyn FnOnce() -> Result<String> + Send>;

/// An argument computed lazily, right before the process is spawned.
///
/// The producer runs at most once; consuming `self` in [`DeferredArg::resolve`]
/// enforces that.
pub struct DeferredArg {
    description: String,
    producer: Producer,
}

impl DeferredArg {
    pub fn new<F>(description: impl Into<String>, producer: F) -> Self
    where
        F: FnOnce() -> Result<String> + Send + 'static,
    {
        Self {
            description: description.into(),
            producer: Box::new(producer),
        }
    }

    /// Human-readable description used in dry-run output.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the producer. Every failure comes back as
    /// [`GrError::ArgumentResolution`].
    pub fn resolve(self) -> Result<String> {
        (self.producer)().map_err(|err| match err {
            GrError::ArgumentResolution(_) => err,
            other => GrError::ArgumentResolution(other.to_string()),
        })
    }
}

impl fmt::Debug for DeferredArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredArg")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// A task ready to execute.
///
/// The command is kept as an argument vector; [`Operation::command`] is the
/// space-joined form used for display and log markers.
#[derive(Debug)]
pub struct Operation {
    task: Task,
    argv: Vec<String>,
    command: String,
    deferred: Option<DeferredArg>,
    output: OutputMode,
}

impl Operation {
    /// Build from a command line, split on whitespace.
    pub fn new(task: Task, command: impl Into<String>, output: OutputMode) -> Self {
        let command = command.into();
        let argv = command.split_whitespace().map(str::to_string).collect();
        Self::from_argv(task, argv, output)
    }

    /// Build from already separated arguments. Tokens may contain spaces.
    pub fn from_argv(task: Task, argv: Vec<String>, output: OutputMode) -> Self {
        Self {
            task,
            command: argv.join(" "),
            argv,
            deferred: None,
            output,
        }
    }

    /// Attach an argument that is appended after the command's own tokens.
    pub fn with_deferred_arg(mut self, deferred: DeferredArg) -> Self {
        self.deferred = Some(deferred);
        self
    }

    pub fn task(&self) -> Task {
        self.task
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn deferred_arg(&self) -> Option<&DeferredArg> {
        self.deferred.as_ref()
    }

    pub fn output(&self) -> OutputMode {
        self.output
    }

    /// Program and fixed arguments; `None` for an empty command.
    pub fn program_and_args(&self) -> Option<(&str, Vec<&str>)> {
        let (program, args) = self.argv.split_first()?;
        Some((program.as_str(), args.iter().map(String::as_str).collect()))
    }

    /// Take the deferred argument out, leaving the rest intact.
    pub fn take_deferred_arg(&mut self) -> Option<DeferredArg> {
        self.deferred.take()
    }
}
