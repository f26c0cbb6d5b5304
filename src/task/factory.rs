// src/task/factory.rs

//! Mapping from `(Task, Variant)` to a concrete [`Operation`].

use std::sync::Arc;

use tracing::debug;

use crate::config::ConfigFile;
use crate::errors::{GrError, Result};
use crate::fs::FileSystem;
use crate::task::artifact::ArtifactLocator;
use crate::task::template::{expand_command, expand_variant, mentions_variant};
use crate::task::{DeferredArg, Operation};
use crate::types::{OutputMode, Task, Variant};

/// Builds the operation for a task.
///
/// Production code uses [`ConfiguredTaskFactory`]; tests can provide their
/// own implementation with canned commands.
pub trait TaskFactory: Send + Sync {
    fn resolve(&self, task: Task, variant: Option<Variant>) -> Result<Operation>;

    /// Parse a user-supplied identifier, then [`TaskFactory::resolve`] it.
    fn resolve_id(&self, id: &str, variant: Option<Variant>) -> Result<Operation> {
        let task: Task = id.parse()?;
        self.resolve(task, variant)
    }
}

/// Built-in command template for each task.
pub fn default_command(task: Task) -> &'static str {
    match task {
        Task::Clean => "./gradlew clean",
        Task::Build => "./gradlew assemble{Variant}",
        Task::Check => "./gradlew ktlint detekt",
        Task::Install => "adb install -r",
        Task::Dist => "./gradlew appDistributionUpload{Variant}",
        Task::ShowLog => {
            if cfg!(windows) {
                "cmd /C type {log}"
            } else {
                "cat {log}"
            }
        }
    }
}

/// Task factory driven by the loaded [`ConfigFile`].
#[derive(Debug, Clone)]
pub struct ConfiguredTaskFactory {
    config: ConfigFile,
    fs: Arc<dyn FileSystem>,
    output_override: Option<OutputMode>,
}

impl ConfiguredTaskFactory {
    pub fn new(config: ConfigFile, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            config,
            fs,
            output_override: None,
        }
    }

    /// Force every task (except `show-log`) to use `mode`.
    pub fn with_output_override(mut self, mode: Option<OutputMode>) -> Self {
        self.output_override = mode;
        self
    }

    fn template_for(&self, task: Task) -> &str {
        self.config
            .task_config(task)
            .and_then(|t| t.cmd.as_deref())
            .unwrap_or_else(|| default_command(task))
    }

    fn output_for(&self, task: Task) -> OutputMode {
        if task == Task::ShowLog {
            // The log is what's being shown; it can't also be the sink.
            return OutputMode::Inherit;
        }
        self.output_override
            .or_else(|| self.config.task_config(task).and_then(|t| t.output))
            .unwrap_or(self.config.config_section().output)
    }

    fn needs_variant(&self, task: Task) -> bool {
        mentions_variant(self.template_for(task))
            || (task == Task::Install && mentions_variant(&self.config.artifact_section().pattern))
    }

    fn artifact_arg(&self, variant: Option<Variant>) -> DeferredArg {
        let section = self.config.artifact_section();
        let locator = ArtifactLocator::new(
            Arc::clone(&self.fs),
            section.search_root.clone(),
            expand_variant(&section.pattern, variant),
        );
        let description = format!(
            "<artifact matching '{}' under {}>",
            locator.pattern(),
            locator.root().display()
        );

        DeferredArg::new(description, move || {
            locator.locate().map(|path| path.display().to_string())
        })
    }
}

impl TaskFactory for ConfiguredTaskFactory {
    fn resolve(&self, task: Task, variant: Option<Variant>) -> Result<Operation> {
        if self.needs_variant(task) && variant.is_none() {
            return Err(GrError::MissingVariant(task.tag().to_string()));
        }

        let argv = expand_command(self.template_for(task), variant, self.config.log_file());
        let output = self.output_for(task);
        let operation = Operation::from_argv(task, argv, output);
        debug!(task = %task, cmd = %operation.command(), %output, "resolved operation");

        let operation = match task {
            Task::Install => operation.with_deferred_arg(self.artifact_arg(variant)),
            Task::Clean | Task::Build | Task::Check | Task::Dist | Task::ShowLog => operation,
        };
        Ok(operation)
    }
}
