// src/engine/sequencer.rs

//! Runs the requested tasks in order, stopping at the first failure.

use tracing::{debug, info};

use crate::engine::{ExecutionResult, TaskRunner};
use crate::errors::{GrError, Result};
use crate::exec::ProcessExecutor;
use crate::task::{Operation, TaskFactory};
use crate::types::{Task, Variant};

/// What happened to a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceOutcome {
    /// One entry per attempted task, in order.
    pub results: Vec<ExecutionResult>,
    /// Tasks never started because an earlier one failed.
    pub skipped: Vec<Task>,
}

impl SequenceOutcome {
    /// True iff every attempted task succeeded.
    pub fn success(&self) -> bool {
        self.results.iter().all(ExecutionResult::success)
    }

    /// Process exit code for the run: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.success() { 0 } else { 1 }
    }

    pub fn first_failure(&self) -> Option<&ExecutionResult> {
        self.results.iter().find(|r| !r.success())
    }
}

/// Maps identifiers to operations, then hands them to a [`TaskRunner`] one
/// at a time.
#[derive(Debug)]
pub struct Sequencer<F: TaskFactory, E: ProcessExecutor> {
    factory: F,
    runner: TaskRunner<E>,
}

impl<F: TaskFactory, E: ProcessExecutor> Sequencer<F, E> {
    pub fn new(factory: F, runner: TaskRunner<E>) -> Self {
        Self { factory, runner }
    }

    /// Validate every identifier and resolve every operation.
    ///
    /// All identifiers are looked up before any operation is built, and all
    /// operations are built before any runs, so configuration errors never
    /// leave a partial transcript behind.
    pub fn plan(&self, ids: &[String], variant: Option<Variant>) -> Result<Vec<Operation>> {
        if ids.is_empty() {
            return Err(GrError::ConfigError("no tasks given".to_string()));
        }

        let tasks = ids
            .iter()
            .map(|id| id.parse::<Task>())
            .collect::<Result<Vec<_>>>()?;

        let operations = tasks
            .into_iter()
            .map(|task| self.factory.resolve(task, variant))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            tasks = ?operations.iter().map(|op| op.task().tag()).collect::<Vec<_>>(),
            "planned task sequence"
        );
        Ok(operations)
    }

    /// Plan, then run. Only configuration errors are returned as `Err`; task
    /// failures are part of the [`SequenceOutcome`].
    pub async fn run(&self, ids: &[String], variant: Option<Variant>) -> Result<SequenceOutcome> {
        let operations = self.plan(ids, variant)?;
        Ok(self.run_plan(operations).await)
    }

    /// Run already-resolved operations strictly in order.
    pub async fn run_plan(&self, operations: Vec<Operation>) -> SequenceOutcome {
        let mut outcome = SequenceOutcome::default();
        let mut remaining = operations.into_iter();

        for operation in remaining.by_ref() {
            let result = self.runner.run(operation).await;
            let failed = !result.success();
            outcome.results.push(result);
            if failed {
                break;
            }
        }

        outcome.skipped = remaining.map(|op| op.task()).collect();
        if !outcome.skipped.is_empty() {
            info!(skipped = ?outcome.skipped, "sequence halted after failure");
        }

        outcome
    }
}
