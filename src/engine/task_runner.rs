// src/engine/task_runner.rs

//! Runs a single operation with live progress.

use tracing::{error, info};

use crate::engine::{ExecutionResult, TaskOutcome};
use crate::exec::ProcessExecutor;
use crate::report::Reporter;
use crate::task::Operation;

/// Drives one task at a time:
///
/// 1. start the live display
/// 2. run the process (the only step that blocks this path)
/// 3. stop the live display and wait for both loops to return
/// 4. print the final line
///
/// Every failure is turned into a printed failure line and a failed
/// [`ExecutionResult`]; nothing escapes as an error.
#[derive(Debug)]
pub struct TaskRunner<E: ProcessExecutor> {
    executor: E,
    reporter: Reporter,
}

impl<E: ProcessExecutor> TaskRunner<E> {
    pub fn new(executor: E, reporter: Reporter) -> Self {
        Self { executor, reporter }
    }

    pub async fn run(&self, operation: Operation) -> ExecutionResult {
        let task = operation.task();
        let label = task.tag();

        let live = self.reporter.start_live_display(label);

        let outcome = match self.executor.execute(operation).await {
            Ok(0) => TaskOutcome::Success,
            Ok(code) => TaskOutcome::Failed(code),
            Err(err) => TaskOutcome::Errored(err.to_string()),
        };

        // The final line must not race a redraw: wait for both loops first.
        let elapsed_secs = self.reporter.stop_live_display(live).await;

        let result = ExecutionResult {
            task,
            outcome,
            elapsed_secs,
        };
        self.reporter
            .print_final_result(label, result.success(), elapsed_secs);

        match &result.outcome {
            TaskOutcome::Success => info!(task = %task, elapsed_secs, "task succeeded"),
            TaskOutcome::Failed(code) => {
                error!(task = %task, exit_code = *code, elapsed_secs, "task failed")
            }
            TaskOutcome::Errored(msg) => {
                error!(task = %task, error = %msg, elapsed_secs, "task could not run")
            }
        }

        result
    }
}
