// src/engine/mod.rs

//! Orchestration engine for gr.
//!
//! - [`task_runner`] runs one operation: live display on, process, live
//!   display off, final line.
//! - [`sequencer`] validates the requested task list up front, then runs
//!   tasks strictly one after another and stops at the first failure.

use std::fmt;

use crate::exec::UNKNOWN_EXIT_CODE;
use crate::types::Task;

pub mod sequencer;
pub mod task_runner;

pub use sequencer::{SequenceOutcome, Sequencer};
pub use task_runner::TaskRunner;

/// How a task's process ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Success,
    /// The process ran and exited non-zero.
    Failed(i32),
    /// The process never produced an exit code: argument resolution or
    /// spawning failed.
    Errored(String),
}

impl fmt::Display for TaskOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskOutcome::Success => f.write_str("succeeded"),
            TaskOutcome::Failed(code) => write!(f, "exited with code {code}"),
            TaskOutcome::Errored(msg) => f.write_str(msg),
        }
    }
}

/// Result of running one task, as reported to the sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub task: Task,
    pub outcome: TaskOutcome,
    pub elapsed_secs: u64,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.outcome == TaskOutcome::Success
    }

    pub fn exit_code(&self) -> i32 {
        match self.outcome {
            TaskOutcome::Success => 0,
            TaskOutcome::Failed(code) => code,
            TaskOutcome::Errored(_) => UNKNOWN_EXIT_CODE,
        }
    }
}
