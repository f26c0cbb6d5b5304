// src/exec/process.rs

//! Running one operation as a subprocess.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;
use std::sync::Arc;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{GrError, Result};
use crate::exec::log_sink::LogSink;
use crate::task::Operation;
use crate::types::OutputMode;

/// Exit code reported when the OS gives none (e.g. killed by a signal).
pub const UNKNOWN_EXIT_CODE: i32 = -1;

/// Trait abstracting how an operation is executed.
///
/// Production code uses [`RealProcessExecutor`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait ProcessExecutor: Send + Sync {
    /// Run the operation to completion and return its exit code.
    ///
    /// Errors are reserved for cases where no exit code exists: the deferred
    /// argument failed (the process never started) or spawning failed.
    fn execute(
        &self,
        operation: Operation,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>>;
}

/// Spawns real processes with `tokio::process::Command`.
#[derive(Clone)]
pub struct RealProcessExecutor {
    sink: Arc<dyn LogSink>,
}

impl RealProcessExecutor {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    fn build_command(&self, mut operation: Operation) -> Result<(String, Command)> {
        let task = operation.task();
        let deferred = operation.take_deferred_arg();

        let (program, args) = operation.program_and_args().ok_or_else(|| {
            GrError::ConfigError(format!("task '{task}' has an empty command"))
        })?;
        let program = program.to_string();

        let mut cmd = Command::new(&program);
        cmd.args(args);

        // Resolved last, right before the spawn; a failure here means the
        // process is never started.
        if let Some(deferred) = deferred {
            let arg = deferred.resolve()?;
            debug!(task = %task, %arg, "deferred argument resolved");
            cmd.arg(arg);
        }

        match operation.output() {
            OutputMode::Inherit => {
                cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
            }
            OutputMode::Log => {
                self.sink
                    .append(&format!("==> {task}: {}", operation.command()))?;
                let stdout = self.sink.redirect_target()?;
                let stderr = stdout.try_clone()?;
                cmd.stdout(Stdio::from(stdout)).stderr(Stdio::from(stderr));
            }
        }

        cmd.stdin(Stdio::null()).kill_on_drop(true);
        Ok((program, cmd))
    }
}

impl ProcessExecutor for RealProcessExecutor {
    fn execute(
        &self,
        operation: Operation,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>> {
        Box::pin(async move {
            let task = operation.task();
            info!(
                task = %task,
                cmd = %operation.command(),
                output = %operation.output(),
                "starting task process"
            );

            let (program, mut cmd) = self.build_command(operation)?;

            let mut child = cmd
                .spawn()
                .map_err(|source| GrError::Spawn { program, source })?;

            // If waiting fails, dropping `child` kills it (kill_on_drop).
            let status = child.wait().await?;
            let code = status.code().unwrap_or(UNKNOWN_EXIT_CODE);

            info!(
                task = %task,
                exit_code = code,
                success = status.success(),
                "task process exited"
            );

            Ok(code)
        })
    }
}
