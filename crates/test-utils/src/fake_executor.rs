use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use gr::errors::Result;
use gr::exec::ProcessExecutor;
use gr::task::Operation;
use gr::types::Task;

/// How a scripted task behaves: how long its "process" runs and what it
/// exits with.
#[derive(Debug, Clone, Copy)]
pub struct Script {
    pub exit_code: i32,
    pub duration: Duration,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            exit_code: 0,
            duration: Duration::ZERO,
        }
    }
}

/// A fake executor that:
/// - records which tasks were handed to it (`attempted`)
/// - resolves the deferred argument like the real executor would, and
///   records the task as `spawned` only if that succeeds
/// - sleeps for the scripted duration (use paused Tokio time) and returns the
///   scripted exit code.
#[derive(Debug, Clone, Default)]
pub struct ScriptedExecutor {
    scripts: HashMap<Task, Script>,
    attempted: Arc<Mutex<Vec<Task>>>,
    spawned: Arc<Mutex<Vec<(Task, Option<String>)>>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, task: Task, exit_code: i32, duration: Duration) -> Self {
        self.scripts.insert(task, Script { exit_code, duration });
        self
    }

    /// Tasks `execute` was called for, in order.
    pub fn attempted(&self) -> Vec<Task> {
        self.attempted.lock().unwrap().clone()
    }

    /// Tasks whose "process" started, with the resolved deferred argument.
    pub fn spawned(&self) -> Vec<(Task, Option<String>)> {
        self.spawned.lock().unwrap().clone()
    }
}

impl ProcessExecutor for ScriptedExecutor {
    fn execute(
        &self,
        mut operation: Operation,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>> {
        let task = operation.task();
        let script = self.scripts.get(&task).copied().unwrap_or_default();
        let attempted = Arc::clone(&self.attempted);
        let spawned = Arc::clone(&self.spawned);

        Box::pin(async move {
            attempted.lock().unwrap().push(task);

            let arg = match operation.take_deferred_arg() {
                Some(deferred) => Some(deferred.resolve()?),
                None => None,
            };
            spawned.lock().unwrap().push((task, arg));

            if !script.duration.is_zero() {
                tokio::time::sleep(script.duration).await;
            }
            Ok(script.exit_code)
        })
    }
}
