// tests/task_runner.rs

mod common;
use crate::common::init_tracing;

use std::sync::Arc;
use std::time::Duration;

use gr::engine::{TaskOutcome, TaskRunner};
use gr::errors::GrError;
use gr::report::Reporter;
use gr::task::{DeferredArg, Operation};
use gr::types::{OutputMode, Task};
use gr_test_utils::fake_executor::ScriptedExecutor;
use gr_test_utils::recording_terminal::RecordingTerminal;

fn runner(
    executor: &ScriptedExecutor,
    terminal: &RecordingTerminal,
) -> TaskRunner<ScriptedExecutor> {
    TaskRunner::new(executor.clone(), Reporter::new(Arc::new(terminal.clone())))
}

#[tokio::test(start_paused = true)]
async fn three_second_check_reports_success_and_duration() {
    init_tracing();
    let executor = ScriptedExecutor::new().with(Task::Check, 0, Duration::from_millis(3500));
    let terminal = RecordingTerminal::new();

    let result = runner(&executor, &terminal)
        .run(Operation::new(Task::Check, "./gradlew ktlint detekt", OutputMode::Log))
        .await;

    assert!(result.success());
    assert_eq!(result.exit_code(), 0);
    assert_eq!(result.elapsed_secs, 3);
    assert_eq!(terminal.final_lines(), vec!["[ ✔ ] check    00:03"]);
    assert!(!terminal.frames().is_empty());
}

#[tokio::test(start_paused = true)]
async fn non_zero_exit_prints_failure_line() {
    init_tracing();
    let executor = ScriptedExecutor::new().with(Task::Build, 1, Duration::from_millis(1200));
    let terminal = RecordingTerminal::new();

    let result = runner(&executor, &terminal)
        .run(Operation::new(Task::Build, "./gradlew assembleDebug", OutputMode::Log))
        .await;

    assert!(!result.success());
    assert_eq!(result.outcome, TaskOutcome::Failed(1));
    assert_eq!(result.exit_code(), 1);
    assert_eq!(terminal.final_lines(), vec!["[ ✘ ] build    00:01"]);
}

#[tokio::test(start_paused = true)]
async fn failed_argument_resolution_is_a_reported_failure() {
    init_tracing();
    let executor = ScriptedExecutor::new();
    let terminal = RecordingTerminal::new();

    let operation = Operation::new(Task::Install, "adb install -r", OutputMode::Log)
        .with_deferred_arg(DeferredArg::new("<artifact>", || {
            Err(GrError::ArgumentResolution("no artifact found".to_string()))
        }));

    let result = runner(&executor, &terminal).run(operation).await;

    match &result.outcome {
        TaskOutcome::Errored(msg) => assert!(msg.contains("no artifact found"), "{msg}"),
        other => panic!("expected Errored outcome, got {other:?}"),
    }
    assert_eq!(executor.attempted(), vec![Task::Install]);
    assert!(executor.spawned().is_empty(), "process must never start");
    assert_eq!(terminal.final_lines(), vec!["[ ✘ ] install  00:00"]);
}

#[tokio::test(start_paused = true)]
async fn resolved_argument_reaches_the_executor() {
    init_tracing();
    let executor = ScriptedExecutor::new();
    let terminal = RecordingTerminal::new();

    let operation = Operation::new(Task::Install, "adb install -r", OutputMode::Log)
        .with_deferred_arg(DeferredArg::new("<artifact>", || Ok("app-debug.apk".to_string())));

    let result = runner(&executor, &terminal).run(operation).await;

    assert!(result.success());
    assert_eq!(
        executor.spawned(),
        vec![(Task::Install, Some("app-debug.apk".to_string()))]
    );
}

#[tokio::test(start_paused = true)]
async fn no_frames_follow_the_final_line() {
    init_tracing();
    let executor = ScriptedExecutor::new().with(Task::Dist, 0, Duration::from_millis(900));
    let terminal = RecordingTerminal::new();

    runner(&executor, &terminal)
        .run(Operation::new(Task::Dist, "./gradlew appDistributionUploadRelease", OutputMode::Log))
        .await;
    let writes_after_run = terminal.write_count();

    tokio::time::sleep(Duration::from_secs(3)).await;

    let writes = terminal.writes();
    assert_eq!(writes.len(), writes_after_run);
    assert!(writes.last().is_some_and(|w| w.ends_with('\n')));
    assert_eq!(terminal.final_lines().len(), 1);
}
