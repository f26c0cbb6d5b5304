// tests/process_executor.rs

#![cfg(unix)]

mod common;
use crate::common::{init_tracing, with_timeout};

use std::fs;
use std::sync::Arc;

use gr::errors::GrError;
use gr::exec::{FileLogSink, ProcessExecutor, RealProcessExecutor};
use gr::fs::RealFileSystem;
use gr::task::{ConfiguredTaskFactory, DeferredArg, Operation, TaskFactory};
use gr::types::{OutputMode, Task};
use gr_test_utils::builders::ConfigFileBuilder;

fn executor_logging_to(path: &std::path::Path) -> RealProcessExecutor {
    RealProcessExecutor::new(Arc::new(FileLogSink::new(path)))
}

#[tokio::test]
async fn exit_codes_are_reported() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let executor = executor_logging_to(&dir.path().join("build.log"));

    let ok = with_timeout(executor.execute(Operation::new(Task::Check, "true", OutputMode::Log)))
        .await
        .unwrap();
    assert_eq!(ok, 0);

    let failed =
        with_timeout(executor.execute(Operation::new(Task::Check, "false", OutputMode::Log)))
            .await
            .unwrap();
    assert_eq!(failed, 1);
}

#[tokio::test]
async fn output_is_appended_to_the_log_after_a_marker() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("nested").join("build.log");
    let executor = executor_logging_to(&log);

    let code = with_timeout(executor.execute(Operation::new(
        Task::Build,
        "echo hello-from-gr",
        OutputMode::Log,
    )))
    .await
    .unwrap();
    assert_eq!(code, 0);

    with_timeout(executor.execute(Operation::new(Task::Clean, "echo second", OutputMode::Log)))
        .await
        .unwrap();

    let contents = fs::read_to_string(&log).unwrap();
    assert_eq!(
        contents,
        "==> build: echo hello-from-gr\nhello-from-gr\n==> clean: echo second\nsecond\n"
    );
}

#[tokio::test]
async fn missing_program_is_a_spawn_error() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let executor = executor_logging_to(&dir.path().join("build.log"));

    let err = executor
        .execute(Operation::new(
            Task::Dist,
            "gr-definitely-not-a-real-program --flag",
            OutputMode::Inherit,
        ))
        .await
        .unwrap_err();

    match err {
        GrError::Spawn { program, .. } => assert_eq!(program, "gr-definitely-not-a-real-program"),
        other => panic!("expected Spawn error, got {other:?}"),
    }
}

#[tokio::test]
async fn failing_deferred_argument_prevents_the_spawn() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("marker");
    let executor = executor_logging_to(&dir.path().join("build.log"));

    let operation = Operation::new(
        Task::Install,
        &format!("touch {}", marker.display()),
        OutputMode::Inherit,
    )
    .with_deferred_arg(DeferredArg::new("<artifact>", || {
        Err(GrError::ArgumentResolution("no artifact found".to_string()))
    }));

    let err = executor.execute(operation).await.unwrap_err();

    assert!(matches!(err, GrError::ArgumentResolution(_)), "{err:?}");
    assert!(!marker.exists(), "process must not have run");
}

#[tokio::test]
async fn resolved_deferred_argument_is_appended() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("installed");
    let executor = executor_logging_to(&dir.path().join("build.log"));

    let arg = target.display().to_string();
    let operation = Operation::new(Task::Install, "touch", OutputMode::Log)
        .with_deferred_arg(DeferredArg::new("<artifact>", move || Ok(arg)));

    let code = with_timeout(executor.execute(operation)).await.unwrap();

    assert_eq!(code, 0);
    assert!(target.exists());
}

#[tokio::test]
async fn show_log_reads_a_log_under_a_directory_with_spaces() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("build logs").join("gr.log");
    let sink = FileLogSink::new(&log);
    let executor = RealProcessExecutor::new(Arc::new(sink));

    with_timeout(executor.execute(Operation::new(Task::Clean, "true", OutputMode::Log)))
        .await
        .unwrap();
    assert!(log.is_file());

    let cfg = ConfigFileBuilder::new().with_log_file(&log).build();
    let factory = ConfiguredTaskFactory::new(cfg, Arc::new(RealFileSystem));
    let show_log = factory.resolve(Task::ShowLog, None).unwrap();

    let code = with_timeout(executor.execute(show_log)).await.unwrap();
    assert_eq!(code, 0);
}
