// tests/config_loading.rs

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use gr::config::{load_and_validate, load_effective};
use gr::errors::GrError;
use gr::types::{OutputMode, Task, Variant};

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn full_config_is_loaded() {
    let file = config_file(
        r#"
[config]
log_file = "logs/gr.log"
output = "inherit"
default_variant = "release"

[artifact]
search_root = "out"
pattern = "**/*-{Variant}.aab"

[task.build]
cmd = "./gradlew bundle{Variant}"
output = "log"

[task.check]
cmd = "./gradlew lint"
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.log_file(), Path::new("logs/gr.log"));
    assert_eq!(cfg.config_section().output, OutputMode::Inherit);
    assert_eq!(cfg.config_section().default_variant, Some(Variant::Release));
    assert_eq!(cfg.artifact_section().search_root, Path::new("out"));
    assert_eq!(cfg.artifact_section().pattern, "**/*-{Variant}.aab");

    let build = cfg.task_config(Task::Build).unwrap();
    assert_eq!(build.cmd.as_deref(), Some("./gradlew bundle{Variant}"));
    assert_eq!(build.output, Some(OutputMode::Log));
    assert_eq!(
        cfg.task_config(Task::Check).and_then(|t| t.cmd.as_deref()),
        Some("./gradlew lint")
    );
    assert!(cfg.task_config(Task::Clean).is_none());
}

#[test]
fn empty_config_uses_defaults() {
    let file = config_file("");
    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.log_file(), Path::new(".gr/build.log"));
    assert_eq!(cfg.config_section().output, OutputMode::Log);
    assert_eq!(cfg.config_section().default_variant, None);
    assert_eq!(cfg.artifact_section().pattern, "**/*-{variant}.apk");
}

#[test]
fn show_log_table_uses_the_dashed_tag() {
    let file = config_file(
        r#"
[task.show-log]
cmd = "less {log}"
"#,
    );
    let cfg = load_and_validate(file.path()).unwrap();
    assert!(cfg.task_config(Task::ShowLog).is_some());
}

#[test]
fn unknown_task_table_is_a_config_error() {
    let file = config_file(
        r#"
[task.deploy]
cmd = "scp app.apk host:"
"#,
    );

    match load_and_validate(file.path()) {
        Err(GrError::ConfigError(msg)) => {
            assert!(msg.contains("deploy"), "{msg}");
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_command_is_a_config_error() {
    let file = config_file(
        r#"
[task.clean]
cmd = "   "
"#,
    );

    match load_and_validate(file.path()) {
        Err(GrError::ConfigError(msg)) => assert!(msg.contains("cmd"), "{msg}"),
        other => panic!("Expected ConfigError, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn invalid_artifact_glob_is_a_config_error() {
    let file = config_file(
        r#"
[artifact]
pattern = "**/[*.apk"
"#,
    );

    match load_and_validate(file.path()) {
        Err(GrError::ConfigError(msg)) => assert!(msg.contains("not a valid glob"), "{msg}"),
        other => panic!("Expected ConfigError, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn unknown_output_mode_is_rejected_while_parsing() {
    let file = config_file(
        r#"
[config]
output = "file"
"#,
    );

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, GrError::TomlError(_)), "{err:?}");
    assert!(err.is_configuration());
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = load_effective(Some(&missing)).unwrap_err();
    assert!(matches!(err, GrError::IoError(_)), "{err:?}");
}

#[test]
fn explicit_config_path_is_used() {
    let file = config_file(
        r#"
[config]
default_variant = "debug"
"#,
    );

    let cfg = load_effective(Some(file.path())).unwrap();
    assert_eq!(cfg.config_section().default_variant, Some(Variant::Debug));
}
