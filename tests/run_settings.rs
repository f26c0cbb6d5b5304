// tests/run_settings.rs

use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use tempfile::NamedTempFile;

use gr::cli::CliArgs;
use gr::config::ConfigFile;
use gr::errors::GrError;
use gr::fs::mock::MockFileSystem;
use gr::task::{ConfiguredTaskFactory, TaskFactory};
use gr::types::{OutputMode, Task, Variant};
use gr::{RunSettings, render_dry_run, run};
use gr_test_utils::builders::ConfigFileBuilder;

fn args(argv: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(std::iter::once("gr").chain(argv.iter().copied())).unwrap()
}

fn factory_for(cfg: ConfigFile, settings: RunSettings) -> ConfiguredTaskFactory {
    ConfiguredTaskFactory::new(cfg, Arc::new(MockFileSystem::new()))
        .with_output_override(settings.output_override)
}

#[test]
fn default_variant_applies_without_flag() {
    let cfg = ConfigFileBuilder::new()
        .with_default_variant(Variant::Release)
        .build();
    let settings = RunSettings::from_args(&args(&["build"]), &cfg);
    assert_eq!(settings.variant, Some(Variant::Release));

    let op = factory_for(cfg, settings)
        .resolve(Task::Build, settings.variant)
        .unwrap();
    assert_eq!(op.command(), "./gradlew assembleRelease");
}

#[test]
fn variant_flag_beats_default_variant() {
    let cfg = ConfigFileBuilder::new()
        .with_default_variant(Variant::Release)
        .build();
    let settings = RunSettings::from_args(&args(&["-v", "d", "build"]), &cfg);
    assert_eq!(settings.variant, Some(Variant::Debug));
}

#[test]
fn no_flag_and_no_default_leaves_variant_unset() {
    let settings = RunSettings::from_args(&args(&["clean"]), &ConfigFile::default());
    assert_eq!(settings.variant, None);
    assert_eq!(settings.output_override, None);
}

#[test]
fn inherit_output_flag_overrides_configured_output() {
    let cfg = ConfigFileBuilder::new().with_output(OutputMode::Log).build();
    let settings = RunSettings::from_args(&args(&["--inherit-output", "clean"]), &cfg);
    assert_eq!(settings.output_override, Some(OutputMode::Inherit));

    let op = factory_for(cfg, settings).resolve(Task::Clean, None).unwrap();
    assert_eq!(op.output(), OutputMode::Inherit);
}

#[test]
fn dry_run_listing_shows_each_operation() {
    let fs = Arc::new(MockFileSystem::new());
    let factory = ConfiguredTaskFactory::new(ConfigFile::default(), fs);
    let ops = vec![
        factory.resolve(Task::Clean, Some(Variant::Debug)).unwrap(),
        factory.resolve(Task::Install, Some(Variant::Debug)).unwrap(),
    ];

    let listing = render_dry_run(Some(Variant::Debug), &ops);

    assert!(listing.starts_with("gr dry-run\n  variant = debug\n"), "{listing}");
    assert!(listing.contains("tasks (2):"), "{listing}");
    assert!(listing.contains("  - clean\n      cmd: ./gradlew clean\n      output: log\n"));
    assert!(listing.contains("  - install\n      cmd: adb install -r\n      + <artifact"));
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[tokio::test]
async fn dry_run_uses_default_variant_from_config_file() {
    let file = config_file(
        r#"
[config]
default_variant = "debug"
"#,
    );
    let path = file.path().to_str().unwrap();

    let outcome = run(args(&["--config", path, "--dry-run", "build", "install"]))
        .await
        .unwrap();

    assert!(outcome.results.is_empty());
    assert!(outcome.success());
}

#[tokio::test]
async fn dry_run_without_any_variant_reports_missing_variant() {
    let file = config_file("");
    let path = file.path().to_str().unwrap();

    match run(args(&["--config", path, "--dry-run", "clean", "build"])).await {
        Err(GrError::MissingVariant(tag)) => assert_eq!(tag, "build"),
        other => panic!("expected MissingVariant, got {other:?}"),
    }
}
