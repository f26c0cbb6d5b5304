// src/config/model.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::{OutputMode, Task, Variant};

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [config]
/// log_file = ".gr/build.log"
/// output = "log"
/// default_variant = "debug"
///
/// [artifact]
/// search_root = "app/build/outputs/apk"
/// pattern = "**/*-{variant}.apk"
///
/// [task.build]
/// cmd = "./gradlew assemble{Variant}"
/// ```
///
/// All sections are optional and have reasonable defaults. Keys under
/// `[task]` are still raw strings here; [`ConfigFile`] is the validated form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default)]
    pub artifact: ArtifactSection,

    /// Per-task overrides from `[task.<tag>]`.
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Log file that receives redirected task output.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Default output routing for tasks.
    #[serde(default)]
    pub output: OutputMode,

    /// Variant used when `-v` is not given on the command line.
    #[serde(default)]
    pub default_variant: Option<Variant>,
}

fn default_log_file() -> PathBuf {
    PathBuf::from(".gr/build.log")
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            output: OutputMode::default(),
            default_variant: None,
        }
    }
}

/// `[artifact]` section: where `install` looks for the built package.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactSection {
    #[serde(default = "default_search_root")]
    pub search_root: PathBuf,

    /// Glob relative to `search_root`; may contain `{variant}` / `{Variant}`.
    #[serde(default = "default_artifact_pattern")]
    pub pattern: String,
}

fn default_search_root() -> PathBuf {
    PathBuf::from("app/build/outputs/apk")
}

fn default_artifact_pattern() -> String {
    "**/*-{variant}.apk".to_string()
}

impl Default for ArtifactSection {
    fn default() -> Self {
        Self {
            search_root: default_search_root(),
            pattern: default_artifact_pattern(),
        }
    }
}

/// `[task.<tag>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskConfig {
    /// Replacement command template for this task.
    #[serde(default)]
    pub cmd: Option<String>,

    /// Output routing for this task only.
    #[serde(default)]
    pub output: Option<OutputMode>,
}

/// Validated configuration.
///
/// Construct via `ConfigFile::try_from(RawConfigFile)` (see `validate.rs`)
/// or [`ConfigFile::default`].
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    config: ConfigSection,
    artifact: ArtifactSection,
    task: BTreeMap<Task, TaskConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        artifact: ArtifactSection,
        task: BTreeMap<Task, TaskConfig>,
    ) -> Self {
        Self {
            config,
            artifact,
            task,
        }
    }

    pub fn config_section(&self) -> &ConfigSection {
        &self.config
    }

    pub fn artifact_section(&self) -> &ArtifactSection {
        &self.artifact
    }

    pub fn log_file(&self) -> &Path {
        &self.config.log_file
    }

    /// Per-task override, if the config has a `[task.<tag>]` table for it.
    pub fn task_config(&self, task: Task) -> Option<&TaskConfig> {
        self.task.get(&task)
    }
}
