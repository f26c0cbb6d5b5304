#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use gr::config::{ArtifactSection, ConfigFile, ConfigSection, RawConfigFile, TaskConfig};
use gr::types::{OutputMode, Variant};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                artifact: ArtifactSection::default(),
                task: BTreeMap::new(),
            },
        }
    }

    pub fn with_task(mut self, name: &str, task: TaskConfig) -> Self {
        self.config.task.insert(name.to_string(), task);
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.config.log_file = path.into();
        self
    }

    pub fn with_output(mut self, mode: OutputMode) -> Self {
        self.config.config.output = mode;
        self
    }

    pub fn with_default_variant(mut self, variant: Variant) -> Self {
        self.config.config.default_variant = Some(variant);
        self
    }

    pub fn with_artifact(mut self, search_root: impl Into<PathBuf>, pattern: &str) -> Self {
        self.config.artifact = ArtifactSection {
            search_root: search_root.into(),
            pattern: pattern.to_string(),
        };
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskConfig`.
pub struct TaskConfigBuilder {
    task: TaskConfig,
}

impl TaskConfigBuilder {
    pub fn new() -> Self {
        Self {
            task: TaskConfig::default(),
        }
    }

    pub fn cmd(mut self, cmd: &str) -> Self {
        self.task.cmd = Some(cmd.to_string());
        self
    }

    pub fn output(mut self, mode: OutputMode) -> Self {
        self.task.output = Some(mode);
        self
    }

    pub fn build(self) -> TaskConfig {
        self.task
    }
}

impl Default for TaskConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
