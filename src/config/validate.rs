// src/config/validate.rs

use std::collections::BTreeMap;

use globset::Glob;

use crate::config::model::{ArtifactSection, ConfigFile, ConfigSection, RawConfigFile, TaskConfig};
use crate::errors::{GrError, Result};
use crate::task::template::expand_variant;
use crate::types::{Task, Variant};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::GrError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_global_config(&raw.config)?;
        validate_artifact(&raw.artifact)?;
        let tasks = validate_tasks(raw.task)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.artifact, tasks))
    }
}

fn validate_global_config(section: &ConfigSection) -> Result<()> {
    if section.log_file.as_os_str().is_empty() {
        return Err(GrError::ConfigError(
            "[config].log_file must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_artifact(section: &ArtifactSection) -> Result<()> {
    if section.pattern.trim().is_empty() {
        return Err(GrError::ConfigError(
            "[artifact].pattern must not be empty".to_string(),
        ));
    }

    // Placeholders are filled in at run time; check the pattern compiles for
    // both variants so a typo is caught before any task starts.
    for variant in [Variant::Debug, Variant::Release] {
        let expanded = expand_variant(&section.pattern, Some(variant));
        Glob::new(&expanded).map_err(|e| {
            GrError::ConfigError(format!(
                "[artifact].pattern '{}' is not a valid glob: {e}",
                section.pattern
            ))
        })?;
    }
    Ok(())
}

fn validate_tasks(raw: BTreeMap<String, TaskConfig>) -> Result<BTreeMap<Task, TaskConfig>> {
    let mut tasks = BTreeMap::new();

    for (name, task_cfg) in raw {
        let task: Task = name.parse().map_err(|_| {
            let known: Vec<_> = Task::ALL.iter().map(|t| t.tag()).collect();
            GrError::ConfigError(format!(
                "[task.{name}] does not name a known task (expected one of {})",
                known.join(", ")
            ))
        })?;

        if let Some(cmd) = &task_cfg.cmd {
            if cmd.trim().is_empty() {
                return Err(GrError::ConfigError(format!(
                    "[task.{name}].cmd must not be empty"
                )));
            }
        }

        if tasks.insert(task, task_cfg).is_some() {
            return Err(GrError::ConfigError(format!(
                "task '{}' is configured more than once",
                task.tag()
            )));
        }
    }

    Ok(tasks)
}
