// src/types.rs

//! Small shared enums: the task set, build variants and output routing.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::GrError;

/// One step of the build workflow.
///
/// Each task maps to exactly one external process invocation (see
/// [`crate::task::factory`]). The display tag doubles as the identifier the
/// user types on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Task {
    Clean,
    Build,
    Check,
    Install,
    Dist,
    ShowLog,
}

impl Task {
    /// Every task, in declaration order.
    pub const ALL: [Task; 6] = [
        Task::Clean,
        Task::Build,
        Task::Check,
        Task::Install,
        Task::Dist,
        Task::ShowLog,
    ];

    /// Fixed lowercase display tag.
    pub fn tag(self) -> &'static str {
        match self {
            Task::Clean => "clean",
            Task::Build => "build",
            Task::Check => "check",
            Task::Install => "install",
            Task::Dist => "dist",
            Task::ShowLog => "show-log",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Task {
    type Err = GrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Task::ALL
            .into_iter()
            .find(|task| task.tag() == wanted)
            .ok_or_else(|| GrError::UnknownTask(s.to_string()))
    }
}

/// Build flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Debug,
    Release,
}

impl Variant {
    /// Lowercase name, e.g. `debug`.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Debug => "debug",
            Variant::Release => "release",
        }
    }

    /// Capitalised name, e.g. `Debug` (as used in `assembleDebug`).
    pub fn capitalized(self) -> &'static str {
        match self {
            Variant::Debug => "Debug",
            Variant::Release => "Release",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" | "debug" => Ok(Variant::Debug),
            "r" | "release" => Ok(Variant::Release),
            other => Err(format!(
                "unknown build variant: {other} (expected \"d\", \"debug\", \"r\" or \"release\")"
            )),
        }
    }
}

/// Where a task's subprocess writes its stdout/stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Inherit the controlling terminal.
    Inherit,
    /// Append to the log sink.
    #[default]
    Log,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Inherit => f.write_str("inherit"),
            OutputMode::Log => f.write_str("log"),
        }
    }
}
