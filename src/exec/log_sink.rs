// src/exec/log_sink.rs

//! Destination for redirected task output.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::errors::Result;

/// Where subprocess output goes when a task runs with
/// [`OutputMode::Log`](crate::types::OutputMode::Log).
pub trait LogSink: Send + Sync {
    /// Append a one-line marker separating this task's output from the last.
    fn append(&self, marker: &str) -> Result<()>;

    /// A handle the child can write stdout/stderr to.
    fn redirect_target(&self) -> Result<File>;
}

/// Appends everything to a single file on disk.
#[derive(Debug, Clone)]
pub struct FileLogSink {
    path: PathBuf,
}

impl FileLogSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> Result<File> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        Ok(file)
    }
}

impl LogSink for FileLogSink {
    fn append(&self, marker: &str) -> Result<()> {
        let mut file = self.open()?;
        writeln!(file, "{marker}")?;
        Ok(())
    }

    fn redirect_target(&self) -> Result<File> {
        self.open()
    }
}
