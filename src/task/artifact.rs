// src/task/artifact.rs

//! Locating the package produced by `build`, for `install`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use globset::{Glob, GlobMatcher};
use tracing::{debug, info};

use crate::errors::{GrError, Result};
use crate::fs::FileSystem;

/// Finds the file under `root` that matches a glob.
///
/// The glob is matched against paths relative to `root`, with `/`
/// separators. When several files match, the lexicographically greatest path
/// wins: build outputs embed version and ABI names that sort meaningfully.
#[derive(Debug, Clone)]
pub struct ArtifactLocator {
    fs: Arc<dyn FileSystem>,
    root: PathBuf,
    pattern: String,
}

impl ArtifactLocator {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        root: impl Into<PathBuf>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            fs,
            root: root.into(),
            pattern: pattern.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Walk the search root and pick the artifact.
    pub fn locate(&self) -> Result<PathBuf> {
        let matcher = Glob::new(&self.pattern)
            .map_err(|e| {
                GrError::ArgumentResolution(format!(
                    "invalid artifact pattern '{}': {e}",
                    self.pattern
                ))
            })?
            .compile_matcher();

        if !self.fs.is_dir(&self.root) {
            return Err(self.not_found());
        }

        let mut matches = collect_matching_files(self.fs.as_ref(), &self.root, &matcher)
            .map_err(|e| GrError::ArgumentResolution(format!("{e:#}")))?;
        matches.sort();

        // Runs while the progress line is live; stay below the default level.
        if matches.len() > 1 {
            info!(
                count = matches.len(),
                pattern = %self.pattern,
                "several artifacts match; using the last one in path order"
            );
        }

        let chosen = matches.pop().ok_or_else(|| self.not_found())?;
        debug!(artifact = ?chosen, "artifact located");
        Ok(chosen)
    }

    fn not_found(&self) -> GrError {
        GrError::ArgumentResolution(format!(
            "no artifact matching '{}' found under {}",
            self.pattern,
            self.root.display()
        ))
    }
}

fn collect_matching_files(
    fs: &dyn FileSystem,
    root: &Path,
    matcher: &GlobMatcher,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        for path in fs.read_dir(&dir)? {
            if fs.is_dir(&path) {
                stack.push(path);
            } else if fs.is_file(&path) {
                if let Ok(rel) = path.strip_prefix(root) {
                    let rel_str = rel.to_string_lossy().replace('\\', "/");
                    if matcher.is_match(&rel_str) {
                        files.push(path);
                    }
                }
            }
        }
    }

    Ok(files)
}
