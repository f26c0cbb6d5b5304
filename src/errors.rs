// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown task: {0} (expected one of clean, build, check, install, dist, show-log)")]
    UnknownTask(String),

    #[error("Task '{0}' requires a build variant (pass -v d|r or set [config].default_variant)")]
    MissingVariant(String),

    #[error("Argument resolution failed: {0}")]
    ArgumentResolution(String),

    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl GrError {
    /// True for errors detected before any task runs (bad identifiers, bad
    /// config, missing variant).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GrError::ConfigError(_)
                | GrError::UnknownTask(_)
                | GrError::MissingVariant(_)
                | GrError::TomlError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GrError>;
