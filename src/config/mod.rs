// src/config/mod.rs

//! Configuration loading and validation for gr.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate task keys, commands and the artifact pattern (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_effective, load_from_path};
pub use model::{ArtifactSection, ConfigFile, ConfigSection, RawConfigFile, TaskConfig};
