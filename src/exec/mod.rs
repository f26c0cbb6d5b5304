// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the command of an
//! [`Operation`](crate::task::Operation), using `tokio::process::Command`.
//!
//! - [`process`] provides the `ProcessExecutor` trait and the concrete
//!   `RealProcessExecutor` used in production, which tests can replace with
//!   a fake implementation.
//! - [`log_sink`] is where redirected stdout/stderr ends up.

pub mod log_sink;
pub mod process;

pub use log_sink::{FileLogSink, LogSink};
pub use process::{ProcessExecutor, RealProcessExecutor, UNKNOWN_EXIT_CODE};
