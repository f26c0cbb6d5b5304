// src/report/terminal.rs

//! The terminal line the reporter draws on.

use std::io::{self, Write};

/// Carriage return plus "erase entire line".
pub const CLEAR_LINE: &str = "\r\x1b[2K";

/// The single terminal line the reporter draws on.
///
/// Tests swap in a recording implementation to inspect the transcript.
pub trait Terminal: Send + Sync {
    /// Write `text` verbatim and flush.
    fn write(&self, text: &str) -> io::Result<()>;
}

/// Writes to the process's stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutTerminal;

impl Terminal for StdoutTerminal {
    fn write(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}
