use std::io;
use std::sync::{Arc, Mutex};

use gr::report::Terminal;
use gr::report::terminal::CLEAR_LINE;

/// Terminal that keeps every write in memory. Clones share the buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingTerminal {
    writes: Arc<Mutex<Vec<String>>>,
}

impl RecordingTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    /// Live progress frames (writes without a trailing newline), cleaned.
    pub fn frames(&self) -> Vec<String> {
        self.writes()
            .iter()
            .filter(|w| !w.ends_with('\n'))
            .map(|w| clean(w))
            .collect()
    }

    /// Final status lines (writes ending in a newline), cleaned.
    pub fn final_lines(&self) -> Vec<String> {
        self.writes()
            .iter()
            .filter(|w| w.ends_with('\n'))
            .map(|w| clean(w))
            .collect()
    }
}

/// Strip the line-clear prefix and trailing newline.
pub fn clean(write: &str) -> String {
    write
        .strip_prefix(CLEAR_LINE)
        .unwrap_or(write)
        .trim_end_matches('\n')
        .to_string()
}

impl Terminal for RecordingTerminal {
    fn write(&self, text: &str) -> io::Result<()> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
