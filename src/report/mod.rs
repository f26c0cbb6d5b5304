// src/report/mod.rs

//! Terminal reporting for running tasks.
//!
//! While a task runs, two independent loops share one [`ElapsedCounter`]:
//! - the animator ([`animator`]) redraws `[*  ] build    00:03` every 150 ms
//! - the timer ([`elapsed`]) bumps the counter once per second
//!
//! [`Reporter`] starts both, stops both (cancel, then wait for each to
//! return) and prints the final `[ ✔ ]` / `[ ✘ ]` line.

pub mod animator;
pub mod elapsed;
pub mod indicator;
pub mod reporter;
pub mod terminal;

pub use elapsed::{ElapsedCounter, format_duration};
pub use indicator::Indicator;
pub use reporter::{LiveDisplay, Reporter, SHUTDOWN_GRACE, render_final_line};
pub use terminal::{StdoutTerminal, Terminal};
