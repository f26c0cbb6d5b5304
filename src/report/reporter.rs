// src/report/reporter.rs

//! Live display lifecycle: start, stop (cancel then join), final line.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::report::animator::{LABEL_WIDTH, run_animator};
use crate::report::elapsed::{ElapsedCounter, format_duration, run_timer};
use crate::report::terminal::{CLEAR_LINE, Terminal};

/// How long the loops of a dropped [`LiveDisplay`] may take to notice.
///
/// Dropping the display (e.g. when the whole run is abandoned on Ctrl-C)
/// drops both cancel senders; each loop exits at its next poll without being
/// joined. Waiting this long before touching the terminal again is enough
/// for that poll to happen.
pub const SHUTDOWN_GRACE: Duration = Duration::from_millis(50);

const SUCCESS_MARK: char = '✔';
const FAILURE_MARK: char = '✘';

/// Handle for one background display loop.
///
/// - `cancel` asks the loop to stop at its next check.
/// - `handle` is the Tokio task running it; awaiting it confirms the loop has
///   returned.
struct LoopHandle {
    name: &'static str,
    cancel: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl LoopHandle {
    fn spawn<F, Fut>(name: &'static str, body: F) -> Self
    where
        F: FnOnce(oneshot::Receiver<()>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(body(cancel_rx));
        Self {
            name,
            cancel: Some(cancel_tx),
            handle,
        }
    }

    fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    async fn cancel_and_join(mut self) {
        if let Some(cancel) = self.cancel.take() {
            if cancel.send(()).is_err() {
                debug!(display_loop = self.name, "loop already finished while cancelling");
            }
        }

        if let Err(e) = self.handle.await {
            warn!(display_loop = self.name, error = %e, "display loop did not exit cleanly");
        }
    }
}

/// State of one task's live display.
///
/// Created by [`Reporter::start_live_display`] and consumed by
/// [`Reporter::stop_live_display`], so at most one exists per task and the
/// loops can't be left running by accident.
pub struct LiveDisplay {
    label: String,
    elapsed: ElapsedCounter,
    animator: LoopHandle,
    timer: LoopHandle,
}

impl LiveDisplay {
    /// Current value of this task's elapsed counter.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.get()
    }

    /// True once both loops have returned.
    pub fn is_stopped(&self) -> bool {
        self.animator.is_finished() && self.timer.is_finished()
    }
}

impl fmt::Debug for LiveDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveDisplay")
            .field("label", &self.label)
            .field("elapsed", &self.elapsed.get())
            .finish_non_exhaustive()
    }
}

/// Owns the terminal line while tasks run.
#[derive(Clone)]
pub struct Reporter {
    terminal: Arc<dyn Terminal>,
}

impl Reporter {
    pub fn new(terminal: Arc<dyn Terminal>) -> Self {
        Self { terminal }
    }

    /// Start the animator and the elapsed timer for `label`, with a fresh
    /// counter at zero.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start_live_display(&self, label: &str) -> LiveDisplay {
        let elapsed = ElapsedCounter::new();

        let animator = {
            let label = label.to_string();
            let elapsed = elapsed.clone();
            let terminal = Arc::clone(&self.terminal);
            LoopHandle::spawn("animator", move |cancel| {
                run_animator(label, elapsed, terminal, cancel)
            })
        };

        let timer = {
            let elapsed = elapsed.clone();
            LoopHandle::spawn("timer", move |cancel| run_timer(elapsed, cancel))
        };

        debug!(task = %label, "live display started");

        LiveDisplay {
            label: label.to_string(),
            elapsed,
            animator,
            timer,
        }
    }

    /// Cancel both loops and wait until both have returned.
    ///
    /// Returns the final elapsed seconds. After this resolves the animator
    /// can no longer write to the terminal.
    pub async fn stop_live_display(&self, live: LiveDisplay) -> u64 {
        let LiveDisplay {
            label,
            elapsed,
            animator,
            timer,
        } = live;

        tokio::join!(animator.cancel_and_join(), timer.cancel_and_join());

        let secs = elapsed.get();
        debug!(task = %label, elapsed_secs = secs, "live display stopped");
        secs
    }

    /// Replace the live line with the task's final status line.
    pub fn print_final_result(&self, label: &str, success: bool, elapsed_secs: u64) {
        let line = render_final_line(label, success, elapsed_secs);
        if let Err(e) = self.terminal.write(&line) {
            warn!(task = %label, error = %e, "failed to print final result line");
        }
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter").finish_non_exhaustive()
    }
}

/// `\r\x1b[2K[ ✔ ] build    00:03\n`, or `✘` on failure.
pub fn render_final_line(label: &str, success: bool, elapsed_secs: u64) -> String {
    let mark = if success { SUCCESS_MARK } else { FAILURE_MARK };
    format!(
        "{CLEAR_LINE}[ {mark} ] {label:<LABEL_WIDTH$} {}\n",
        format_duration(elapsed_secs)
    )
}
