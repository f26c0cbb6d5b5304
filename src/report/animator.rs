// src/report/animator.rs

//! Redraw loop for the live progress line.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::{MissedTickBehavior, interval};
use tracing::debug;

use crate::report::elapsed::{ElapsedCounter, format_duration};
use crate::report::indicator::Indicator;
use crate::report::terminal::{CLEAR_LINE, Terminal};

/// Period between redraws.
pub const ANIMATION_TICK: Duration = Duration::from_millis(150);

/// Width the task label is padded to (longest tag is `show-log`).
pub const LABEL_WIDTH: usize = 8;

/// One frame: `\r\x1b[2K[*  ] build    00:03`.
pub fn render_frame(indicator: &Indicator, label: &str, elapsed_secs: u64) -> String {
    format!(
        "{CLEAR_LINE}[{}] {label:<LABEL_WIDTH$} {}",
        indicator.render(),
        format_duration(elapsed_secs)
    )
}

/// Redraw every [`ANIMATION_TICK`] until `cancel` fires (or its sender is
/// dropped). The first frame is drawn immediately.
///
/// Cancellation is checked before every redraw, so once this future has
/// returned nothing more is written.
pub(crate) async fn run_animator(
    label: String,
    elapsed: ElapsedCounter,
    terminal: Arc<dyn Terminal>,
    mut cancel: oneshot::Receiver<()>,
) {
    let mut indicator = Indicator::new();
    let mut ticker = interval(ANIMATION_TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = &mut cancel => break,
            _ = ticker.tick() => {
                let frame = render_frame(&indicator, &label, elapsed.get());
                if let Err(e) = terminal.write(&frame) {
                    debug!(error = %e, "failed to draw progress frame");
                }
                indicator.advance();
            }
        }
    }
}
