// src/report/elapsed.rs

//! Per-task elapsed-seconds counter and the loop that advances it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::trace;

/// Period between counter increments.
pub const TIMER_TICK: Duration = Duration::from_millis(1000);

/// Whole seconds elapsed since the live display started.
///
/// Cloning shares the counter. Only the timer loop writes it; a new counter
/// (starting at zero) is created for every task.
#[derive(Debug, Clone, Default)]
pub struct ElapsedCounter(Arc<AtomicU64>);

impl ElapsedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    fn increment(&self) {
        self.0.fetch_add(1, Ordering::AcqRel);
    }
}

/// Format seconds as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_duration(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Increment `counter` every [`TIMER_TICK`] until `cancel` fires (or its
/// sender is dropped). The first increment happens one full tick after start.
pub(crate) async fn run_timer(counter: ElapsedCounter, mut cancel: oneshot::Receiver<()>) {
    let mut ticker = interval_at(Instant::now() + TIMER_TICK, TIMER_TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = &mut cancel => break,
            _ = ticker.tick() => {
                counter.increment();
                trace!(elapsed = counter.get(), "timer tick");
            }
        }
    }
}
