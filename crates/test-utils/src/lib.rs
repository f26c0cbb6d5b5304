//! Shared helpers for gr's integration tests: config builders, a scripted
//! executor, a recording terminal and sequencer wiring.

pub mod builders;
pub mod fake_executor;
pub mod harness;
pub mod recording_terminal;

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Install a test-captured tracing subscriber once per test binary.
///
/// Reads the same `GR_LOG` variable as the binary; defaults to `gr=debug`
/// so failing tests show task lifecycle events. `try_init` keeps this from
/// panicking when another subscriber is already set.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(gr::logging::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("gr=debug"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(false)
            .try_init();
    });
}
