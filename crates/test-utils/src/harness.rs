use std::sync::Arc;

use gr::config::ConfigFile;
use gr::engine::{Sequencer, TaskRunner};
use gr::fs::mock::MockFileSystem;
use gr::report::Reporter;
use gr::task::ConfiguredTaskFactory;

use crate::fake_executor::ScriptedExecutor;
use crate::recording_terminal::RecordingTerminal;

/// Sequencer over the built-in command table, a scripted executor and a
/// recording terminal. Keep clones of `executor` / `terminal` to inspect them.
pub fn scripted_sequencer(
    executor: ScriptedExecutor,
    terminal: RecordingTerminal,
) -> Sequencer<ConfiguredTaskFactory, ScriptedExecutor> {
    scripted_sequencer_with(ConfigFile::default(), MockFileSystem::new(), executor, terminal)
}

pub fn scripted_sequencer_with(
    config: ConfigFile,
    fs: MockFileSystem,
    executor: ScriptedExecutor,
    terminal: RecordingTerminal,
) -> Sequencer<ConfiguredTaskFactory, ScriptedExecutor> {
    let factory = ConfiguredTaskFactory::new(config, Arc::new(fs));
    let reporter = Reporter::new(Arc::new(terminal));
    Sequencer::new(factory, TaskRunner::new(executor, reporter))
}
