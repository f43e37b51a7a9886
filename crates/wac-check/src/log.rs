// log.rs — Diagnostic sink for decision traces.
//
// Every evaluation step is written to a `DecisionLog` as one line of text.
// The sink is side output only; nothing it does can change a decision.
//
// The engine receives its sink explicitly (`AccessEngine::with_log`). Only
// the outermost entry points fall back to the process-wide default, which
// `configure_logger` can replace at any time. With nothing configured the
// default forwards to `tracing` at debug level.

use std::sync::{Arc, Mutex, RwLock};

/// Receives one line per evaluation step.
pub trait DecisionLog: Send + Sync {
    fn log(&self, line: &str);
}

/// Default sink: `tracing::debug!` under the `wac_check` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DecisionLog for TracingLog {
    fn log(&self, line: &str) {
        tracing::debug!(target: "wac_check", "{}", line);
    }
}

/// Any `Fn(&str)` closure is a sink.
impl<F> DecisionLog for F
where
    F: Fn(&str) + Send + Sync,
{
    fn log(&self, line: &str) {
        self(line)
    }
}

/// Collects lines in memory (useful for tests and for returning traces).
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every line logged so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl DecisionLog for MemoryLog {
    fn log(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
    }
}

static LOGGER: RwLock<Option<Arc<dyn DecisionLog>>> = RwLock::new(None);

/// Replace the process-wide default sink. `None` restores [`TracingLog`].
pub fn configure_logger(logger: Option<Arc<dyn DecisionLog>>) {
    *LOGGER
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = logger;
}

/// The process-wide default sink.
pub fn current_logger() -> Arc<dyn DecisionLog> {
    LOGGER
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
        .unwrap_or_else(|| Arc::new(TracingLog))
}

/// Write one line to the process-wide default sink.
pub fn log(line: &str) {
    current_logger().log(line);
}

/// Serializes tests that swap the process-wide sink.
#[cfg(test)]
pub(crate) static LOGGER_TEST_LOCK: Mutex<()> = Mutex::new(());
