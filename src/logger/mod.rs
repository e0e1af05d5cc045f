//! The logging facade: explicitly constructed, dependency-injected, with an
//! explicit lifecycle. There is no ambient logger anywhere in the crate —
//! callers receive a `Logger` (or an `Arc<Logger>`) and pass it along.

mod builder;
mod from_config;

pub use builder::{ConsoleBuilder, FileBuilder, LoggerBuilder};

use crate::config::RuntimeSettings;
use crate::level::Level;
use crate::record::LogRecord;
use crate::sink::{FileSink, FlushTimer, Sink};
use chrono::NaiveDate;
use std::sync::{Arc, Mutex, PoisonError};

/// Fans each record out to the configured sinks. Severity gating happens here,
/// once, against the shared runtime settings; sink errors are swallowed so a
/// broken sink can never affect caller control flow.
pub struct Logger {
    settings: Arc<RuntimeSettings>,
    sinks: Vec<Box<dyn Sink>>,
    /// The file capability, also reachable through `sinks` for dispatch; kept
    /// separately because retrieval and shutdown need the concrete type.
    file: Option<FileSink>,
    timer: Mutex<Option<FlushTimer>>,
}

impl Logger {
    /// Direct construction would expose sink internals — the builder provides a guided API instead.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn assemble(
        settings: Arc<RuntimeSettings>,
        sinks: Vec<Box<dyn Sink>>,
        file: Option<FileSink>,
    ) -> Self {
        let timer = file.as_ref().map(FileSink::spawn_flush_timer);
        Self {
            settings,
            sinks,
            file,
            timer: Mutex::new(timer),
        }
    }

    /// Core dispatch — drops records below the severity threshold, then fans
    /// out to every sink, ignoring sink errors.
    pub fn log(&self, level: Level, context: &str, message: &str) {
        if level > self.settings.min_level() {
            return;
        }
        self.dispatch(&LogRecord::new(level, context, message));
    }

    /// Structured payloads (request bodies, state snapshots) ride along as JSON.
    pub fn log_data(&self, level: Level, context: &str, message: &str, data: serde_json::Value) {
        if level > self.settings.min_level() {
            return;
        }
        self.dispatch(&LogRecord::new(level, context, message).with_data(data));
    }

    /// Captures the error's message and source chain at the call site, since
    /// the error itself may not outlive the call.
    pub fn log_err(
        &self,
        level: Level,
        context: &str,
        message: &str,
        err: &dyn std::error::Error,
    ) {
        if level > self.settings.min_level() {
            return;
        }
        self.dispatch(&LogRecord::new(level, context, message).with_error(err));
    }

    /// Unrecoverable failures — I/O errors, invalid state, broken invariants.
    pub fn error(&self, context: &str, message: &str) {
        self.log(Level::Error, context, message);
    }

    /// Non-fatal anomalies — missing optional config, retries, degraded modes.
    pub fn warn(&self, context: &str, message: &str) {
        self.log(Level::Warn, context, message);
    }

    /// Normal operational milestones — service started, config loaded, etc.
    pub fn info(&self, context: &str, message: &str) {
        self.log(Level::Info, context, message);
    }

    /// Development-time diagnostics that are too noisy for normal operation.
    pub fn debug(&self, context: &str, message: &str) {
        self.log(Level::Debug, context, message);
    }

    /// Command output (stats, cleanup results) must always be visible —
    /// level filtering would hide the results the user explicitly asked for.
    pub fn print(&self, context: &str, message: &str) {
        self.dispatch(&LogRecord::new(Level::Info, context, message));
    }

    /// List items and continuation lines would look broken with repeated
    /// timestamp/level prefixes.
    pub fn raw(&self, message: &str) {
        self.dispatch(&LogRecord::bare(message));
    }

    fn dispatch(&self, record: &LogRecord) {
        for sink in &self.sinks {
            let _ = sink.write(record);
        }
    }

    /// The settings handle, for callers that tune thresholds at runtime.
    #[must_use]
    pub fn settings(&self) -> Arc<RuntimeSettings> {
        Arc::clone(&self.settings)
    }

    /// Severity threshold currently in effect.
    #[must_use]
    pub fn min_level(&self) -> Level {
        self.settings.min_level()
    }

    /// Takes effect on the next logging call.
    pub fn set_min_level(&self, level: Level) {
        self.settings.set_min_level(level);
    }

    /// Whether the file capability was constructed; `false` means console-only
    /// for the process lifetime.
    #[must_use]
    pub const fn file_logging_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// The file capability, for tests and maintenance tooling.
    #[must_use]
    pub const fn file(&self) -> Option<&FileSink> {
        self.file.as_ref()
    }

    /// Full text of the given day's file, today's when `date` is `None`;
    /// `None` when the day has no file or file logging is disabled.
    #[must_use]
    pub fn read_log(&self, date: Option<NaiveDate>) -> Option<String> {
        self.file.as_ref().and_then(|f| f.read_log(date))
    }

    /// All matching log filenames, most recently modified first; empty when
    /// file logging is disabled.
    #[must_use]
    pub fn log_files(&self) -> Vec<String> {
        self.file.as_ref().map_or_else(Vec::new, FileSink::log_files)
    }

    /// Tests verify the builder wired up the expected number of sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Buffered sinks may lose tail data on abrupt exit without an explicit flush.
    ///
    /// # Errors
    /// Returns the first I/O error encountered across all sinks. File-sink
    /// flush failures are reported and swallowed internally, so errors here
    /// come from unbuffered sinks only.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for sink in &self.sinks {
            sink.flush()?;
        }
        Ok(())
    }

    /// Stops the flush timer and performs one final synchronous flush. Idempotent;
    /// also invoked by `Drop`, so an explicit call is only needed when shutdown
    /// ordering matters.
    pub fn close(&self) {
        let timer = self
            .timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(timer) = timer {
            timer.stop();
        }
        let _ = self.flush();
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close();
    }
}
