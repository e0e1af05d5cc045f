//! Tests for the facade: severity gating, fan-out, runtime settings.

use stackkit::record::LogRecord;
use stackkit::{Level, Logger, Sink};
use std::sync::{Arc, Mutex};

/// Minimal capturing sink so gating can be asserted without file I/O.
#[derive(Clone, Default)]
struct Capture {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Capture {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Sink for Capture {
    fn write(&self, record: &LogRecord) -> Result<(), stackkit::Error> {
        self.lines.lock().unwrap().push(format!(
            "{}|{}|{}",
            record.level, record.context, record.message
        ));
        Ok(())
    }

    fn flush(&self) -> Result<(), stackkit::Error> {
        Ok(())
    }
}

#[test]
fn levels_below_minimum_are_dropped() {
    let capture = Capture::default();
    let logger = Logger::builder()
        .level(Level::Warn)
        .sink(capture.clone())
        .build();

    logger.error("A", "kept");
    logger.warn("A", "kept");
    logger.info("A", "dropped");
    logger.debug("A", "dropped");

    let lines = capture.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.contains("kept")));
}

#[test]
fn min_level_is_adjustable_at_runtime() {
    let capture = Capture::default();
    let logger = Logger::builder()
        .level(Level::Error)
        .sink(capture.clone())
        .build();

    logger.info("A", "before");
    logger.set_min_level(Level::Debug);
    logger.info("A", "after");

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("after"));
}

#[test]
fn print_bypasses_level_filter() {
    let capture = Capture::default();
    let logger = Logger::builder()
        .level(Level::Error)
        .sink(capture.clone())
        .build();

    logger.print("CMD", "always visible");
    logger.raw("  item");

    assert_eq!(capture.lines().len(), 2);
}

#[test]
fn builder_wires_expected_sinks() {
    let logger = Logger::builder().console().done().build();
    assert_eq!(logger.sink_count(), 1);
    assert!(!logger.file_logging_enabled());
}

#[test]
fn retrieval_without_file_capability_is_none() {
    let logger = Logger::builder().console().done().build();
    assert!(logger.read_log(None).is_none());
    assert!(logger.log_files().is_empty());
}

#[test]
fn log_data_and_err_respect_gating() {
    let capture = Capture::default();
    let logger = Logger::builder()
        .level(Level::Warn)
        .sink(capture.clone())
        .build();

    logger.log_data(Level::Debug, "A", "dropped", serde_json::json!({"x": 1}));
    let io = std::io::Error::other("boom");
    logger.log_err(Level::Error, "A", "kept", &io);

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("kept"));
}

#[test]
fn close_is_idempotent() {
    let logger = Logger::builder().console().done().build();
    logger.close();
    logger.close();
}
