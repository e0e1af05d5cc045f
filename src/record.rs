//! Carries all data a sink needs to render one log line — avoids passing a
//! half-dozen loose parameters through the facade, and freezes the timestamp at
//! the moment of the logging call rather than at flush time.

use crate::level::Level;
use chrono::{SecondsFormat, Utc};

/// Error details captured at the call site. The original error object may not be
/// `'static`, so the record keeps rendered strings instead of the error itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedError {
    /// Top-level error message.
    pub message: String,
    /// Rendered source chain, one cause per line; `None` when the error has no source.
    pub stack: Option<String>,
}

impl CapturedError {
    /// Walks the `source()` chain so the log keeps causes that the top-level
    /// message alone would hide.
    #[must_use]
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        let mut stack = String::new();
        let mut source = err.source();
        while let Some(cause) = source {
            if !stack.is_empty() {
                stack.push('\n');
            }
            stack.push_str("caused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }

        Self {
            message: err.to_string(),
            stack: if stack.is_empty() { None } else { Some(stack) },
        }
    }
}

/// Immutable once created — sinks may buffer records past the logging call, so
/// nothing in here can depend on when the sink gets around to rendering it.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    /// RFC 3339 UTC timestamp, millisecond precision, frozen at creation.
    pub timestamp: String,
    /// Subsystem or component name; empty string renders as `[]`.
    pub context: String,
    pub message: String,
    /// Structured payload rendered as a pretty-printed `Data:` block.
    pub data: Option<serde_json::Value>,
    /// Captured error rendered as a `Stack:` block.
    pub error: Option<CapturedError>,
    /// List items and continuation lines would look broken with repeated
    /// timestamp/level prefixes — raw records render as the bare message.
    pub raw: bool,
}

impl LogRecord {
    /// Stamps the record with the current UTC time; everything else is optional
    /// and attached through the facade's `log_data`/`log_err` variants.
    #[must_use]
    pub fn new(level: Level, context: &str, message: &str) -> Self {
        Self {
            level,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            context: context.to_string(),
            message: message.to_string(),
            data: None,
            error: None,
            raw: false,
        }
    }

    /// Bare-message record for list items and continuation lines.
    #[must_use]
    pub fn bare(message: &str) -> Self {
        let mut record = Self::new(Level::Info, "", message);
        record.raw = true;
        record
    }

    /// Structured payloads ride along as JSON so sinks can render them uniformly.
    #[must_use]
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Captures message and source chain now — the error itself is not stored.
    #[must_use]
    pub fn with_error(mut self, err: &dyn std::error::Error) -> Self {
        self.error = Some(CapturedError::from_error(err));
        self
    }
}
