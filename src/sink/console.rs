//! Console is the most common sink — immediate feedback on stdout without
//! configuring directories or rotation. Also carries the failure channel the
//! file sink reports through, since logging errors must surface somewhere
//! without ever reaching application code.

use super::Sink;
use crate::config::RuntimeSettings;
use crate::fmt::LineFormatter;
use crate::level::Level;
use crate::record::LogRecord;
use std::io::{self, Write};
use std::sync::Arc;

const RESET: &str = "\x1b[0m";

/// Sink failures go to stderr unconditionally — bypassing the enabled flag — so
/// a broken file sink is visible even when console output is off. Best-effort:
/// a failing stderr leaves nowhere further to report.
pub(crate) fn report_failure(context: &str, err: &dyn std::fmt::Display) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "stackkit: {context}: {err}");
}

/// Same palette for every console: error red, warn yellow, info cyan, debug purple.
const fn level_color(level: Level) -> &'static str {
    match level {
        Level::Error => "\x1b[31m",
        Level::Warn => "\x1b[33m",
        Level::Info => "\x1b[36m",
        Level::Debug => "\x1b[35m",
    }
}

/// Renders records to stdout; honors the runtime enable flag per record so the
/// console can be silenced without rebuilding the logger.
pub struct ConsoleSink {
    settings: Arc<RuntimeSettings>,
    formatter: LineFormatter,
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
}

impl ConsoleSink {
    /// The settings handle is shared with the facade — the `console_enabled`
    /// flag lives there so setters apply to an already-built sink.
    #[must_use]
    pub fn new(settings: Arc<RuntimeSettings>) -> Self {
        Self {
            settings,
            formatter: LineFormatter::new(),
            colors_enabled: true,
        }
    }

    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Custom layouts reuse the shared placeholder set.
    #[must_use]
    pub fn formatter(mut self, formatter: LineFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    fn render(&self, record: &LogRecord) -> String {
        if record.raw || !self.colors_enabled {
            return self.formatter.format(record);
        }

        let tag = self.formatter.format_tag(record);
        let colored = format!("{}{tag}{RESET}", level_color(record.level));
        // The tag renders identically in both calls and no level name can occur
        // in the timestamp ahead of it, so the first occurrence is the tag.
        self.formatter.format(record).replacen(&tag, &colored, 1)
    }
}

impl Sink for ConsoleSink {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        if !self.settings.console_enabled() {
            return Ok(());
        }

        let line = self.render(record);
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().lock().flush()?;
        Ok(())
    }
}
