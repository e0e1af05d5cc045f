//! Direct `Logger` construction would require knowing every sink's internals —
//! the builder hides that behind a stepwise API and makes the one fallible step
//! (opening the file capability) a contained, reported event instead of an error
//! the application has to handle.

use super::Logger;
use crate::config::RuntimeSettings;
use crate::fmt::LineFormatter;
use crate::level::Level;
use crate::retention::parse_size;
use crate::sink::{ConsoleSink, FileSink, Sink, report_failure};
use std::sync::Arc;

/// Collects plain values; the shared settings cell and the sinks are created at `build`.
pub struct LoggerBuilder {
    min_level: Level,
    console: Option<ConsoleOptions>,
    file: Option<FileOptions>,
    extra: Vec<Box<dyn Sink>>,
    max_file_size: u64,
    max_files: usize,
    batch_size: usize,
    flush_interval_ms: u64,
}

struct ConsoleOptions {
    enabled: bool,
    colors: bool,
    formatter: Option<LineFormatter>,
}

struct FileOptions {
    dir: String,
    prefix: String,
    compress_rotated: bool,
    formatter: Option<LineFormatter>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Info is a safe default for production — Debug is opt-in.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Level::Info,
            console: None,
            file: None,
            extra: Vec::new(),
            max_file_size: 10 * 1024 * 1024,
            max_files: 5,
            batch_size: 10,
            flush_interval_ms: 5000,
        }
    }

    /// Noisy low-level messages slow down production output.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Console output has its own concerns (colors, enablement) needing a dedicated sub-builder.
    #[must_use]
    pub fn console(self) -> ConsoleBuilder {
        ConsoleBuilder {
            parent: self,
            options: ConsoleOptions {
                enabled: true,
                colors: true,
                formatter: None,
            },
        }
    }

    /// File output has its own concerns (paths, rotation, batching) needing a dedicated sub-builder.
    #[must_use]
    pub fn file(self) -> FileBuilder {
        FileBuilder {
            parent: self,
            options: FileOptions {
                dir: "logs".to_string(),
                prefix: "app".to_string(),
                compress_rotated: false,
                formatter: None,
            },
        }
    }

    /// The two built-in sinks can't cover every deployment.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.extra.push(Box::new(sink));
        self
    }

    /// Opening the file capability is the only fallible step; a failure is
    /// reported once and the logger comes up console-only, because logging must
    /// never prevent the host application from starting.
    #[must_use]
    pub fn build(self) -> Logger {
        let settings = Arc::new(RuntimeSettings::new(
            self.min_level,
            self.console.as_ref().is_none_or(|c| c.enabled),
            self.max_file_size,
            self.max_files,
            self.batch_size,
            self.flush_interval_ms,
        ));

        let mut sinks: Vec<Box<dyn Sink>> = Vec::new();

        if let Some(options) = self.console {
            let mut sink = ConsoleSink::new(Arc::clone(&settings)).colors(options.colors);
            if let Some(formatter) = options.formatter {
                sink = sink.formatter(formatter);
            }
            sinks.push(Box::new(sink));
        }

        let file = self.file.and_then(|options| {
            match FileSink::open(options.dir, options.prefix, Arc::clone(&settings)) {
                Ok(mut sink) => {
                    sink = sink.compress_rotated(options.compress_rotated);
                    if let Some(formatter) = options.formatter {
                        sink = sink.formatter(formatter);
                    }
                    sinks.push(Box::new(sink.clone()));
                    Some(sink)
                }
                Err(e) => {
                    report_failure("file logging disabled, log directory unavailable", &e);
                    None
                }
            }
        });

        sinks.extend(self.extra);

        Logger::assemble(settings, sinks, file)
    }
}

/// Console output has its own set of concerns separate from file output.
pub struct ConsoleBuilder {
    parent: LoggerBuilder,
    options: ConsoleOptions,
}

impl ConsoleBuilder {
    /// Seeds the runtime flag; the console can be toggled later through the settings.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.options.enabled = enabled;
        self
    }

    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.options.colors = enabled;
        self
    }

    /// Different use cases need different information density per line.
    #[must_use]
    pub fn formatter(mut self, formatter: LineFormatter) -> Self {
        self.options.formatter = Some(formatter);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more sinks.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.console = Some(self.options);
        self.parent
    }
}

/// File output has its own set of concerns separate from console.
pub struct FileBuilder {
    parent: LoggerBuilder,
    options: FileOptions,
}

impl FileBuilder {
    /// The default `./logs` doesn't work for every deployment.
    #[must_use]
    pub fn dir(mut self, dir: impl Into<String>) -> Self {
        self.options.dir = dir.into();
        self
    }

    /// Multiple apps logging to the same directory need distinct filenames.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.prefix = prefix.into();
        self
    }

    /// Rotation threshold as raw bytes, for programmatic callers.
    #[must_use]
    pub const fn max_file_size(mut self, bytes: u64) -> Self {
        self.parent.max_file_size = bytes;
        self
    }

    /// Config files use "10M"/"1G" notation; junk input keeps the default.
    #[must_use]
    pub fn max_file_size_str(mut self, size: &str) -> Self {
        if let Some(bytes) = parse_size(size) {
            self.parent.max_file_size = bytes;
        }
        self
    }

    /// Retention count applied after each rotation.
    #[must_use]
    pub const fn max_files(mut self, count: usize) -> Self {
        self.parent.max_files = count;
        self
    }

    /// Buffer length that triggers a synchronous flush.
    #[must_use]
    pub const fn batch_size(mut self, size: usize) -> Self {
        self.parent.batch_size = size;
        self
    }

    /// Background flush period.
    #[must_use]
    pub const fn flush_interval_ms(mut self, ms: u64) -> Self {
        self.parent.flush_interval_ms = ms;
        self
    }

    /// Rotated files are immutable and compress well; opt-in to keep plain text grep-able.
    #[must_use]
    pub const fn compress_rotated(mut self, enabled: bool) -> Self {
        self.options.compress_rotated = enabled;
        self
    }

    /// File output doesn't need ANSI colors but may need a different column order.
    #[must_use]
    pub fn formatter(mut self, formatter: LineFormatter) -> Self {
        self.options.formatter = Some(formatter);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more sinks.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.file = Some(self.options);
        self.parent
    }
}
