//! The two built-in sinks (console, file) can't cover every deployment — the
//! `Sink` trait lets applications add custom backends without modifying stackkit.

mod console;
mod file;

pub use console::ConsoleSink;
pub use file::FileSink;

pub(crate) use console::report_failure;
pub(crate) use file::FlushTimer;

use crate::record::LogRecord;

/// `Send + Sync` bounds enable concurrent logging from multiple threads without
/// locks on the trait object; stateful sinks bring their own interior locking.
pub trait Sink: Send + Sync {
    /// Each sink renders the record according to its own rules (ANSI, plain text).
    ///
    /// # Errors
    /// I/O errors from the underlying target (stdout, file). The facade ignores
    /// them — logging must never affect caller control flow.
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// Buffered sinks may lose tail data on abrupt exit without an explicit flush.
    ///
    /// # Errors
    /// I/O errors from the underlying target.
    fn flush(&self) -> Result<(), crate::Error>;
}
