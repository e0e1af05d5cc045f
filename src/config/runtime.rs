//! Settings that stay adjustable after the logger is built. Shared between the
//! facade, the file sink, and the flush timer, so every field is a lock-free
//! atomic — a setter takes effect on the next write, flush, or rotation decision
//! without coordinating with in-flight logging calls.

use crate::level::Level;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU64, AtomicUsize, Ordering};

/// One cell per tunable; `Relaxed` ordering is enough because each field is an
/// independent threshold, never part of a multi-field invariant.
#[derive(Debug)]
pub struct RuntimeSettings {
    min_level: AtomicU8,
    console_enabled: AtomicBool,
    max_file_size: AtomicU64,
    max_files: AtomicUsize,
    batch_size: AtomicUsize,
    flush_interval_ms: AtomicU64,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self::new(Level::Info, true, 10 * 1024 * 1024, 5, 10, 5000)
    }
}

impl RuntimeSettings {
    /// Seeded once by the builder; everything afterwards goes through the setters.
    #[must_use]
    pub fn new(
        min_level: Level,
        console_enabled: bool,
        max_file_size: u64,
        max_files: usize,
        batch_size: usize,
        flush_interval_ms: u64,
    ) -> Self {
        Self {
            min_level: AtomicU8::new(min_level.as_u8()),
            console_enabled: AtomicBool::new(console_enabled),
            max_file_size: AtomicU64::new(max_file_size),
            max_files: AtomicUsize::new(max_files),
            batch_size: AtomicUsize::new(batch_size.max(1)),
            flush_interval_ms: AtomicU64::new(flush_interval_ms.max(1)),
        }
    }

    /// Records with a level numerically greater than this are dropped at the facade.
    #[must_use]
    pub fn min_level(&self) -> Level {
        Level::from_u8(self.min_level.load(Ordering::Relaxed))
    }

    pub fn set_min_level(&self, level: Level) {
        self.min_level.store(level.as_u8(), Ordering::Relaxed);
    }

    /// The console sink checks this per record, so toggling silences it immediately.
    #[must_use]
    pub fn console_enabled(&self) -> bool {
        self.console_enabled.load(Ordering::Relaxed)
    }

    pub fn set_console_enabled(&self, enabled: bool) {
        self.console_enabled.store(enabled, Ordering::Relaxed);
    }

    /// Rotation threshold in bytes, read at the start of each flush.
    #[must_use]
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size.load(Ordering::Relaxed)
    }

    pub fn set_max_file_size(&self, bytes: u64) {
        self.max_file_size.store(bytes, Ordering::Relaxed);
    }

    /// Retention count applied after each rotation.
    #[must_use]
    pub fn max_files(&self) -> usize {
        self.max_files.load(Ordering::Relaxed)
    }

    pub fn set_max_files(&self, count: usize) {
        self.max_files.store(count, Ordering::Relaxed);
    }

    /// Buffer length that triggers a synchronous flush; clamped to at least one
    /// so a zero can never wedge the buffer.
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size.load(Ordering::Relaxed).max(1)
    }

    pub fn set_batch_size(&self, size: usize) {
        self.batch_size.store(size.max(1), Ordering::Relaxed);
    }

    /// Timer period, re-read on every tick so changes apply from the next tick.
    #[must_use]
    pub fn flush_interval_ms(&self) -> u64 {
        self.flush_interval_ms.load(Ordering::Relaxed).max(1)
    }

    pub fn set_flush_interval_ms(&self, ms: u64) {
        self.flush_interval_ms.store(ms.max(1), Ordering::Relaxed);
    }
}
