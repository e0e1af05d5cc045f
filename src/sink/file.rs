//! Buffered, rotating file sink — the capability object for file logging.
//!
//! Construction either succeeds once (`open` creates the directory and the
//! capability exists for the process lifetime) or the logger runs console-only;
//! no code elsewhere branches on the environment. Writes buffer in memory and
//! reach disk when the batch fills or the flush timer ticks. Failures are
//! reported through the console failure channel and never raised to callers.

use super::Sink;
use super::console;
use crate::config::RuntimeSettings;
use crate::fmt::LineFormatter;
use crate::record::LogRecord;
use crate::retention;
use chrono::{NaiveDate, SecondsFormat, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;
use std::time::Duration;

struct Inner {
    dir: PathBuf,
    prefix: String,
    formatter: LineFormatter,
    settings: Arc<RuntimeSettings>,
    compress_rotated: bool,
    /// One mutex guards buffer-swap-and-clear together with the
    /// rotate-rename-cleanup sequence, so a concurrent flush can never append
    /// to a file mid-rename.
    buffer: Mutex<Vec<String>>,
}

/// Cheap to clone — the flush timer thread holds one handle, the logger another.
#[derive(Clone)]
pub struct FileSink {
    inner: Arc<Inner>,
}

impl FileSink {
    /// The one place file logging can fail permanently: an uncreatable directory
    /// means the capability is absent for the process lifetime.
    ///
    /// # Errors
    /// Returns the underlying I/O error when the directory cannot be created.
    pub fn open(
        dir: impl Into<String>,
        prefix: impl Into<String>,
        settings: Arc<RuntimeSettings>,
    ) -> Result<Self, crate::Error> {
        let dir = dir.into();
        let expanded = shellexpand::tilde(&dir);
        let dir = PathBuf::from(expanded.as_ref());
        fs::create_dir_all(&dir)?;

        Ok(Self {
            inner: Arc::new(Inner {
                dir,
                prefix: prefix.into(),
                formatter: LineFormatter::new(),
                settings,
                compress_rotated: false,
                buffer: Mutex::new(Vec::new()),
            }),
        })
    }

    /// Custom layouts reuse the shared placeholder set. Only callable before the
    /// sink is shared (the timer clones the handle at build).
    ///
    /// # Panics
    /// Panics if called after the sink has been cloned.
    #[must_use]
    pub fn formatter(mut self, formatter: LineFormatter) -> Self {
        Arc::get_mut(&mut self.inner)
            .expect("formatter must be set before the sink is shared")
            .formatter = formatter;
        self
    }

    /// Rotated files are immutable, so they compress well; opt-in because plain
    /// text stays grep-able without a decompression step.
    ///
    /// # Panics
    /// Panics if called after the sink has been cloned.
    #[must_use]
    pub fn compress_rotated(mut self, enabled: bool) -> Self {
        Arc::get_mut(&mut self.inner)
            .expect("compress_rotated must be set before the sink is shared")
            .compress_rotated = enabled;
        self
    }

    /// Directory this sink writes into.
    #[must_use]
    pub fn dir(&self) -> &std::path::Path {
        &self.inner.dir
    }

    /// Filename prefix shared by the current and rotated files.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.inner.prefix
    }

    /// Number of lines waiting for the next flush.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.lock_buffer().len()
    }

    /// Full text of the given day's file, today's when `date` is `None`;
    /// `None` when that day has no file.
    #[must_use]
    pub fn read_log(&self, date: Option<NaiveDate>) -> Option<String> {
        let day = date.unwrap_or_else(|| Utc::now().date_naive());
        let name = format!("{}-{}.log", self.inner.prefix, day.format("%Y-%m-%d"));
        fs::read_to_string(self.inner.dir.join(name)).ok()
    }

    /// All matching filenames, most recently modified first.
    #[must_use]
    pub fn log_files(&self) -> Vec<String> {
        retention::collect(&self.inner.dir, &self.inner.prefix).map_or_else(
            |_| Vec::new(),
            |mut files| {
                files.sort_by(|a, b| b.modified.cmp(&a.modified));
                files
                    .into_iter()
                    .filter_map(|f| {
                        f.path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                    })
                    .collect()
            },
        )
    }

    /// Takes the whole buffer and appends it to the current file as one write.
    /// A failed append drops the batch: retrying from inside the logging path
    /// would stall the host application on a persistently broken disk.
    pub(crate) fn flush_buffered(&self) {
        let mut buffer = self.lock_buffer();
        if buffer.is_empty() {
            return;
        }

        self.rotate_if_needed();

        let mut content = buffer.join("\n");
        content.push('\n');
        buffer.clear();

        // Still under the buffer lock: the append must not interleave with
        // another flush's rename-then-cleanup sequence.
        if let Err(e) = self.append(&content) {
            console::report_failure("log flush failed, dropping batch", &e);
        }
    }

    fn lock_buffer(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A panic while holding the lock poisons it; the data is plain strings,
        // so continuing with the inner value is always safe.
        self.inner.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn current_path(&self) -> PathBuf {
        let day = Utc::now().format("%Y-%m-%d");
        self.inner.dir.join(format!("{}-{day}.log", self.inner.prefix))
    }

    fn rotated_path(&self) -> PathBuf {
        let stamp = Utc::now()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .replace([':', '.'], "-");
        self.inner.dir.join(format!("{}-{stamp}.log", self.inner.prefix))
    }

    fn append(&self, content: &str) -> Result<(), crate::Error> {
        let path = self.current_path();
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Checks the file the next append would target; if it is already at or past
    /// the size threshold, renames it aside so the append lands in a fresh file.
    /// The write that pushes a file over the threshold therefore triggers
    /// rotation on the following flush, never its own.
    fn rotate_if_needed(&self) {
        let current = self.current_path();
        let Ok(meta) = fs::metadata(&current) else {
            return;
        };
        if meta.len() < self.inner.settings.max_file_size() {
            return;
        }

        let rotated = self.rotated_path();
        if let Err(e) = fs::rename(&current, &rotated) {
            // Appending to an oversized file loses nothing; dropping lines would.
            console::report_failure("log rotation failed, continuing on oversized file", &e);
            return;
        }

        if self.inner.compress_rotated {
            if let Err(e) = retention::compress_file(&rotated) {
                console::report_failure("compression of rotated file failed", &e);
            }
        }

        self.cleanup_old_files(&current);
    }

    /// Deletes matching files beyond the retention count, newest kept. Runs only
    /// after a successful rename, per-file failures don't abort the sweep, and
    /// the active write target is never a candidate.
    fn cleanup_old_files(&self, active: &std::path::Path) {
        let Ok(mut files) = retention::collect(&self.inner.dir, &self.inner.prefix) else {
            return;
        };

        files.sort_by(|a, b| b.modified.cmp(&a.modified));

        for file in files.iter().skip(self.inner.settings.max_files()) {
            if file.path == active {
                continue;
            }
            if let Err(e) = fs::remove_file(&file.path) {
                console::report_failure("retention delete failed", &e);
            }
        }
    }

    /// Background flush loop; the period is re-read every tick so interval
    /// changes apply without restarting the thread.
    pub(crate) fn spawn_flush_timer(&self) -> FlushTimer {
        let sink = self.clone();
        let (tx, rx) = mpsc::channel::<()>();

        let handle = std::thread::spawn(move || loop {
            let interval = Duration::from_millis(sink.inner.settings.flush_interval_ms());
            match rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => sink.flush_buffered(),
                _ => break,
            }
        });

        FlushTimer {
            tx,
            handle: Some(handle),
        }
    }
}

impl Sink for FileSink {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        // Raw records are console listing output (file contents, cleanup
        // reports); buffering them would write the log back into itself.
        if record.raw {
            return Ok(());
        }

        let line = self.inner.formatter.format(record);

        let pending = {
            let mut buffer = self.lock_buffer();
            buffer.push(line);
            buffer.len()
        };

        // Size-triggered flush runs synchronously inside the triggering call;
        // the timer covers partially filled batches.
        if pending >= self.inner.settings.batch_size() {
            self.flush_buffered();
        }

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        // Flush failures are reported and the batch dropped inside; nothing to
        // surface here — logging errors never reach application code.
        self.flush_buffered();
        Ok(())
    }
}

/// Owns the flush thread; `stop` wakes it and joins so a final flush can run
/// after the last tick.
pub(crate) struct FlushTimer {
    tx: mpsc::Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl FlushTimer {
    pub(crate) fn stop(mut self) {
        let _ = self.tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
