//! The stats command needs structured data to display — these types carry the
//! metadata from filesystem scan to CLI rendering.

use super::format_size;
use crate::logger::Logger;
use std::path::PathBuf;
use std::time::SystemTime;

/// Cleanup and stats both need the same directory scan, so this carries the shared result.
#[derive(Debug, Default)]
pub struct LogStats {
    /// Count of discovered matching files — shown as the headline stat.
    pub total_files: usize,
    /// Combined byte size of all files — used to gauge disk pressure.
    pub total_size: u64,
    /// Path of the least recently modified file — shows how far back retention reaches.
    pub oldest_file: Option<PathBuf>,
    /// Path of the most recently modified file — confirms logging is still active.
    pub newest_file: Option<PathBuf>,
    /// Per-file metadata for the detailed file listing.
    pub files: Vec<LogFileInfo>,
}

impl LogStats {
    /// Uses `print()` to bypass level filtering — command output should always
    /// be visible regardless of the configured minimum log level.
    pub fn log(&self, logger: &Logger) {
        logger.print("STATS", &format!("Total files: {}", self.total_files));
        logger.print(
            "STATS",
            &format!("Total size:  {}", format_size(self.total_size)),
        );

        if let Some(oldest) = &self.oldest_file {
            logger.print("STATS", &format!("Oldest:      {}", oldest.display()));
        }
        if let Some(newest) = &self.newest_file {
            logger.print("STATS", &format!("Newest:      {}", newest.display()));
        }

        if !self.files.is_empty() {
            logger.print("STATS", "Files:");
            for file in &self.files {
                let age = if file.age_days == 0 {
                    "today".to_string()
                } else if file.age_days == 1 {
                    "1 day".to_string()
                } else {
                    format!("{} days", file.age_days)
                };
                logger.raw(&format!(
                    "  {} ({}, {})",
                    file.path.display(),
                    format_size(file.size),
                    age
                ));
            }
        }
    }
}

/// Cleanup, stats, and the rotation sweep all need the same per-file metadata.
#[derive(Debug, Clone)]
pub struct LogFileInfo {
    /// Absolute path — serves as the unique identity for protection checks.
    pub path: PathBuf,
    /// Byte size on disk — compared against `max_total_size` for eviction.
    pub size: u64,
    /// Modification time — retention keeps the newest files.
    pub modified: SystemTime,
    /// Days since last modification — compared against `max_age_days` for expiry.
    pub age_days: u64,
}
