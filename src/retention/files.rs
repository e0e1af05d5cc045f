//! Cleanup, stats, and the sink's post-rotation sweep all need the same file
//! inventory — centralizing discovery here keeps the matching rules and
//! metadata extraction consistent.

use super::stats::LogFileInfo;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Only files this sink family produced are candidates: the current day file,
/// rotated timestamp files, and their `.gz` forms. Anything else in the
/// directory is left alone.
fn filename_pattern(prefix: &str) -> Regex {
    let escaped = regex::escape(prefix);
    Regex::new(&format!(r"^{escaped}-\d{{4}}-\d{{2}}-\d{{2}}.*\.log(\.gz)?$"))
        .expect("Invalid log filename regex")
}

/// Age and size metadata are gathered at scan time — re-statting files later
/// introduces TOCTOU races where files change between scan and action.
pub(crate) fn collect(dir: &Path, prefix: &str) -> Result<Vec<LogFileInfo>, crate::Error> {
    let pattern = filename_pattern(prefix);
    let now = SystemTime::now();
    let mut files = Vec::new();

    if !dir.is_dir() {
        return Ok(files);
    }

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| pattern.is_match(name));
        if !matches {
            continue;
        }

        let Ok(meta) = fs::metadata(&path) else {
            continue;
        };

        let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        let age_days = now
            .duration_since(modified)
            .map_or(0, |d| d.as_secs() / 86400);

        files.push(LogFileInfo {
            path,
            size: meta.len(),
            modified,
            age_days,
        });
    }

    Ok(files)
}
