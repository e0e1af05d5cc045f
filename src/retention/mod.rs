//! Without automated retention, log directories grow until the disk fills —
//! this module enforces count, age, and size limits so users don't have to
//! remember to clean up manually. The rotating file sink uses the same file
//! inventory for its post-rotation sweep.

mod compress;
mod files;
mod options;
mod result;
mod size;
mod stats;

pub use options::CleanupOptions;
pub use result::CleanupResult;
pub use size::{format_size, parse_size};
pub use stats::{LogFileInfo, LogStats};

pub(crate) use compress::compress_file;
pub(crate) use files::collect;

use std::fs;
use std::path::Path;

/// Single entry point for the maintenance policies — combining age, size, and
/// keep-last into one pass avoids multiple directory scans and conflicting
/// deletions.
///
/// # Errors
/// Fails only when the directory scan itself fails; per-file action failures
/// are collected in the result instead.
pub fn cleanup(
    dir: &Path,
    prefix: &str,
    options: &CleanupOptions,
) -> Result<CleanupResult, crate::Error> {
    let mut result = CleanupResult::default();

    if !dir.exists() {
        return Ok(result);
    }

    let mut files = files::collect(dir, prefix)?;

    // Oldest files first ensures the least relevant logs go before newer ones
    files.sort_by(|a, b| a.modified.cmp(&b.modified));

    // keep_last-protected files must survive regardless of age or size filters
    let protected_from = options
        .keep_last
        .map_or(files.len(), |keep| files.len().saturating_sub(keep));

    for (idx, file) in files.iter().enumerate() {
        if idx >= protected_from {
            continue;
        }

        let age_match = options
            .max_age_days
            .is_some_and(|max| file.age_days > u64::from(max));

        if !(options.delete_all || age_match) {
            continue;
        }

        if options.compress {
            compress_one(file, options.dry_run, &mut result);
        } else {
            delete_one(file, options.dry_run, &mut result);
        }
    }

    // Size-based retention is a separate pass — age filters may not be enough
    // to stay under the limit
    if !options.compress
        && let Some(limit) = options.max_total_size
    {
        let remaining: Vec<_> = files
            .iter()
            .enumerate()
            .filter(|(idx, f)| {
                *idx < protected_from
                    && !result.deleted.contains(&f.path)
                    && !result.would_delete.contains(&f.path)
            })
            .map(|(_, f)| f)
            .collect();

        let mut total: u64 = remaining.iter().map(|f| f.size).sum();

        // Evict oldest first — they're least likely to be needed for debugging
        for file in remaining {
            if total <= limit {
                break;
            }
            delete_one(file, options.dry_run, &mut result);
            total = total.saturating_sub(file.size);
        }
    }

    Ok(result)
}

fn delete_one(file: &LogFileInfo, dry_run: bool, result: &mut CleanupResult) {
    if dry_run {
        result.would_delete.push(file.path.clone());
        result.would_free += file.size;
    } else if let Err(e) = fs::remove_file(&file.path) {
        result.failed.push((file.path.clone(), e.to_string()));
    } else {
        result.deleted.push(file.path.clone());
        result.freed += file.size;
    }
}

fn compress_one(file: &LogFileInfo, dry_run: bool, result: &mut CleanupResult) {
    // Already-compressed files would only shrink by a rounding error
    if file.path.extension().is_some_and(|e| e == "gz") {
        return;
    }

    if dry_run {
        result.would_compress.push(file.path.clone());
        // Estimate ~50% compression ratio for text logs
        result.would_compress_save += file.size / 2;
        return;
    }

    match compress::compress_file(&file.path) {
        Ok(saved) => {
            result.compressed.push(file.path.clone());
            result.compressed_saved += saved;
        }
        Err(e) => result.failed.push((file.path.clone(), e.to_string())),
    }
}

/// Users need disk usage visibility before deciding on cleanup policies — this
/// gathers the same file inventory as cleanup but only reads, never deletes.
///
/// # Errors
/// Directory traversal may fail on permission issues.
pub fn stats(dir: &Path, prefix: &str) -> Result<LogStats, crate::Error> {
    let mut stats = LogStats::default();

    if !dir.exists() {
        return Ok(stats);
    }

    let files = files::collect(dir, prefix)?;

    stats.total_files = files.len();
    stats.total_size = files.iter().map(|f| f.size).sum();

    if let Some(oldest) = files.iter().min_by_key(|f| f.modified) {
        stats.oldest_file = Some(oldest.path.clone());
    }
    if let Some(newest) = files.iter().max_by_key(|f| f.modified) {
        stats.newest_file = Some(newest.path.clone());
    }

    stats.files = files;

    Ok(stats)
}
