//! Tests for the standalone cleanup and stats API.

use stackkit::{CleanupOptions, cleanup, format_size, parse_size, stats};
use std::fs;
use tempfile::tempdir;

#[test]
fn parse_size_notation() {
    assert_eq!(parse_size("100"), Some(100));
    assert_eq!(parse_size("1K"), Some(1024));
    assert_eq!(parse_size("1KB"), Some(1024));
    assert_eq!(parse_size("1M"), Some(1024 * 1024));
    assert_eq!(parse_size("1MB"), Some(1024 * 1024));
    assert_eq!(parse_size("1G"), Some(1024 * 1024 * 1024));
    assert_eq!(parse_size("500M"), Some(500 * 1024 * 1024));
    assert_eq!(parse_size("junk"), None);
}

#[test]
fn format_size_units() {
    assert_eq!(format_size(100), "100 B");
    assert_eq!(format_size(1024), "1.00 KB");
    assert_eq!(format_size(1024 * 1024), "1.00 MB");
    assert_eq!(format_size(1024 * 1024 * 1024), "1.00 GB");
}

#[test]
fn cleanup_empty_dir() {
    let dir = tempdir().unwrap();
    let result = cleanup(dir.path(), "app", &CleanupOptions::default()).unwrap();
    assert_eq!(result.count(), 0);
}

#[test]
fn cleanup_without_filters_touches_nothing() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("app-2001-01-01.log");
    fs::write(&log, "content").unwrap();

    let result = cleanup(dir.path(), "app", &CleanupOptions::default()).unwrap();
    assert_eq!(result.count(), 0);
    assert!(log.exists());
}

#[test]
fn cleanup_dry_run_previews_without_deleting() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("app-2001-01-01.log");
    fs::write(&log, "content").unwrap();

    let options = CleanupOptions::new().delete_all(true).dry_run(true);
    let result = cleanup(dir.path(), "app", &options).unwrap();

    assert_eq!(result.would_delete.len(), 1);
    assert!(result.would_free > 0);
    assert!(result.deleted.is_empty());
    assert!(log.exists());
}

#[test]
fn cleanup_delete_all_removes_matching_only() {
    let dir = tempdir().unwrap();
    let mine = dir.path().join("app-2001-01-01.log");
    let other = dir.path().join("other-2001-01-01.log");
    fs::write(&mine, "content").unwrap();
    fs::write(&other, "content").unwrap();

    let options = CleanupOptions::new().delete_all(true);
    let result = cleanup(dir.path(), "app", &options).unwrap();

    assert_eq!(result.deleted.len(), 1);
    assert!(!mine.exists());
    assert!(other.exists());
}

#[test]
fn keep_last_protects_the_newest_files() {
    let dir = tempdir().unwrap();

    for day in ["01", "02", "03", "04", "05"] {
        let path = dir.path().join(format!("app-2001-01-{day}.log"));
        fs::write(&path, "content").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
    }

    let options = CleanupOptions::new().delete_all(true).keep_last(2);
    let result = cleanup(dir.path(), "app", &options).unwrap();

    assert_eq!(result.deleted.len(), 3);
    assert!(dir.path().join("app-2001-01-04.log").exists());
    assert!(dir.path().join("app-2001-01-05.log").exists());
    assert!(!dir.path().join("app-2001-01-01.log").exists());
}

#[test]
fn max_total_size_evicts_oldest_first() {
    let dir = tempdir().unwrap();

    for day in ["01", "02", "03"] {
        let path = dir.path().join(format!("app-2001-01-{day}.log"));
        fs::write(&path, [b'x'; 100]).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
    }

    let options = CleanupOptions::new().max_total_size_bytes(150);
    let result = cleanup(dir.path(), "app", &options).unwrap();

    assert_eq!(result.deleted.len(), 2);
    assert!(!dir.path().join("app-2001-01-01.log").exists());
    assert!(!dir.path().join("app-2001-01-02.log").exists());
    assert!(dir.path().join("app-2001-01-03.log").exists());
}

#[test]
fn compress_mode_swaps_logs_for_gz() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("app-2001-01-01.log");
    fs::write(&log, "compressible content ".repeat(50)).unwrap();

    let options = CleanupOptions::new().delete_all(true).compress(true);
    let result = cleanup(dir.path(), "app", &options).unwrap();

    assert_eq!(result.compressed.len(), 1);
    assert!(!log.exists());
    assert!(dir.path().join("app-2001-01-01.log.gz").exists());
}

#[test]
fn stats_empty() {
    let dir = tempdir().unwrap();
    let stats = stats(dir.path(), "app").unwrap();
    assert_eq!(stats.total_files, 0);
    assert_eq!(stats.total_size, 0);
}

#[test]
fn stats_with_files() {
    let dir = tempdir().unwrap();

    fs::write(dir.path().join("app-2001-01-01.log"), "short").unwrap();
    std::thread::sleep(std::time::Duration::from_millis(20));
    fs::write(dir.path().join("app-2001-01-02.log"), "a bit longer").unwrap();

    let stats = stats(dir.path(), "app").unwrap();
    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.total_size, 17);
    assert!(
        stats
            .oldest_file
            .as_ref()
            .unwrap()
            .ends_with("app-2001-01-01.log")
    );
    assert!(
        stats
            .newest_file
            .as_ref()
            .unwrap()
            .ends_with("app-2001-01-02.log")
    );
}
