//! Tests for size-based rotation and the post-rotation retention sweep.

use chrono::Utc;
use stackkit::{Level, Logger};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn current_file(dir: &TempDir, prefix: &str) -> PathBuf {
    let day = Utc::now().format("%Y-%m-%d");
    dir.path().join(format!("{prefix}-{day}.log"))
}

fn matching_files(dir: &TempDir, prefix: &str) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.starts_with(prefix) && (n.ends_with(".log") || n.ends_with(".log.gz")))
        .collect();
    names.sort();
    names
}

fn rotating_logger(dir: &TempDir, max_file_size: u64, max_files: usize) -> Logger {
    Logger::builder()
        .level(Level::Debug)
        .file()
        .dir(dir.path().to_string_lossy().into_owned())
        .prefix("test")
        .batch_size(1)
        .max_file_size(max_file_size)
        .max_files(max_files)
        .flush_interval_ms(60_000)
        .done()
        .build()
}

#[test]
fn oversized_current_file_rotates_before_next_write() {
    let dir = TempDir::new().unwrap();
    let current = current_file(&dir, "test");
    fs::write(&current, "x".repeat(64)).unwrap();

    let logger = rotating_logger(&dir, 32, 10);
    logger.info("S", "fresh");

    // Old content moved aside, current holds only the new line
    let names = matching_files(&dir, "test");
    assert_eq!(names.len(), 2);

    let content = fs::read_to_string(&current).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("fresh"));

    let rotated = names
        .iter()
        .find(|n| dir.path().join(n) != current)
        .unwrap();
    let old = fs::read_to_string(dir.path().join(rotated)).unwrap();
    assert_eq!(old, "x".repeat(64));
}

#[test]
fn overflowing_write_rotates_on_the_following_write() {
    let dir = TempDir::new().unwrap();
    // Any single formatted line exceeds 16 bytes
    let logger = rotating_logger(&dir, 16, 10);

    logger.info("S", "first line goes over the threshold");
    // The write that pushed the file over the limit does not rotate itself
    assert_eq!(matching_files(&dir, "test").len(), 1);

    logger.info("S", "second");
    let names = matching_files(&dir, "test");
    assert_eq!(names.len(), 2);

    let content = fs::read_to_string(current_file(&dir, "test")).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("second"));
}

#[test]
fn rotated_names_carry_a_timestamp_suffix() {
    let dir = TempDir::new().unwrap();
    let logger = rotating_logger(&dir, 16, 10);

    logger.info("S", "overflow me");
    logger.info("S", "trigger rotation");

    let current = current_file(&dir, "test");
    let rotated: Vec<String> = matching_files(&dir, "test")
        .into_iter()
        .filter(|n| dir.path().join(n) != current)
        .collect();
    assert_eq!(rotated.len(), 1);
    // prefix-YYYY-MM-DDTHH-MM-SS-mmmZ.log — colons and dots replaced by dashes
    assert!(rotated[0].contains('T'));
    assert!(!rotated[0].contains(':'));
    assert!(rotated[0].ends_with("Z.log"));
}

#[test]
fn retention_keeps_only_the_newest_files() {
    let dir = TempDir::new().unwrap();

    // Seed old matching files with distinct mtimes, oldest first
    for day in ["2001-01-01", "2001-01-02", "2001-01-03"] {
        fs::write(dir.path().join(format!("test-{day}.log")), "old\n").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
    }

    let logger = rotating_logger(&dir, 16, 2);
    logger.info("S", "overflow me");
    logger.info("S", "trigger rotation and cleanup");

    // Two retained by the sweep plus the freshly created current file
    let names = matching_files(&dir, "test");
    assert_eq!(names.len(), 3);
    assert!(!names.contains(&"test-2001-01-01.log".to_string()));
    assert!(!names.contains(&"test-2001-01-02.log".to_string()));
}

#[test]
fn compressed_rotation_leaves_a_gz_file() {
    let dir = TempDir::new().unwrap();
    let logger = Logger::builder()
        .file()
        .dir(dir.path().to_string_lossy().into_owned())
        .prefix("test")
        .batch_size(1)
        .max_file_size(16)
        .compress_rotated(true)
        .flush_interval_ms(60_000)
        .done()
        .build();

    logger.info("S", "overflow me");
    logger.info("S", "trigger rotation");

    let names = matching_files(&dir, "test");
    assert!(names.iter().any(|n| n.ends_with(".log.gz")));
    // The original rotated plain-text file is gone
    assert_eq!(names.iter().filter(|n| n.ends_with(".log")).count(), 1);
}
