//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
    /// Application name, used as the log filename prefix.
    pub app_name: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            app_name: "app".to_string(),
        }
    }
}

/// Console sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable console output.
    pub enabled: bool,
    /// Enable ANSI colors.
    pub colors: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
        }
    }
}

/// File sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Enable file output.
    pub enabled: bool,
    /// Directory for log files.
    pub dir: String,
    /// Rotate the current file once it reaches this size (e.g., "10M").
    pub max_file_size: String,
    /// Keep at most this many matching files after rotation.
    pub max_files: usize,
    /// Flush once this many lines are buffered.
    pub batch_size: usize,
    /// Background flush interval in milliseconds.
    pub flush_interval_ms: u64,
    /// Gzip rotated files instead of keeping them as plain text.
    pub compress_rotated: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        let dir = directories::ProjectDirs::from("", "", "stackkit").map_or_else(
            || "logs".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            enabled: false,
            dir,
            max_file_size: "10M".to_string(),
            max_files: 5,
            batch_size: 10,
            flush_interval_ms: 5000,
            compress_rotated: false,
        }
    }
}

/// User-store configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UsersConfig {
    /// Store backend: "memory" or "json".
    pub store: String,
    /// Path to the JSON store file (ignored for the memory backend).
    pub path: String,
}

impl Default for UsersConfig {
    fn default() -> Self {
        let path = directories::ProjectDirs::from("", "", "stackkit").map_or_else(
            || "users.json".to_string(),
            |dirs| {
                dirs.data_dir()
                    .join("users.json")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            store: "memory".to_string(),
            path,
        }
    }
}
