//! TOML configuration loading and the shared runtime settings cell.
//!
//! Separated from struct definitions so that the loading logic (path discovery,
//! file I/O) stays independent of the serde schema.

mod runtime;
mod structs;

pub use runtime::RuntimeSettings;
pub use structs::{ConsoleConfig, FileConfig, GeneralConfig, UsersConfig};

use crate::level::Level;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working logger —
/// `#[serde(default)]` on every field ensures zero-config works out of the box.
#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Severity filtering and app identity apply to all sinks — they belong above any specific backend.
    pub general: GeneralConfig,
    /// Console output has its own color and enable settings independent of file output.
    pub console: ConsoleConfig,
    /// File output has different concerns than console — directory, rotation, and retention.
    pub file: FileConfig,
    /// User-store selection for apps that embed the user service.
    pub users: UsersConfig,
}

impl Config {
    /// Primary entry point — CLI and library consumers both need the user's config
    /// from the default location, falling back to defaults when no file exists.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// Useful for tests and deployments that need to point at a non-standard config file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// XDG-compliant path under the platform config directory.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory (unlikely on Linux).
    pub fn config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("stackkit").join("stackkit.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Config stores the level as a string for TOML ergonomics — this converts
    /// to the typed enum the logger needs, defaulting to `Info` on junk input.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or(Level::Info)
    }
}
