//! Severity levels that gate which records reach the sinks.

use std::fmt;
use std::str::FromStr;

/// Discriminants are priorities: lower = more severe. A record is dropped when its
/// level compares greater than the configured minimum, so `Ord` is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Unrecoverable failures that prevent the operation from completing.
    Error = 0,
    /// Non-fatal anomalies that may need attention (retries, degraded modes).
    Warn = 1,
    /// Normal operational milestones — service started, config loaded, etc.
    #[default]
    Info = 2,
    /// Startup, teardown, and state-change details useful for diagnosing issues.
    Debug = 3,
}

impl Level {
    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Convenience for iteration — used by help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Error, Self::Warn, Self::Info, Self::Debug]
    }

    /// The runtime settings cell stores the minimum level as a plain byte.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Out-of-range bytes clamp to the least severe level rather than panic —
    /// the settings cell is written concurrently and must never poison a read.
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Error,
            1 => Self::Warn,
            2 => Self::Info,
            _ => Self::Debug,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
