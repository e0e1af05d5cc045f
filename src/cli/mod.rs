//! Command-line interface for the maintenance binary, using Clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
        }
    }
}

/// stackkit - log and inspect from the command line.
#[derive(Parser)]
#[command(name = "stackkit", version, about = "Log, inspect, and clean up logs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log a message.
    Log {
        /// Log level
        #[arg(value_enum)]
        level: LogLevel,
        /// Context/component name
        context: String,
        /// Log message
        message: Vec<String>,
        /// Structured payload as a JSON string
        #[arg(long)]
        data: Option<String>,
    },
    /// Print a day's log file.
    Show {
        /// Day to show (YYYY-MM-DD); today when omitted
        date: Option<String>,
    },
    /// List log files, newest first.
    Files,
    /// Show log statistics.
    Stats,
    /// Clean up old logs.
    Cleanup {
        /// Show what would be done without doing it
        #[arg(long)]
        dry_run: bool,
        /// Delete all files
        #[arg(long)]
        all: bool,
        /// Delete files older than N days
        #[arg(long, value_name = "DAYS")]
        older_than: Option<u32>,
        /// Keep total size under limit (e.g., "500M", "1G")
        #[arg(long, value_name = "SIZE")]
        max_size: Option<String>,
        /// Always keep the N most recent files
        #[arg(long, value_name = "N")]
        keep_last: Option<usize>,
        /// Compress files instead of deleting
        #[arg(long)]
        compress: bool,
    },
}

pub use commands::{cmd_cleanup, cmd_files, cmd_log, cmd_show, cmd_stats};
