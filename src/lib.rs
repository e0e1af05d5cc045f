//! `stackkit` - Core logging and user services for the stackkit multi-app starter.
//!
//! Two subsystems shared by every app in the template:
//! - A leveled, buffered, rotating log writer with console and file sinks,
//!   count-based retention, and retrieval of already-written logs
//! - A user CRUD/authorization service over pluggable data stores
//!
//! # Example
//!
//! ```
//! use stackkit::{Level, Logger};
//!
//! let logger = Logger::builder()
//!     .level(Level::Debug)
//!     .console()
//!         .colors(true)
//!         .done()
//!     .build();
//!
//! logger.info("MAIN", "Application started");
//! logger.debug("NET", "Connecting to server...");
//! logger.warn("NET", "Connection timeout");
//! logger.error("NET", "Connection failed");
//! logger.close();
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `stackkit` maintenance binary

// Core modules (always available)
pub mod config;
pub mod fmt;
pub mod level;
pub mod logger;
pub mod record;
pub mod retention;
pub mod sink;
pub mod users;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

mod error;

// Re-exports for convenience
pub use config::{Config, RuntimeSettings};
pub use error::Error;
pub use fmt::{Alignment, LineFormatter, TagConfig, Transform};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use record::{CapturedError, LogRecord};
pub use retention::{
    CleanupOptions, CleanupResult, LogFileInfo, LogStats, cleanup, format_size, parse_size, stats,
};
pub use sink::{ConsoleSink, FileSink, Sink};
pub use users::{
    JsonStore, MemoryStore, Role, Status, User, UserService, UserStore, UserUpdate,
};
