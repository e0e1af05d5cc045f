//! Error type for user operations. Unlike the logging subsystem, these are
//! ordinary typed results — callers are expected to branch on them.

/// Error type for user service and store operations.
#[derive(Debug)]
pub enum Error {
    /// Input failed validation (email shape, unknown role/status string).
    Validation(String),
    /// Another record already owns this email (case-sensitive exact match).
    DuplicateEmail(String),
    /// No record with the given ID.
    NotFound(String),
    /// The actor is not allowed to perform this operation on this target.
    Unauthorized(String),
    /// Disallowed status transition.
    InvalidTransition { from: String, to: String },
    /// The backing store failed (I/O, serialization).
    Store(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "validation failed: {msg}"),
            Self::DuplicateEmail(email) => write!(f, "email already registered: {email}"),
            Self::NotFound(id) => write!(f, "user not found: {id}"),
            Self::Unauthorized(msg) => write!(f, "not authorized: {msg}"),
            Self::InvalidTransition { from, to } => {
                write!(f, "invalid status transition: {from} -> {to}")
            }
            Self::Store(msg) => write!(f, "store error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Store(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Store(e.to_string())
    }
}
