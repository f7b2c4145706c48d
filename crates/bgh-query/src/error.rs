//! Error types for decision lookups.
//!
//! Errors fall into two groups:
//!
//! - **Input problems**: a date or month typed by the user does not parse.
//!   These are reported back to the user and the query is never run.
//! - **Infrastructure problems**: the database cannot be opened or queried,
//!   or the configuration cannot be read. These are fatal for the current
//!   invocation and are never retried.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for lookup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// User-supplied filter text failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Database operation failed (open, prepare, step, close)
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The database opened but has no `decisions` table
    #[error("no `decisions` table in {}", .0.display())]
    MissingTable(PathBuf),

    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Result could not be serialized for output
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if the user can fix this by re-entering their input.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Filter text that does not have the expected shape.
///
/// The offending input is carried along for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Not a real calendar date in `YYYY-MM-DD` form
    #[error("invalid date format: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Not a real month in `YYYY-MM` form
    #[error("invalid month format: '{0}' (expected YYYY-MM)")]
    InvalidMonth(String),
}

impl ValidationError {
    /// The raw input that was rejected.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidDate(s) | Self::InvalidMonth(s) => s,
        }
    }
}
