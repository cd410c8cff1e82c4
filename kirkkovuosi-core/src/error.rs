//! Error types for kirkkovuosi.
//!
//! Domain lookups never fail: an unknown slug or a date without an
//! observance resolves to `None`. Errors only come from loading
//! configuration and reference data, and from parsing raw user input.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in kirkkovuosi operations.
#[derive(Error, Debug)]
pub enum KirkkovuosiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not load reference data from {}: {message}", path.display())]
    DataLoad { path: PathBuf, message: String },

    #[error("Reference data is inconsistent: {0}")]
    DataIntegrity(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Year {0} is outside the supported range 1900..=2100")]
    YearOutOfRange(i32),
}

/// Result type alias for kirkkovuosi operations.
pub type KirkkovuosiResult<T> = Result<T, KirkkovuosiError>;
