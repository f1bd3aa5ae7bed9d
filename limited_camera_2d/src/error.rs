//! Error types for the limited 2D camera crate
//!
//! The camera itself never fails: every camera input is sanitized.
//! Errors only come from the surrounding helpers (grid arithmetic and
//! controller configuration).

use std::fmt;

/// Result type for fallible crate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Crate errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Grid has zero columns/rows, or a cell index is out of range
    InvalidGrid(String),

    /// Controller configuration value is non-positive or non-finite
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidGrid(msg) => write!(f, "Invalid grid: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error at ERROR severity, then hand it back for `Err(...)`.
pub(crate) fn log_and_return_error(source: &str, error: Error) -> Error {
    crate::camera_error!(source, "{}", error);
    error
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
