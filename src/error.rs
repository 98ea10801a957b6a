//! Error types for the daterate field

use thiserror::Error;

/// Main error type for daterate operations
///
/// Errors surface from settings validation and storage parsing only;
/// rendering a validated configuration never fails.
#[derive(Error, Debug)]
pub enum DateRateError {
    #[error("Invalid setting '{key}': {message}")]
    InvalidSetting { key: String, message: String },

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Invalid stored date {0}")]
    InvalidDate(String),
}

/// Result type alias for daterate operations
pub type Result<T> = std::result::Result<T, DateRateError>;
