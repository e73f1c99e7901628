//! Error types for request validation.

use thiserror::Error;

/// Result type alias for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised while turning an inbound request into [`crate::RanParameters`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required request field was absent or null.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The duplex mode was not one of the two accepted values.
    #[error("Invalid duplex mode '{0}': expected TDD or FDD")]
    InvalidDuplexMode(String),

    /// A field that must be strictly positive was zero or negative.
    #[error("Field {field} must be positive, got {value}")]
    NonPositive {
        /// The offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A numeric field was NaN or infinite.
    #[error("Field {field} must be a finite number, got {value}")]
    NonFinite {
        /// The offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A configuration identifier could not be parsed.
    #[error("Invalid configuration id '{0}'")]
    InvalidId(String),
}
