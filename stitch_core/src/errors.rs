//! # Error Types
//!
//! Structured error types for stitch_core. Every failure is local and
//! deterministic: calling the same function again with the same input will
//! fail the same way, so nothing here is retryable.
//!
//! ## Example
//!
//! ```rust
//! use stitch_core::errors::{StitchError, StitchResult};
//!
//! fn validate_width(width: f64) -> StitchResult<()> {
//!     if !(width > 0.0) {
//!         return Err(StitchError::invalid_dimension(
//!             "width",
//!             width.to_string(),
//!             "Width must be a positive number",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_width(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for stitch_core operations
pub type StitchResult<T> = Result<T, StitchError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum StitchError {
    /// A width, height or gauge measurement is zero, negative, or not finite
    #[error("Invalid dimension for '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    /// Category identifier is not present in a reference table
    #[error("Unknown category: '{identifier}'")]
    UnknownCategory { identifier: String },

    /// Measurement unit outside the supported systems
    #[error("Unsupported unit: '{unit}'")]
    UnsupportedUnit { unit: String },

    /// Estimate exceeds the representable yardage bound
    #[error("Estimated quantity out of range: {value} yd")]
    QuantityOutOfRange { value: String },

    /// Estimator settings are unusable (negative margin, zero package size, ...)
    #[error("Invalid setting '{field}': {reason}")]
    InvalidSettings { field: String, reason: String },

    /// A non-dimensional input is malformed
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Config file could not be read or parsed
    #[error("Config error in '{path}': {reason}")]
    ConfigError { path: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl StitchError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        StitchError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownCategory error
    pub fn unknown_category(identifier: impl Into<String>) -> Self {
        StitchError::UnknownCategory {
            identifier: identifier.into(),
        }
    }

    /// Create an UnsupportedUnit error
    pub fn unsupported_unit(unit: impl Into<String>) -> Self {
        StitchError::UnsupportedUnit { unit: unit.into() }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(field: impl Into<String>, reason: impl Into<String>) -> Self {
        StitchError::InvalidSettings {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        StitchError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        StitchError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors that point at bad static data or configuration rather
    /// than bad user input. These should be caught by tests, not shown to users.
    pub fn is_configuration_defect(&self) -> bool {
        matches!(
            self,
            StitchError::UnknownCategory { .. }
                | StitchError::InvalidSettings { .. }
                | StitchError::ConfigError { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            StitchError::InvalidDimension { .. } => "INVALID_DIMENSION",
            StitchError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            StitchError::UnsupportedUnit { .. } => "UNSUPPORTED_UNIT",
            StitchError::QuantityOutOfRange { .. } => "QUANTITY_OUT_OF_RANGE",
            StitchError::InvalidSettings { .. } => "INVALID_SETTINGS",
            StitchError::InvalidInput { .. } => "INVALID_INPUT",
            StitchError::ConfigError { .. } => "CONFIG_ERROR",
            StitchError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for StitchError {
    fn from(e: serde_json::Error) -> Self {
        StitchError::SerializationError {
            reason: e.to_string(),
        }
    }
}
