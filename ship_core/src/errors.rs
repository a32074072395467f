//! # Error Types
//!
//! Structured error types for ship_core. Every variant carries enough
//! context to explain the failure to a person or to a program consuming
//! the JSON form.
//!
//! ## Example
//!
//! ```rust
//! use ship_core::errors::{CalcError, CalcResult};
//!
//! fn validate_volume(container_cbm: f64) -> CalcResult<()> {
//!     if container_cbm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "container_cbm".to_string(),
//!             value: container_cbm.to_string(),
//!             reason: "Container volume must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ship_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and file operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (negative, zero divisor, not finite)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// One item is larger than a whole container, so no packing count exists
    #[error("Item does not fit any container: {item_cbm:.4} CBM per item vs {container_cbm} CBM container")]
    ItemDoesNotFit { item_cbm: f64, container_cbm: f64 },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an ItemDoesNotFit error
    pub fn item_does_not_fit(item_cbm: f64, container_cbm: f64) -> Self {
        CalcError::ItemDoesNotFit {
            item_cbm,
            container_cbm,
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ItemDoesNotFit { .. } => "ITEM_DOES_NOT_FIT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}
