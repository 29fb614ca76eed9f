//! Identification-type error taxonomy.

use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by identification-type operations
#[derive(Debug, Error)]
pub enum IdentificationTypeError {
    /// No row carries the requested id
    #[error("Identification type not found: {0}")]
    NotFound(i64),

    /// A required field was missing or empty
    #[error("Validation failed for {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The row changed underneath the request between read and write
    #[error("Concurrent modification of identification type {0}")]
    Conflict(i64),

    /// Store communication failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for identification-type operations
pub type Result<T> = std::result::Result<T, IdentificationTypeError>;
