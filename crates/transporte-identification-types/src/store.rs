//! Store seam for identification-type rows.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::IdentificationType;

/// Errors raised by a store backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or rejected the operation
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A row could not be mapped into the entity
    #[error("Row decoding error: {0}")]
    Decode(String),
}

/// Row-level access to the identification-type table.
///
/// This trait abstracts the relational backend to enable testing with
/// in-memory implementations. Write operations report the number of
/// rows affected so the service can tell a lost row apart from a
/// successful write.
#[async_trait]
pub trait IdentificationTypeStore: Send + Sync {
    /// Fetch all rows, in whatever order the store returns them
    async fn list(&self) -> Result<Vec<IdentificationType>, StoreError>;

    /// Fetch one row by id
    async fn find(&self, id: i64) -> Result<Option<IdentificationType>, StoreError>;

    /// Overwrite a row's name, returning the number of rows affected
    async fn update_name(&self, id: i64, name: &str) -> Result<u64, StoreError>;

    /// Remove a row, returning the number of rows affected
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;

    /// Check whether a row with this id exists
    async fn exists(&self, id: i64) -> Result<bool, StoreError>;
}
