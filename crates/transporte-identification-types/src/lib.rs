//! # transporte-identification-types
//!
//! Identification-type reference data for the transport-management
//! platform.
//!
//! This is the domain crate responsible for:
//! - The `IdentificationType` entity (one authoritative definition)
//! - The error taxonomy for reference-data operations
//! - The store seam (`IdentificationTypeStore`)
//! - The request-scoped service implementing list/fetch/rename/delete

#![warn(clippy::all)]

pub mod errors;
pub mod service;
pub mod store;
pub mod types;

pub use errors::{IdentificationTypeError, Result};
pub use service::IdentificationTypeService;
pub use store::{IdentificationTypeStore, StoreError};
pub use types::IdentificationType;
