//! Identification-type entity definition.

use serde::{Deserialize, Serialize};

/// A reference-data category classifying identification documents
/// elsewhere in the platform (national ID card, passport, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationType {
    /// Surrogate primary key, generated by the store. Never changes
    /// once assigned.
    pub id: i64,

    /// Display name. Required on the edit path; the backing column
    /// holds at most 50 characters.
    pub name: String,
}
