//! # transporte-storage
//!
//! SQLite storage backend for the transport-management reference data.
//!
//! This crate provides the relational implementation of the store seam
//! defined in `transporte-identification-types`: pool construction,
//! schema bootstrap, and row mapping for the single
//! `tipo_identificacion` table.

#![warn(clippy::all)]

pub mod sqlite;

pub use sqlite::SqliteIdentificationTypeStore;
