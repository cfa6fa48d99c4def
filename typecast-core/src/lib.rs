//! Core types for the typecast schema generator.
//!
//! This crate provides the data model, error taxonomy, and boundary
//! traits shared across the typecast ecosystem.

mod casing;
mod catalog;
mod error;
mod file;
mod types;

// Identifier casing
pub use casing::{to_camel_case, to_pascal_case};
// Schema input boundary
pub use catalog::Catalog;
pub use error::{Error, Result};
// Generated output
pub use file::GeneratedFile;
// Fundamental types
pub use types::{Column, SqlType, TableSchema, TargetFormat};
