//! Catalog implementations for the typecast schema generator.
//!
//! [`SqliteCatalog`] reads table metadata from a SQLite database file;
//! [`MemoryCatalog`] serves canned schemas for tests and demos.

mod memory;
mod sqlite;

pub use memory::MemoryCatalog;
pub use sqlite::SqliteCatalog;
