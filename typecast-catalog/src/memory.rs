//! In-memory catalog for tests and demos.

use std::collections::BTreeMap;

use typecast_core::{Catalog, Column, Error, Result};

/// A [`Catalog`] backed by a plain map, listing tables in sorted order.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    tables: BTreeMap<String, Vec<Column>>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table, replacing any existing table of the same name.
    pub fn with_table(mut self, name: impl Into<String>, columns: Vec<Column>) -> Self {
        self.tables.insert(name.into(), columns);
        self
    }
}

impl Catalog for MemoryCatalog {
    fn list_tables(&self) -> Result<Vec<String>> {
        Ok(self.tables.keys().cloned().collect())
    }

    fn columns_of(&self, table: &str) -> Result<Vec<Column>> {
        self.tables
            .get(table)
            .cloned()
            .ok_or_else(|| Error::TableNotFound {
                table: table.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use typecast_core::SqlType;

    use super::*;

    #[test]
    fn test_listing_is_sorted() {
        let catalog = MemoryCatalog::new()
            .with_table("zoo", vec![Column::new("id", SqlType::Integer, true)])
            .with_table("authors", vec![Column::new("id", SqlType::Integer, true)]);

        assert_eq!(catalog.list_tables().unwrap(), vec!["authors", "zoo"]);
    }

    #[test]
    fn test_missing_table() {
        let catalog = MemoryCatalog::new();

        assert!(matches!(
            catalog.columns_of("ghost"),
            Err(Error::TableNotFound { .. })
        ));
    }
}
