//! SQLite-backed catalog, built on rusqlite (bundled SQLite).

use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use typecast_core::{Catalog, Column, Error, Result, SqlType};

/// User tables only; SQLite's own bookkeeping tables are prefixed `sqlite_`.
const LIST_TABLES_SQL: &str =
    "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name";

/// Column metadata in declaration order. `notnull` needs quoting because
/// NOTNULL is a SQLite keyword.
const TABLE_INFO_SQL: &str =
    "SELECT name, type, \"notnull\", pk FROM pragma_table_info(?1) ORDER BY cid";

/// A [`Catalog`] over a SQLite database.
///
/// The file handle is opened read-only; the generator only ever queries
/// catalog metadata.
#[derive(Debug)]
pub struct SqliteCatalog {
    conn: Connection,
}

impl SqliteCatalog {
    /// Open the database at the given path, read-only.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| Error::Catalog {
                message: e.to_string(),
            })?;
        Ok(Self { conn })
    }

    /// Wrap an existing connection (useful for in-memory databases in tests).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl Catalog for SqliteCatalog {
    fn list_tables(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(LIST_TABLES_SQL).map_err(query_error)?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(query_error)?;

        let mut tables = Vec::new();
        for row in rows {
            tables.push(row.map_err(query_error)?);
        }
        Ok(tables)
    }

    fn columns_of(&self, table: &str) -> Result<Vec<Column>> {
        let mut stmt = self.conn.prepare(TABLE_INFO_SQL).map_err(query_error)?;
        let rows = stmt
            .query_map([table], |row| {
                let name: String = row.get(0)?;
                let declared: String = row.get(1)?;
                let not_null: bool = row.get(2)?;
                let pk: i64 = row.get(3)?;
                Ok((name, declared, not_null || pk > 0))
            })
            .map_err(query_error)?;

        let mut columns = Vec::new();
        for row in rows {
            let (name, declared, required) = row.map_err(query_error)?;
            let sql_type = SqlType::parse(&declared).ok_or_else(|| Error::UnsupportedType {
                table: table.to_string(),
                column: name.clone(),
                sql_type: declared.clone(),
            })?;
            columns.push(Column::new(name, sql_type, required));
        }

        // Zero rows means the table does not exist; a real SQLite table
        // always has at least one column.
        if columns.is_empty() {
            return Err(Error::TableNotFound {
                table: table.to_string(),
            });
        }
        Ok(columns)
    }
}

fn query_error(e: rusqlite::Error) -> Error {
    Error::Catalog {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with(ddl: &str) -> SqliteCatalog {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(ddl).unwrap();
        SqliteCatalog::new(conn)
    }

    #[test]
    fn test_list_tables_sorted() {
        let catalog = catalog_with(
            "CREATE TABLE zoo (id INTEGER PRIMARY KEY);
             CREATE TABLE authors (id INTEGER PRIMARY KEY);
             CREATE TABLE books (id INTEGER PRIMARY KEY);",
        );

        assert_eq!(
            catalog.list_tables().unwrap(),
            vec!["authors", "books", "zoo"]
        );
    }

    #[test]
    fn test_list_tables_excludes_sqlite_internals() {
        // AUTOINCREMENT makes SQLite create its sqlite_sequence table.
        let catalog = catalog_with(
            "CREATE TABLE logs (id INTEGER PRIMARY KEY AUTOINCREMENT, message TEXT NOT NULL);",
        );

        assert_eq!(catalog.list_tables().unwrap(), vec!["logs"]);
    }

    #[test]
    fn test_list_tables_empty_database() {
        let catalog = SqliteCatalog::new(Connection::open_in_memory().unwrap());

        assert!(catalog.list_tables().unwrap().is_empty());
    }

    #[test]
    fn test_columns_in_declaration_order() {
        let catalog = catalog_with(
            "CREATE TABLE books (id INTEGER NOT NULL, title TEXT NOT NULL, rating REAL);",
        );

        let columns = catalog.columns_of("books").unwrap();

        assert_eq!(
            columns,
            vec![
                Column::new("id", SqlType::Integer, true),
                Column::new("title", SqlType::Text, true),
                Column::new("rating", SqlType::Real, false),
            ]
        );
    }

    #[test]
    fn test_primary_key_is_required() {
        // No explicit NOT NULL on the key; the pk flag alone makes it
        // required.
        let catalog = catalog_with("CREATE TABLE users (id INTEGER PRIMARY KEY, bio TEXT);");

        let columns = catalog.columns_of("users").unwrap();

        assert!(columns[0].required);
        assert!(!columns[1].required);
    }

    #[test]
    fn test_composite_primary_key_is_required() {
        let catalog = catalog_with(
            "CREATE TABLE shelves (room TEXT, slot INTEGER, label TEXT, PRIMARY KEY (room, slot));",
        );

        let columns = catalog.columns_of("shelves").unwrap();

        assert!(columns[0].required);
        assert!(columns[1].required);
        assert!(!columns[2].required);
    }

    #[test]
    fn test_missing_table() {
        let catalog = catalog_with("CREATE TABLE books (id INTEGER PRIMARY KEY);");

        let err = catalog.columns_of("ghost").unwrap_err();

        assert!(matches!(err, Error::TableNotFound { .. }));
    }

    #[test]
    fn test_unsupported_declared_type() {
        let catalog = catalog_with("CREATE TABLE books (id INTEGER PRIMARY KEY, cover BLOB);");

        match catalog.columns_of("books").unwrap_err() {
            Error::UnsupportedType {
                table,
                column,
                sql_type,
            } => {
                assert_eq!(table, "books");
                assert_eq!(column, "cover");
                assert_eq!(sql_type, "BLOB");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_open_missing_file_fails() {
        let err = SqliteCatalog::open(Path::new("/nonexistent/app.db")).unwrap_err();

        assert!(matches!(err, Error::Catalog { .. }));
    }
}
