//! Rendered output tests for the TypeScript target.

use std::{fs, path::Path};

use rusqlite::Connection;
use tempfile::TempDir;
use typecast_catalog::SqliteCatalog;
use typecast_codegen::write_all;
use typecast_codegen_typescript::{Generator, TargetCodegen};
use typecast_core::{Column, SqlType, TableSchema};

fn books() -> TableSchema {
    TableSchema::new(
        "books",
        vec![
            Column::new("id", SqlType::Integer, true),
            Column::new("title", SqlType::Text, true),
            Column::new("rating", SqlType::Real, false),
        ],
    )
}

#[test]
fn test_render_books_interface() {
    let output = Generator.render(&books());

    let expected = concat!(
        "\n",
        "export interface Books {\n",
        "\tid: number;\n",
        "\ttitle: string;\n",
        "\trating?: number;\n",
        "\n",
        "}\n",
        "\n",
        "export type FieldNameType = 'id'|'title'|'rating';\n",
        "\n",
        "export const FIELD_NAMES: readonly FieldNameType[] = Object.freeze(['id', 'title', 'rating']);\n",
        "export const RESOURCE_NAME = 'books';\n",
        "\n",
        "export const FieldNameSet: ReadonlySet<FieldNameType> = Object.freeze(new Set(FIELD_NAMES));\n",
        "\n",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_optional_marker_goes_on_the_field_name() {
    let output = Generator.render(&books());

    assert!(output.contains("\trating?: number;\n"));
    assert!(output.contains("\tid: number;\n"));
    assert!(!output.contains("id?:"));
}

#[test]
fn test_field_name_union_for_two_columns() {
    let table = TableSchema::new(
        "notes",
        vec![
            Column::new("id", SqlType::Integer, true),
            Column::new("name", SqlType::Text, true),
        ],
    );

    let output = Generator.render(&table);

    assert!(output.contains("export type FieldNameType = 'id'|'name';"));
    assert!(output.contains("Object.freeze(['id', 'name']);"));
}

#[test]
fn test_type_name_is_pascal_cased() {
    let table = TableSchema::new(
        "user_account",
        vec![Column::new("id", SqlType::Integer, true)],
    );

    let file = Generator.render_file(&table);

    // The file keeps the raw table name; only the type is re-cased.
    assert_eq!(file.relative_path(), Path::new("user_account.ts"));
    assert!(file.contents().contains("export interface UserAccount {"));
    assert!(
        file.contents()
            .contains("export const RESOURCE_NAME = 'user_account';")
    );
}

#[test]
fn test_zero_column_table_renders_never_union() {
    let table = TableSchema::new("empty", vec![]);

    let output = Generator.render(&table);

    assert!(output.contains("export interface Empty {\n\n}"));
    assert!(output.contains("export type FieldNameType = never;"));
    assert!(output.contains("Object.freeze([]);"));
}

#[test]
fn test_generate_from_sqlite_database() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE books (id INTEGER NOT NULL, title TEXT NOT NULL, rating REAL);",
    )
    .unwrap();
    let catalog = SqliteCatalog::new(conn);
    let temp = TempDir::new().unwrap();

    let report = write_all(&catalog, &Generator, temp.path()).unwrap();

    assert_eq!(report.written, vec![temp.path().join("books.ts")]);
    let output = fs::read_to_string(temp.path().join("books.ts")).unwrap();
    assert_eq!(output, Generator.render(&books()));
}
