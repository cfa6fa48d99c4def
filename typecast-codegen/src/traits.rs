//! Format-agnostic code generation traits.

use typecast_core::{GeneratedFile, SqlType, TableSchema, TargetFormat};

/// Trait for format-specific definition generators.
///
/// Implement this trait to add support for emitting table definitions in a
/// new target format.
pub trait TargetCodegen {
    /// The output format this generator produces.
    fn format(&self) -> TargetFormat;

    /// Render the definition file body for one table.
    ///
    /// Pure; performs no I/O. Column order in the output follows
    /// `table.columns`.
    fn render(&self, table: &TableSchema) -> String;

    /// Render one table into a file named `<table>.<extension>`.
    fn render_file(&self, table: &TableSchema) -> GeneratedFile {
        let path = format!("{}.{}", table.table_name, self.format().extension());
        GeneratedFile::new(path, self.render(table))
    }
}

/// Trait for mapping column types to format-specific type tokens.
///
/// The mapping is total: [`SqlType`] is closed, and unrecognized declared
/// types never get past the schema reader. Optionality is applied by the
/// generator, since it is field-level in TypeScript (`name?:`) but
/// type-level in Rust (`Option<T>`).
pub trait TypeMapper {
    /// The target format this mapper serves.
    fn format(&self) -> TargetFormat;

    /// Map a column type to the format's type token.
    fn map_sql_type(&self, sql_type: SqlType) -> &'static str;
}
