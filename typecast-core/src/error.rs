use std::path::PathBuf;

use thiserror::Error;

/// Result type for typecast operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by catalog reads, rendering, and writing.
///
/// Every variant is fatal to the run that raised it; nothing is retried
/// or silently defaulted.
#[derive(Debug, Error)]
pub enum Error {
    /// A declared column type outside the supported set.
    #[error(
        "unsupported SQL type '{sql_type}' in column '{table}.{column}' (supported: TEXT, INTEGER, REAL)"
    )]
    UnsupportedType {
        table: String,
        column: String,
        sql_type: String,
    },

    /// A target format other than typescript or rust.
    #[error("unsupported target format '{format}' (supported: typescript, rust)")]
    UnsupportedFormat { format: String },

    /// The table does not exist, or vanished between listing and describing it.
    #[error("table '{table}' not found in the catalog")]
    TableNotFound { table: String },

    /// Writing a generated file failed.
    #[error("failed to write '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying database driver reported a failure.
    #[error("catalog query failed: {message}")]
    Catalog { message: String },
}
