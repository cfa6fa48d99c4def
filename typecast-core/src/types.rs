//! Fundamental schema and target-format types.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Column types supported by the generator.
///
/// The catalog reports declared types as strings; only these three are
/// convertible. The schema reader rejects anything else with
/// [`Error::UnsupportedType`](crate::Error::UnsupportedType), so downstream
/// type mapping is total by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SqlType {
    /// TEXT
    Text,
    /// INTEGER
    Integer,
    /// REAL
    Real,
}

impl SqlType {
    /// Match a declared column type against the supported set.
    ///
    /// The match is exact and case-sensitive; `"text"` or `"VARCHAR"` is
    /// not recognized.
    pub fn parse(declared: &str) -> Option<SqlType> {
        match declared {
            "TEXT" => Some(SqlType::Text),
            "INTEGER" => Some(SqlType::Integer),
            "REAL" => Some(SqlType::Real),
            _ => None,
        }
    }

    /// Returns the canonical catalog spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlType::Text => "TEXT",
            SqlType::Integer => "INTEGER",
            SqlType::Real => "REAL",
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supported output formats for generated definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    /// Rust struct definitions
    Rust,
    /// TypeScript interface definitions
    TypeScript,
}

impl TargetFormat {
    /// Returns the format identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetFormat::Rust => "rust",
            TargetFormat::TypeScript => "typescript",
        }
    }

    /// File extension for generated files of this format.
    pub fn extension(&self) -> &'static str {
        match self {
            TargetFormat::Rust => "rs",
            TargetFormat::TypeScript => "ts",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rust" | "rs" => Ok(TargetFormat::Rust),
            "typescript" | "ts" => Ok(TargetFormat::TypeScript),
            _ => Err(Error::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// A single table column, normalized from catalog metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Column name, unchanged from the catalog.
    pub name: String,
    /// Declared SQL type, normalized.
    pub sql_type: SqlType,
    /// True when the column is NOT NULL or part of the primary key.
    pub required: bool,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, sql_type: SqlType, required: bool) -> Self {
        Self {
            name: name.into(),
            sql_type,
            required,
        }
    }
}

/// The full shape of one table, in catalog column order.
///
/// Built fresh from a live catalog read on every run; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    /// Raw table name as listed by the catalog.
    pub table_name: String,
    /// Columns in catalog order, preserved through rendering.
    pub columns: Vec<Column>,
}

impl TableSchema {
    /// Create a new table schema.
    pub fn new(table_name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            table_name: table_name.into(),
            columns,
        }
    }
}
