//! The typecast.toml conversion file.
//!
//! Supplies the defaults for `cast`, `tables`, and `check` when the
//! corresponding CLI flags are not given.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;
use typecast_core::TargetFormat;

/// Result type for config loading (boxed, the parse variant carries the
/// full source text).
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a typecast.toml or pass --db, --out and --target explicitly"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse typecast.toml")]
    #[diagnostic(code(typecast::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

/// The `[conversion]` table of typecast.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct Conversion {
    /// SQLite database to introspect.
    pub database: PathBuf,
    /// Destination folder for generated files.
    pub output: PathBuf,
    /// Output format: "typescript" or "rust".
    pub target: TargetFormat,
}

/// Parsed typecast.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub conversion: Conversion,
}

impl Config {
    /// Read and parse the config file at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| {
            let span = source.span().map(SourceSpan::from);
            Box::new(Error::Parse {
                src: NamedSource::new(filename, content.to_string()),
                span,
                source,
            })
        })
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "typecast.toml")
    }
}
