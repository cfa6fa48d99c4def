use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A rendered file awaiting write.
///
/// The path is relative to a destination folder chosen at write time.
/// Writes always overwrite, and the destination folder must already exist;
/// a missing folder surfaces as [`Error::Io`](crate::Error::Io).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    relative_path: PathBuf,
    contents: String,
}

impl GeneratedFile {
    /// Create a new generated file with a destination-relative path.
    pub fn new(relative_path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            contents: contents.into(),
        }
    }

    /// The path relative to the destination folder.
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// The rendered content.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Write the file under `base`, overwriting any existing file.
    ///
    /// Returns the full path written.
    pub fn write_to(&self, base: &Path) -> Result<PathBuf> {
        let path = base.join(&self.relative_path);
        std::fs::write(&path, &self.contents).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
