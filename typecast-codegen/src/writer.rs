//! Write orchestration: catalog in, definition files out.

use std::path::{Path, PathBuf};

use typecast_core::{Catalog, GeneratedFile, Result, TableSchema};

use crate::traits::TargetCodegen;

/// Paths written by a [`write_all`] run, in table order.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
}

/// Render every table in the catalog without touching disk.
///
/// The preview path for dry runs; file order follows the catalog listing.
pub fn render_all(
    catalog: &impl Catalog,
    target: &impl TargetCodegen,
) -> Result<Vec<GeneratedFile>> {
    let mut files = Vec::new();
    for table in catalog.list_tables()? {
        let columns = catalog.columns_of(&table)?;
        files.push(target.render_file(&TableSchema::new(table, columns)));
    }
    Ok(files)
}

/// Generate one definition file per table into `destination`.
///
/// Tables are processed in listing order, each read, rendered, and written
/// before the next. Existing files are overwritten; the destination folder
/// must already exist. The first failure aborts the run, and files written
/// before it stay in place (the destination holds regenerable output only).
pub fn write_all(
    catalog: &impl Catalog,
    target: &impl TargetCodegen,
    destination: &Path,
) -> Result<WriteReport> {
    let mut report = WriteReport::default();
    for table in catalog.list_tables()? {
        let columns = catalog.columns_of(&table)?;
        let file = target.render_file(&TableSchema::new(table, columns));
        report.written.push(file.write_to(destination)?);
    }
    Ok(report)
}
