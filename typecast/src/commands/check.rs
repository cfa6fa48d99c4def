use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};
use typecast_catalog::SqliteCatalog;
use typecast_core::{Catalog, TargetFormat};

use super::resolve_conversion;

#[derive(Args)]
pub struct CheckCommand {
    /// SQLite database to introspect (overrides typecast.toml)
    #[arg(short, long)]
    pub db: Option<PathBuf>,

    /// Destination folder for generated files (overrides typecast.toml)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Target format: typescript or rust (overrides typecast.toml)
    #[arg(short, long)]
    pub target: Option<TargetFormat>,

    /// Path to typecast.toml (defaults to ./typecast.toml)
    #[arg(short, long, default_value = "typecast.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let (database, output, target) = resolve_conversion(
            &self.config,
            self.db.clone(),
            self.out.clone(),
            self.target,
        );

        if !database.is_file() {
            bail!("SQLite database not found: {}", database.display());
        }
        if !output.is_dir() {
            bail!("destination folder not found: {}", output.display());
        }

        let catalog = SqliteCatalog::open(&database).wrap_err("Failed to open database")?;

        // Describing every table surfaces unsupported column types now
        // instead of midway through a real run.
        let tables = catalog.list_tables()?;
        let mut column_count = 0;
        for table in &tables {
            column_count += catalog.columns_of(table)?.len();
        }

        println!(
            "ok: {} tables ({} columns) ready to cast to {}",
            tables.len(),
            column_count,
            target
        );

        Ok(())
    }
}
