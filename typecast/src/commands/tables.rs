use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};
use typecast_catalog::SqliteCatalog;
use typecast_core::{Catalog, Column, TableSchema};

use super::UnwrapOrExit;
use crate::config::Config;

#[derive(Args)]
pub struct TablesCommand {
    /// SQLite database to introspect (overrides typecast.toml)
    #[arg(short, long)]
    pub db: Option<PathBuf>,

    /// Path to typecast.toml (defaults to ./typecast.toml)
    #[arg(short, long, default_value = "typecast.toml")]
    pub config: PathBuf,

    /// Emit the schema as JSON
    #[arg(long)]
    pub json: bool,
}

impl TablesCommand {
    pub fn run(&self) -> Result<()> {
        let database = self
            .db
            .clone()
            .unwrap_or_else(|| Config::open(&self.config).unwrap_or_exit().conversion.database);

        if !database.is_file() {
            bail!("SQLite database not found: {}", database.display());
        }

        let catalog = SqliteCatalog::open(&database).wrap_err("Failed to open database")?;

        let mut schemas = Vec::new();
        for table in catalog.list_tables()? {
            let columns = catalog.columns_of(&table)?;
            schemas.push(TableSchema::new(table, columns));
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&schemas)?);
            return Ok(());
        }

        if schemas.is_empty() {
            println!("No tables found");
            return Ok(());
        }

        for schema in &schemas {
            println!("{} ({} columns)", schema.table_name, schema.columns.len());
            for column in &schema.columns {
                println!("{}", column_line(column));
            }
        }

        Ok(())
    }
}

/// One listing line per column. The label reflects the normalized
/// `required` flag; a primary key column counts as required even without
/// an explicit NOT NULL in its DDL.
fn column_line(column: &Column) -> String {
    let required = if column.required { " required" } else { "" };
    format!("  {} {}{}", column.name, column.sql_type, required)
}

#[cfg(test)]
mod tests {
    use typecast_core::SqlType;

    use super::*;

    #[test]
    fn test_column_line_labels_required_columns() {
        let id = Column::new("id", SqlType::Integer, true);
        let bio = Column::new("bio", SqlType::Text, false);

        assert_eq!(column_line(&id), "  id INTEGER required");
        assert_eq!(column_line(&bio), "  bio TEXT");
    }
}
