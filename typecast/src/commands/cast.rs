use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};
use typecast_catalog::SqliteCatalog;
use typecast_codegen::{TargetCodegen, render_all, write_all};
use typecast_codegen_rust::Generator as RustGenerator;
use typecast_codegen_typescript::Generator as TypeScriptGenerator;
use typecast_core::TargetFormat;

use super::resolve_conversion;

#[derive(Args)]
pub struct CastCommand {
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

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl CastCommand {
    /// Run the cast command
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

        let catalog = SqliteCatalog::open(&database).wrap_err("Failed to open database")?;

        if self.dry_run {
            return match target {
                TargetFormat::Rust => Self::run_preview(&catalog, &RustGenerator),
                TargetFormat::TypeScript => Self::run_preview(&catalog, &TypeScriptGenerator),
            };
        }

        if !output.is_dir() {
            bail!("destination folder not found: {}", output.display());
        }

        let report = match target {
            TargetFormat::Rust => write_all(&catalog, &RustGenerator, &output),
            TargetFormat::TypeScript => write_all(&catalog, &TypeScriptGenerator, &output),
        }
        .wrap_err("Failed to generate definitions")?;

        for path in &report.written {
            println!("  + {}", path.display());
        }
        println!("{} files generated", report.written.len());

        Ok(())
    }

    fn run_preview(catalog: &SqliteCatalog, target: &impl TargetCodegen) -> Result<()> {
        let files = render_all(catalog, target).wrap_err("Failed to render definitions")?;

        for file in &files {
            println!("── {} ──", file.relative_path().display());
            println!("{}", file.contents());
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
