//! `myos export` and `myos import`
//!
//! Export writes `myos-export-YYYY-MM-DD.json` into the root (or --output-dir),
//! or prints the document with --stdout. Import merges by id with
//! last-writer-wins on `updatedAt`.

use std::path::Path;

use crate::cli::paths::resolve_against;
use crate::cli::{Cli, ExportArgs, ImportArgs, OutputFormat};
use crate::commands::format::print_json;
use myos_core::error::Result;
use myos_core::store::Store;

/// Execute the export command
pub fn execute_export(cli: &Cli, root: &Path, store: &mut Store, args: &ExportArgs) -> Result<()> {
    if args.stdout {
        println!("{}", store.export()?);
        return Ok(());
    }

    let dir = match args.output_dir.as_ref() {
        Some(dir) => resolve_against(root, dir),
        None => root.to_path_buf(),
    };
    let path = store.export_to(&dir)?;

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "notes": store.notes().len(),
        }))?,
        OutputFormat::Human => {
            if cli.quiet {
                println!("{}", path.display());
            } else {
                println!(
                    "Exported {} notes to {}",
                    store.notes().len(),
                    path.display()
                );
            }
        }
    }

    Ok(())
}

/// Execute the import command
pub fn execute_import(cli: &Cli, root: &Path, store: &mut Store, args: &ImportArgs) -> Result<()> {
    let path = resolve_against(root, &args.file);
    let report = store.import_file(&path)?;

    if let Some(notice) = &report.notice {
        if !cli.quiet {
            eprintln!("{}", notice);
        }
    }

    match cli.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Imported {} notes ({} skipped); collection now has {}",
                    report.received - report.skipped,
                    report.skipped,
                    report.merged_total
                );
            }
        }
    }

    Ok(())
}
