//! `myos init` command - create a new store
//!
//! Idempotent: running it again keeps existing notes and config.

use std::path::Path;

use crate::cli::paths::resolve_against;
use crate::cli::{Cli, InitArgs, OutputFormat};
use crate::commands::format::print_json;
use myos_core::error::Result;
use myos_core::store::{InitOptions, Store};

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path, args: &InitArgs) -> Result<()> {
    let options = InitOptions {
        backend: args.backend,
        default_note_type: args.default_type,
    };

    let store = match cli.store.as_ref() {
        Some(path) => Store::init_at(&resolve_against(root, path), options)?,
        None => Store::init(root, options)?,
    };

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "status": "ok",
            "store": store.root().display().to_string(),
            "backend": store.backend_kind(),
            "notes": store.notes().len(),
        }))?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Initialized myos store at {} (backend: {})",
                    store.root().display(),
                    store.backend_kind()
                );
            }
        }
    }

    Ok(())
}
