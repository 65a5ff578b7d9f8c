//! `myos link` / `myos unlink` commands
//!
//! Linking requires both notes to exist. Unlinking only requires the source,
//! so edges left dangling by a delete can still be removed.

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::print_json;
use myos_core::bail_usage;
use myos_core::error::{MyosError, Result};
use myos_core::note::Note;
use myos_core::store::Store;

fn report(cli: &Cli, note: &Note, changed: bool, message: String) -> Result<()> {
    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "changed": changed,
            "note": note,
        })),
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{}", message);
            }
            Ok(())
        }
    }
}

/// Execute the link command
pub fn execute_link(cli: &Cli, store: &mut Store, from: &str, to: &str) -> Result<()> {
    if from == to {
        bail_usage!("a note cannot link to itself");
    }
    store.require(from)?;
    store.require(to)?;

    let already = store.get(from).is_some_and(|n| n.links_to(to));
    let note = store
        .link(from, to)?
        .ok_or_else(|| MyosError::not_found(from))?;

    let message = if already {
        format!("{} already links to {}", from, to)
    } else {
        format!("Linked {} -> {}", from, to)
    };
    report(cli, &note, !already, message)
}

/// Execute the unlink command
pub fn execute_unlink(cli: &Cli, store: &mut Store, from: &str, to: &str) -> Result<()> {
    let linked = store.require(from)?.links_to(to);
    let note = store
        .unlink(from, to)?
        .ok_or_else(|| MyosError::not_found(from))?;

    let message = if linked {
        format!("Unlinked {} -> {}", from, to)
    } else {
        format!("{} does not link to {}", from, to)
    };
    report(cli, &note, linked, message)
}
