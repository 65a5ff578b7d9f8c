//! `myos pin`, `myos archive` and `myos delete`

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::print_json;
use myos_core::error::{MyosError, Result};
use myos_core::note::Note;
use myos_core::store::Store;

fn print_note(cli: &Cli, note: &Note, message: String) -> Result<()> {
    match cli.format {
        OutputFormat::Json => print_json(note),
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{}", message);
            }
            Ok(())
        }
    }
}

/// Toggle the pinned flag
pub fn execute_pin(cli: &Cli, store: &mut Store, id: &str) -> Result<()> {
    let note = store
        .toggle_pin(id)?
        .ok_or_else(|| MyosError::not_found(id))?;
    let verb = if note.pinned { "Pinned" } else { "Unpinned" };
    let message = format!("{} {}", verb, note.id);
    print_note(cli, &note, message)
}

/// Toggle the archived flag
pub fn execute_archive(cli: &Cli, store: &mut Store, id: &str) -> Result<()> {
    let note = store
        .toggle_archive(id)?
        .ok_or_else(|| MyosError::not_found(id))?;
    let verb = if note.archived {
        "Archived"
    } else {
        "Restored"
    };
    let message = format!("{} {}", verb, note.id);
    print_note(cli, &note, message)
}

/// Delete a note. Links pointing at it stay behind as dangling edges.
pub fn execute_delete(cli: &Cli, store: &mut Store, id: &str) -> Result<()> {
    let note = store.delete(id)?.ok_or_else(|| MyosError::not_found(id))?;
    let message = format!("Deleted {}  {}", note.id, note.display_title());
    print_note(cli, &note, message)
}
