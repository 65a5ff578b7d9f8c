//! `myos create` command - capture a new note
//!
//! Content comes from the positional argument, or stdin when omitted.
//! Link targets must already exist.

use std::io::{self, IsTerminal};

use tracing::debug;

use crate::cli::{Cli, CreateArgs, OutputFormat};
use crate::commands::format::print_json;
use myos_core::bail_usage;
use myos_core::error::{MyosError, Result};
use myos_core::note::NoteDraft;
use myos_core::store::Store;

fn read_content(args: &CreateArgs) -> Result<String> {
    if let Some(content) = &args.content {
        return Ok(content.clone());
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail_usage!("no content given; pass it as an argument or pipe it on stdin");
    }
    io::read_to_string(stdin).map_err(|e| MyosError::io_operation("read", "stdin", e))
}

/// Execute the create command
pub fn execute(cli: &Cli, store: &mut Store, args: &CreateArgs) -> Result<()> {
    let content = read_content(args)?;
    let has_title = args.title.as_deref().is_some_and(|t| !t.trim().is_empty());
    if content.trim().is_empty() && !has_title {
        bail_usage!("note is empty; give it content or a title");
    }

    for target in &args.link {
        store.require(target)?;
    }

    let mut draft = NoteDraft::new(content)
        .with_tags(args.tag.iter().cloned())
        .with_links(args.link.iter().cloned());
    draft.title = args.title.clone();
    draft.note_type = args.r#type;
    draft.mood = args.mood;
    draft.source = args.source.clone();

    let note = store.create(draft)?;
    debug!(note_id = %note.id, "create_note");

    match cli.format {
        OutputFormat::Json => print_json(&note)?,
        OutputFormat::Human => {
            if cli.quiet {
                println!("{}", note.id);
            } else {
                println!("Created {}  {}", note.id, note.display_title());
            }
        }
    }

    Ok(())
}
