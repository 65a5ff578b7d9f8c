//! `myos edit` command - change fields of an existing note

use crate::cli::{Cli, EditArgs, OutputFormat};
use crate::commands::format::print_json;
use myos_core::bail_usage;
use myos_core::error::{MyosError, Result};
use myos_core::note::NotePatch;
use myos_core::store::Store;

fn patch_from_args(args: &EditArgs) -> NotePatch {
    let tags = if args.clear_tags {
        Some(Vec::new())
    } else if !args.tag.is_empty() {
        Some(args.tag.clone())
    } else {
        None
    };

    let mood = if args.clear_mood {
        Some(None)
    } else {
        args.mood.map(Some)
    };

    let source = if args.clear_source {
        Some(None)
    } else {
        args.source.clone().map(Some)
    };

    NotePatch {
        title: args.title.clone(),
        content: args.content.clone(),
        note_type: args.r#type,
        tags,
        mood,
        source,
        ..NotePatch::default()
    }
}

/// Execute the edit command
pub fn execute(cli: &Cli, store: &mut Store, args: &EditArgs) -> Result<()> {
    let patch = patch_from_args(args);
    if patch.is_empty() {
        bail_usage!("nothing to change; pass at least one field flag");
    }

    let note = store
        .update(&args.id, patch)?
        .ok_or_else(|| MyosError::not_found(&args.id))?;

    match cli.format {
        OutputFormat::Json => print_json(&note)?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Updated {}  {}", note.id, note.display_title());
            }
        }
    }

    Ok(())
}
