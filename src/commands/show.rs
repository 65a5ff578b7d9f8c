//! `myos show` command - a note with its outgoing links and backlinks

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{format_timestamp, print_json};
use myos_core::error::{MyosError, Result};
use myos_core::graph::{find, EnrichedNote};
use myos_core::store::Store;

#[derive(Serialize)]
struct LinkEntry<'a> {
    id: &'a str,
    title: Option<String>,
    exists: bool,
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    note: &'a EnrichedNote,
    links: Vec<LinkEntry<'a>>,
    backlinks: Vec<LinkEntry<'a>>,
}

fn entries<'a>(view: &'a [EnrichedNote], ids: &'a [String]) -> Vec<LinkEntry<'a>> {
    ids.iter()
        .map(|id| {
            let target = find(view, id);
            LinkEntry {
                id,
                title: target.map(|t| t.note.display_title()),
                exists: target.is_some(),
            }
        })
        .collect()
}

/// Execute the show command
pub fn execute(cli: &Cli, store: &mut Store, id: &str) -> Result<()> {
    let view = store.enriched();
    let note = find(&view, id).ok_or_else(|| MyosError::not_found(id))?;

    let output = ShowOutput {
        note,
        links: entries(&view, &note.note.links),
        backlinks: entries(&view, &note.backlinks),
    };

    match cli.format {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Human => print_human(&output),
    }

    Ok(())
}

fn print_human(output: &ShowOutput<'_>) {
    let note = &output.note.note;
    println!("{}", note.display_title());
    println!("id:      {}", note.id);
    println!("type:    {}", note.note_type);
    if !note.tags.is_empty() {
        println!("tags:    {}", note.tags.join(", "));
    }
    if let Some(mood) = note.mood {
        println!("mood:    {}", mood);
    }
    if let Some(source) = &note.source {
        println!("source:  {}", source);
    }
    println!("created: {}", format_timestamp(note.created_at));
    println!("updated: {}", format_timestamp(note.updated_at));
    if note.pinned || note.archived {
        let mut flags = Vec::new();
        if note.pinned {
            flags.push("pinned");
        }
        if note.archived {
            flags.push("archived");
        }
        println!("flags:   {}", flags.join(", "));
    }

    println!();
    println!("{}", note.content);

    if !output.links.is_empty() {
        println!();
        println!("Links:");
        for entry in &output.links {
            match &entry.title {
                Some(title) => println!("  -> {}  {}", entry.id, title),
                None => println!("  -> {}  (missing)", entry.id),
            }
        }
    }

    if !output.backlinks.is_empty() {
        println!();
        println!("Backlinks:");
        for entry in &output.backlinks {
            println!("  <- {}  {}", entry.id, entry.title.as_deref().unwrap_or(""));
        }
    }
}
