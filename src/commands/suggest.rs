//! `myos suggest` command - link suggestions for an existing note

use serde::Serialize;

use crate::cli::{Cli, OutputFormat, SuggestArgs};
use crate::commands::format::{note_line, print_json};
use myos_core::error::{MyosError, Result};
use myos_core::graph::{find, EnrichedNote};
use myos_core::similarity::{search_link_targets, suggest_links, LinkContext};
use myos_core::store::Store;

#[derive(Serialize)]
struct Suggestion<'a> {
    #[serde(flatten)]
    note: &'a EnrichedNote,
    already_linked: bool,
}

/// Execute the suggest command
pub fn execute(cli: &Cli, store: &mut Store, args: &SuggestArgs) -> Result<()> {
    let limit = args
        .limit
        .unwrap_or(store.config().digest.suggestion_limit);
    let view = store.enriched();
    let source = find(&view, &args.id).ok_or_else(|| MyosError::not_found(&args.id))?;

    let candidates = match args.query.as_deref() {
        Some(query) => search_link_targets(source.id(), query, &view, limit),
        None => suggest_links(&LinkContext::from_note(&source.note), &view, limit),
    };

    let suggestions: Vec<Suggestion<'_>> = candidates
        .into_iter()
        .map(|note| Suggestion {
            already_linked: source.note.links_to(note.id()),
            note,
        })
        .collect();

    match cli.format {
        OutputFormat::Json => print_json(&suggestions)?,
        OutputFormat::Human => {
            if suggestions.is_empty() {
                if !cli.quiet {
                    println!("No suggestions for {}", args.id);
                }
            } else {
                for s in &suggestions {
                    let marker = if s.already_linked { "  (linked)" } else { "" };
                    println!("{}{}", note_line(&s.note.note), marker);
                }
            }
        }
    }

    Ok(())
}
