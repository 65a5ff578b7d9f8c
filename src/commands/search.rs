//! `myos search` command - fuzzy search over titles, content and tags

use tracing::debug;

use crate::cli::{Cli, OutputFormat, SearchArgs};
use crate::commands::format::{enriched_line, print_json};
use myos_core::error::Result;
use myos_core::graph::EnrichedNote;
use myos_core::note::now_millis;
use myos_core::query::{NoteFilter, SortOrder};
use myos_core::store::Store;

/// Execute the search command. A blank query matches every note the other
/// filters let through.
pub fn execute(cli: &Cli, store: &mut Store, args: &SearchArgs) -> Result<()> {
    let now = now_millis();
    let view = store.enriched();

    let filter = NoteFilter::new()
        .with_types(args.r#type.clone())
        .with_tags(args.tag.clone())
        .with_query(args.query.clone());

    let mut results: Vec<&EnrichedNote> = filter.apply(&view, now, SortOrder::Newest);
    if args.include_archived {
        results.extend(filter.with_archived(true).apply(&view, now, SortOrder::Newest));
        SortOrder::Newest.sort(&mut results);
    }
    if let Some(limit) = args.limit {
        results.truncate(limit);
    }

    debug!(query = %args.query, result_count = results.len(), "search");

    match cli.format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Human => {
            if results.is_empty() {
                if !cli.quiet {
                    println!("No results found for '{}'", args.query);
                }
            } else {
                for note in &results {
                    println!("{}", enriched_line(note));
                }
            }
        }
    }

    Ok(())
}
