//! `myos list` command

use tracing::debug;

use crate::cli::{Cli, ListArgs, OutputFormat};
use crate::commands::format::{enriched_line, print_json};
use myos_core::error::Result;
use myos_core::note::now_millis;
use myos_core::query::{local_day_bounds, NoteFilter};
use myos_core::store::Store;

/// Execute the list command
pub fn execute(cli: &Cli, store: &mut Store, args: &ListArgs) -> Result<()> {
    let now = now_millis();
    let view = store.enriched();

    let filter = NoteFilter::new()
        .with_types(args.r#type.clone())
        .with_tags(args.tag.clone())
        .with_date_range(args.range)
        .with_pinned_only(args.pinned)
        .with_archived(args.archived)
        .with_query(args.query.clone().unwrap_or_default());

    let mut notes = filter.apply(&view, now, args.sort);

    if args.today {
        let (start, end) = local_day_bounds(now);
        notes.retain(|n| n.note.created_at >= start && n.note.created_at <= end);
    }
    if args.connected {
        notes.retain(|n| n.is_connected());
    }
    if let Some(limit) = args.limit {
        notes.truncate(limit);
    }

    debug!(result_count = notes.len(), "list_notes");

    match cli.format {
        OutputFormat::Json => print_json(&notes)?,
        OutputFormat::Human => {
            if notes.is_empty() {
                if !cli.quiet {
                    println!("No notes found");
                }
            } else {
                for note in &notes {
                    println!("{}", enriched_line(note));
                }
            }
        }
    }

    Ok(())
}
