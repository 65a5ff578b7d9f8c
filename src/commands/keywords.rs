//! `myos keywords` and `myos tags`

use crate::cli::{Cli, KeywordsArgs, OutputFormat};
use crate::commands::format::print_json;
use myos_core::error::Result;
use myos_core::note::{now_millis, Note};
use myos_core::query::all_tags;
use myos_core::similarity::{term_frequencies, KEYWORD_LIMIT};
use myos_core::store::Store;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Execute the keywords command
pub fn execute(cli: &Cli, store: &mut Store, args: &KeywordsArgs) -> Result<()> {
    let cutoff = args
        .days
        .map(|days| now_millis() - i64::from(days) * DAY_MS);

    let notes: Vec<&Note> = store
        .notes()
        .iter()
        .filter(|n| args.include_archived || !n.archived)
        .filter(|n| cutoff.is_none_or(|c| n.created_at >= c))
        .collect();

    let mut terms = term_frequencies(notes.iter().copied());
    terms.truncate(KEYWORD_LIMIT);

    match cli.format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = terms
                .iter()
                .map(|(term, count)| serde_json::json!({ "term": term, "count": count }))
                .collect();
            print_json(&rows)?;
        }
        OutputFormat::Human => {
            if terms.is_empty() {
                if !cli.quiet {
                    println!("No keywords yet");
                }
            } else if args.counts {
                for (term, count) in &terms {
                    println!("{:>4}  {}", count, term);
                }
            } else {
                let words: Vec<&str> = terms.iter().map(|(t, _)| t.as_str()).collect();
                println!("{}", words.join(", "));
            }
        }
    }

    Ok(())
}

/// Execute the tags command
pub fn execute_tags(cli: &Cli, store: &mut Store) -> Result<()> {
    let tags = all_tags(store.notes());

    match cli.format {
        OutputFormat::Json => print_json(&tags)?,
        OutputFormat::Human => {
            if tags.is_empty() {
                if !cli.quiet {
                    println!("No tags yet");
                }
            } else {
                for tag in &tags {
                    println!("{}", tag);
                }
            }
        }
    }

    Ok(())
}
