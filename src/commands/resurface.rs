//! `myos resurface` command - older notes related to recent activity

use crate::cli::{Cli, OutputFormat, ResurfaceArgs};
use crate::commands::format::{note_line, print_json};
use myos_core::error::Result;
use myos_core::similarity::{dashboard_resurfacing, ScoredNote};
use myos_core::store::Store;

/// Execute the resurface command
pub fn execute(cli: &Cli, store: &mut Store, args: &ResurfaceArgs) -> Result<()> {
    let mut config = store.config().digest.clone();
    if let Some(limit) = args.limit {
        config.resurface_limit = limit;
    }

    let view = store.enriched();
    let scored = dashboard_resurfacing(&view, &config);

    match cli.format {
        OutputFormat::Json => print_json(&scored)?,
        OutputFormat::Human => {
            if scored.is_empty() {
                if !cli.quiet {
                    println!("Nothing to resurface yet");
                }
            } else {
                print_scored(&scored, args.explain);
            }
        }
    }

    Ok(())
}

/// One line per scored note, optionally with the score breakdown
pub fn print_scored(scored: &[ScoredNote<'_>], explain: bool) {
    for s in scored {
        println!("{}  score {}", note_line(&s.note.note), s.score);
        if explain {
            println!(
                "    keywords {}, type {}, tags {}",
                s.breakdown.keywords, s.breakdown.type_affinity, s.breakdown.shared_tags
            );
        }
    }
}
