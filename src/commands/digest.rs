//! `myos digest` command - weekly review

use crate::cli::{Cli, DigestArgs, OutputFormat};
use crate::commands::format::{enriched_line, note_line, print_json};
use crate::commands::resurface::print_scored;
use myos_core::bail_usage;
use myos_core::error::Result;
use myos_core::note::now_millis;
use myos_core::similarity::{digest, Digest};
use myos_core::store::Store;

/// Execute the digest command
pub fn execute(cli: &Cli, store: &mut Store, args: &DigestArgs) -> Result<()> {
    let mut config = store.config().digest.clone();
    if let Some(days) = args.days {
        if days == 0 {
            bail_usage!("--days must be at least 1");
        }
        config.window_days = days;
    }

    let view = store.enriched();
    let report = digest(&view, now_millis(), &config);

    match cli.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Human => print_human(&report),
    }

    Ok(())
}

fn print_human(report: &Digest<'_>) {
    println!(
        "Last {} days: {} note{}",
        report.window_days,
        report.window.len(),
        if report.window.len() == 1 { "" } else { "s" }
    );
    if !report.counts_by_type.is_empty() {
        let counts: Vec<String> = report
            .counts_by_type
            .iter()
            .map(|c| format!("{} {}", c.count, c.note_type))
            .collect();
        println!("  {}", counts.join(", "));
    }

    if !report.window.is_empty() {
        println!();
        println!("Captured:");
        for note in &report.window {
            println!("  {}", note_line(&note.note));
        }
    }

    if !report.keywords.is_empty() {
        println!();
        println!("Themes: {}", report.keywords.join(", "));
    }

    let connected: Vec<_> = report
        .top_connected
        .iter()
        .filter(|n| n.is_connected())
        .collect();
    if !connected.is_empty() {
        println!();
        println!("Most connected:");
        for note in connected {
            println!("  {}", enriched_line(note));
        }
    }

    if !report.resurfacing.is_empty() {
        println!();
        println!("Worth revisiting:");
        print_scored(&report.resurfacing, false);
    }
}
