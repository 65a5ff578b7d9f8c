//! Shared output helpers

use chrono::{Local, TimeZone};
use serde::Serialize;

use myos_core::error::Result;
use myos_core::graph::EnrichedNote;
use myos_core::note::Note;

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Milliseconds since epoch as local `YYYY-MM-DD HH:MM`
pub fn format_timestamp(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => ms.to_string(),
    }
}

/// One-line summary: id, title, type, markers and tags
pub fn note_line(note: &Note) -> String {
    let mut line = format!("{}  {} [{}]", note.id, note.display_title(), note.note_type);
    if note.pinned {
        line.push_str(" *pinned");
    }
    if note.archived {
        line.push_str(" (archived)");
    }
    if !note.tags.is_empty() {
        let tags: Vec<String> = note.tags.iter().map(|t| format!("#{}", t)).collect();
        line.push_str("  ");
        line.push_str(&tags.join(" "));
    }
    line
}

/// One-line summary with the link score appended
pub fn enriched_line(note: &EnrichedNote) -> String {
    format!(
        "{}  ({} link{})",
        note_line(&note.note),
        note.link_score,
        if note.link_score == 1 { "" } else { "s" }
    )
}
