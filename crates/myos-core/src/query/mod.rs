//! Listing helpers over the enriched view: filters, ordering, recency

mod filter;

pub use filter::{DateRange, NoteFilter, SortOrder};

use std::collections::BTreeSet;

use chrono::{Local, TimeZone};

use crate::graph::EnrichedNote;
use crate::note::Note;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// The `n` most recently updated notes, newest first
pub fn recent(view: &[EnrichedNote], n: usize) -> Vec<&EnrichedNote> {
    let mut sorted: Vec<&EnrichedNote> = view.iter().collect();
    sorted.sort_by(|a, b| b.note.updated_at.cmp(&a.note.updated_at));
    sorted.truncate(n);
    sorted
}

/// Notes created within the last `days` days of `now`
pub fn created_within(view: &[EnrichedNote], now: i64, days: u32) -> Vec<&EnrichedNote> {
    let cutoff = now - i64::from(days) * DAY_MS;
    view.iter().filter(|n| n.note.created_at >= cutoff).collect()
}

/// Start and end (inclusive) of the local calendar day containing `now`
pub fn local_day_bounds(now: i64) -> (i64, i64) {
    let midnight = Local
        .timestamp_millis_opt(now)
        .earliest()
        .and_then(|dt| dt.date_naive().and_hms_opt(0, 0, 0))
        .and_then(|naive| Local.from_local_datetime(&naive).earliest());

    let start = match midnight {
        Some(dt) => dt.timestamp_millis(),
        // unrepresentable or skipped by a DST jump: use the UTC day
        None => now - now.rem_euclid(DAY_MS),
    };
    (start, start + DAY_MS - 1)
}

/// Notes created today (local time)
pub fn today(view: &[EnrichedNote], now: i64) -> Vec<&EnrichedNote> {
    let (start, end) = local_day_bounds(now);
    view.iter()
        .filter(|n| n.note.created_at >= start && n.note.created_at <= end)
        .collect()
}

/// Sorted distinct tags across the collection
pub fn all_tags(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .flat_map(|n| n.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
