use serde::Serialize;

use super::keywords::extract_keywords;
use super::resurface::{resurface, ScoredNote};
use crate::config::DigestConfig;
use crate::graph::{top_connected, EnrichedNote};
use crate::note::{Note, NoteType};
use crate::query::{created_within, recent};

/// Number of notes of one type inside the digest window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub note_type: NoteType,
    pub count: usize,
}

/// Weekly review: what was captured, its themes, and what to revisit
#[derive(Debug, Clone, Serialize)]
pub struct Digest<'a> {
    pub window_days: u32,
    pub window: Vec<&'a EnrichedNote>,
    pub counts_by_type: Vec<TypeCount>,
    pub keywords: Vec<String>,
    pub top_connected: Vec<&'a EnrichedNote>,
    pub resurfacing: Vec<ScoredNote<'a>>,
}

/// Build the digest for the window ending at `now`
pub fn digest<'a>(view: &'a [EnrichedNote], now: i64, config: &DigestConfig) -> Digest<'a> {
    let window = created_within(view, now, config.window_days);
    let window_notes: Vec<&Note> = window.iter().copied().map(|n| &n.note).collect();

    let counts_by_type = NoteType::ALL
        .iter()
        .map(|t| TypeCount {
            note_type: *t,
            count: window_notes.iter().filter(|n| n.note_type == *t).count(),
        })
        .filter(|c| c.count > 0)
        .collect();

    Digest {
        window_days: config.window_days,
        keywords: extract_keywords(window_notes.iter().copied()),
        counts_by_type,
        top_connected: top_connected(view, config.top_connected),
        resurfacing: resurface(&window_notes, view, config.resurface_limit),
        window,
    }
}

/// Dashboard resurfacing: recent activity is the most recently updated notes
pub fn dashboard_resurfacing<'a>(
    view: &'a [EnrichedNote],
    config: &DigestConfig,
) -> Vec<ScoredNote<'a>> {
    let recent_notes: Vec<&Note> = recent(view, config.recent_count)
        .into_iter()
        .map(|n| &n.note)
        .collect();
    resurface(&recent_notes, view, config.resurface_limit)
}
