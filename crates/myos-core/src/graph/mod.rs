//! Graph derivation: backlinks and connectivity scores
//!
//! The enriched view is a pure function of the note collection. Links may
//! point at ids that no longer exist; those edges are counted on the source
//! side only and never resolve to a note.

mod cache;

pub use cache::{CacheStats, DerivationCache};

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use serde::Serialize;

use crate::note::Note;
use crate::trace_time;

/// A note plus its derived reverse edges
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedNote {
    #[serde(flatten)]
    pub note: Note,
    /// Ids of notes whose `links` contain this note, in collection order
    pub backlinks: Vec<String>,
    /// `links.len() + backlinks.len()`
    pub link_score: usize,
}

impl EnrichedNote {
    pub fn id(&self) -> &str {
        &self.note.id
    }

    pub fn is_connected(&self) -> bool {
        self.link_score > 0
    }
}

/// Compute backlinks and link scores for every note. O(n + e).
pub fn derive(notes: &[Note]) -> Vec<EnrichedNote> {
    let start = Instant::now();

    let mut backlinks: HashMap<&str, Vec<String>> = HashMap::new();
    for note in notes {
        for target in &note.links {
            backlinks
                .entry(target.as_str())
                .or_default()
                .push(note.id.clone());
        }
    }

    let enriched: Vec<EnrichedNote> = notes
        .iter()
        .map(|note| {
            let incoming = backlinks.remove(note.id.as_str()).unwrap_or_default();
            let link_score = note.links.len() + incoming.len();
            EnrichedNote {
                note: note.clone(),
                backlinks: incoming,
                link_score,
            }
        })
        .collect();

    trace_time!(start, "derive", notes = notes.len());
    enriched
}

/// Look up an enriched note by id
pub fn find<'a>(enriched: &'a [EnrichedNote], id: &str) -> Option<&'a EnrichedNote> {
    enriched.iter().find(|n| n.id() == id)
}

/// Resolve a list of ids against the view, silently skipping dangling ids
pub fn resolve<'a>(enriched: &'a [EnrichedNote], ids: &[String]) -> Vec<&'a EnrichedNote> {
    ids.iter().filter_map(|id| find(enriched, id)).collect()
}

/// Outgoing edges whose target is not in the collection, as (source, target)
pub fn dangling_links(notes: &[Note]) -> Vec<(String, String)> {
    let ids: HashSet<&str> = notes.iter().map(|n| n.id.as_str()).collect();
    notes
        .iter()
        .flat_map(|note| {
            note.links
                .iter()
                .filter(|target| !ids.contains(target.as_str()))
                .map(move |target| (note.id.clone(), target.clone()))
        })
        .collect()
}

/// Focus set for a note: itself, its outgoing links and its backlinks
pub fn neighborhood(enriched: &[EnrichedNote], id: &str) -> Option<HashSet<String>> {
    let current = find(enriched, id)?;
    let mut set: HashSet<String> = HashSet::new();
    set.insert(current.id().to_string());
    set.extend(current.note.links.iter().cloned());
    set.extend(current.backlinks.iter().cloned());
    Some(set)
}

/// Sort a view by connectivity, most connected first; ties keep input order
pub fn top_connected(enriched: &[EnrichedNote], limit: usize) -> Vec<&EnrichedNote> {
    let mut sorted: Vec<&EnrichedNote> = enriched.iter().collect();
    sorted.sort_by(|a, b| b.link_score.cmp(&a.link_score));
    sorted.truncate(limit);
    sorted
}

/// Aggregate counts over a derived view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub notes: usize,
    pub edges: usize,
    pub resolved_edges: usize,
    pub dangling_edges: usize,
    pub isolated: usize,
}

impl GraphSummary {
    pub fn from_view(enriched: &[EnrichedNote]) -> Self {
        let edges: usize = enriched.iter().map(|n| n.note.links.len()).sum();
        let resolved_edges: usize = enriched.iter().map(|n| n.backlinks.len()).sum();
        GraphSummary {
            notes: enriched.len(),
            edges,
            resolved_edges,
            dangling_edges: edges - resolved_edges,
            isolated: enriched.iter().filter(|n| !n.is_connected()).count(),
        }
    }
}
