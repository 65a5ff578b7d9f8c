use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;

use super::keywords::{extract_keywords, keyword_overlap};
use crate::graph::EnrichedNote;
use crate::note::{Note, NoteType};
use crate::trace_time;

/// Bonus for sharing a type with any recent note
pub const TYPE_AFFINITY_BONUS: usize = 2;

/// Per-signal contribution to a resurfacing score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub keywords: usize,
    pub type_affinity: usize,
    pub shared_tags: usize,
}

impl ScoreBreakdown {
    pub fn total(&self) -> usize {
        self.keywords + self.type_affinity + self.shared_tags
    }
}

/// A candidate with its score
#[derive(Debug, Clone, Serialize)]
pub struct ScoredNote<'a> {
    pub note: &'a EnrichedNote,
    pub score: usize,
    pub breakdown: ScoreBreakdown,
}

/// What the recent activity looks like: its themes, types and tags
#[derive(Debug, Clone, Default)]
pub struct RecentProfile {
    pub ids: HashSet<String>,
    pub keywords: Vec<String>,
    pub types: HashSet<NoteType>,
    pub tags: HashSet<String>,
}

impl RecentProfile {
    pub fn from_notes(recent: &[&Note]) -> Self {
        RecentProfile {
            ids: recent.iter().map(|n| n.id.clone()).collect(),
            keywords: extract_keywords(recent.iter().copied()),
            types: recent.iter().map(|n| n.note_type).collect(),
            tags: recent
                .iter()
                .flat_map(|n| n.tags.iter().cloned())
                .collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn score(&self, note: &Note) -> ScoreBreakdown {
        ScoreBreakdown {
            keywords: keyword_overlap(note, &self.keywords),
            type_affinity: if self.types.contains(&note.note_type) {
                TYPE_AFFINITY_BONUS
            } else {
                0
            },
            shared_tags: note.tags.iter().filter(|t| self.tags.contains(*t)).count(),
        }
    }
}

/// Rank every note outside `recent` by relatedness to it; keep the top `limit`.
///
/// Ties keep collection order.
pub fn resurface<'a>(
    recent: &[&Note],
    candidates: &'a [EnrichedNote],
    limit: usize,
) -> Vec<ScoredNote<'a>> {
    let start = Instant::now();
    let profile = RecentProfile::from_notes(recent);

    let mut scored: Vec<ScoredNote<'a>> = candidates
        .iter()
        .filter(|c| !profile.contains(c.id()))
        .map(|c| {
            let breakdown = profile.score(&c.note);
            ScoredNote {
                note: c,
                score: breakdown.total(),
                breakdown,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);

    trace_time!(start, "resurface", candidates = candidates.len());
    scored
}
