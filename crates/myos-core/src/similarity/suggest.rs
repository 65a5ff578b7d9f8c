use crate::graph::EnrichedNote;
use crate::note::{Note, NoteType};
use crate::text::{leading_words, matches_query};

/// Number of leading content words used as the suggestion query
pub const SUGGESTION_QUERY_WORDS: usize = 6;

/// The note being edited, as currently typed (may differ from what is stored)
#[derive(Debug, Clone, Copy)]
pub struct LinkContext<'a> {
    pub id: &'a str,
    pub note_type: NoteType,
    pub tags: &'a [String],
    pub content: &'a str,
}

impl<'a> LinkContext<'a> {
    pub fn from_note(note: &'a Note) -> Self {
        LinkContext {
            id: &note.id,
            note_type: note.note_type,
            tags: &note.tags,
            content: &note.content,
        }
    }
}

/// Candidates sharing a tag, matching the opening words, or sharing the type.
///
/// Unranked: qualifying notes come back in collection order, cut at `limit`.
/// An empty draft body makes the text clause match every candidate.
pub fn suggest_links<'a>(
    ctx: &LinkContext<'_>,
    candidates: &'a [EnrichedNote],
    limit: usize,
) -> Vec<&'a EnrichedNote> {
    let query = leading_words(ctx.content, SUGGESTION_QUERY_WORDS);

    candidates
        .iter()
        .filter(|c| c.id() != ctx.id)
        .filter(|c| {
            let shares_tag = c.note.tags.iter().any(|t| ctx.tags.contains(t));
            shares_tag || matches_query(&c.note, &query) || c.note.note_type == ctx.note_type
        })
        .take(limit)
        .collect()
}

/// Free-text search for a link target, excluding the source note
pub fn search_link_targets<'a>(
    source_id: &str,
    query: &str,
    candidates: &'a [EnrichedNote],
    limit: usize,
) -> Vec<&'a EnrichedNote> {
    candidates
        .iter()
        .filter(|c| c.id() != source_id)
        .filter(|c| matches_query(&c.note, query))
        .take(limit)
        .collect()
}
