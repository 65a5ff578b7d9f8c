//! Recommendation heuristics: keyword themes, resurfacing, link suggestions
//!
//! All signals are cheap: term frequency, note type, tag overlap and plain
//! substring containment. Resurfacing ranks candidates by a summed score;
//! link suggestion is a binary filter.

mod digest;
mod keywords;
mod resurface;
mod suggest;

pub use digest::{dashboard_resurfacing, digest, Digest, TypeCount};
pub use keywords::{
    content_words, extract_keywords, keyword_overlap, term_frequencies, KEYWORD_LIMIT,
    MIN_KEYWORD_LEN, TAG_WEIGHT,
};
pub use resurface::{resurface, RecentProfile, ScoreBreakdown, ScoredNote, TYPE_AFFINITY_BONUS};
pub use suggest::{search_link_targets, suggest_links, LinkContext, SUGGESTION_QUERY_WORDS};
