//! Text matching primitives for search
//!
//! Matching is a loose ordered-subsequence test rather than an index lookup:
//! each query token must appear in the note's text in order, gaps allowed.

use crate::note::Note;

/// Lower-cased concatenation of title, content and tags, space separated
pub fn search_haystack(note: &Note) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(2 + note.tags.len());
    parts.push(note.title.as_deref().unwrap_or(""));
    parts.push(&note.content);
    parts.extend(note.tags.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

/// Case-insensitive ordered-subsequence test.
///
/// True iff every character of `needle` occurs in `haystack` in the same
/// order, not necessarily contiguously. An empty needle always matches.
pub fn fuzzy_subsequence(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = haystack.to_lowercase();
    let needle = needle.to_lowercase();
    subsequence_lowered(&haystack, &needle)
}

/// Two-pointer scan over already lower-cased input
fn subsequence_lowered(haystack: &str, needle: &str) -> bool {
    let mut wanted = needle.chars().peekable();
    for c in haystack.chars() {
        match wanted.peek() {
            Some(&w) if w == c => {
                wanted.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    wanted.peek().is_none()
}

/// Split a query into lower-cased whitespace tokens
pub fn query_tokens(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// True iff every query token fuzzy-matches the note's haystack.
///
/// Tokens are checked independently against the whole haystack (AND
/// semantics, no positional anchoring). A blank query matches everything.
pub fn matches_query(note: &Note, query: &str) -> bool {
    let tokens = query_tokens(query);
    if tokens.is_empty() {
        return true;
    }
    let haystack = search_haystack(note);
    tokens
        .iter()
        .all(|token| subsequence_lowered(&haystack, token))
}

/// First `n` whitespace-separated words of `text`, rejoined with spaces
pub fn leading_words(text: &str, n: usize) -> String {
    text.split_whitespace().take(n).collect::<Vec<_>>().join(" ")
}
