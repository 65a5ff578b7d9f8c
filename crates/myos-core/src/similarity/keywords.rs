use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::note::Note;
use crate::text::search_haystack;

/// Maximum number of keywords returned
pub const KEYWORD_LIMIT: usize = 8;

/// Words must be strictly longer than this many characters
pub const MIN_KEYWORD_LEN: usize = 3;

/// Tags are curated signal and count double
pub const TAG_WEIGHT: usize = 2;

static NON_WORD: OnceLock<Option<Regex>> = OnceLock::new();

fn non_word_re() -> Option<&'static Regex> {
    NON_WORD
        .get_or_init(|| match Regex::new(r"[^a-z0-9\s]") {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to compile keyword regex");
                None
            }
        })
        .as_ref()
}

/// Lower-case, replace anything but ASCII letters, digits and whitespace with
/// spaces, then keep words longer than [`MIN_KEYWORD_LEN`]
pub fn content_words(content: &str) -> Vec<String> {
    let Some(re) = non_word_re() else {
        return Vec::new();
    };
    let lowered = content.to_lowercase();
    re.replace_all(&lowered, " ")
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_KEYWORD_LEN)
        .map(str::to_string)
        .collect()
}

/// Frequency counter that remembers first-seen order for stable ties
#[derive(Debug, Default)]
struct TermCounts {
    order: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl TermCounts {
    fn add(&mut self, term: String, weight: usize) {
        match self.index.get(&term) {
            Some(&i) => self.order[i].1 += weight,
            None => {
                self.index.insert(term.clone(), self.order.len());
                self.order.push((term, weight));
            }
        }
    }

    fn ranked(mut self) -> Vec<(String, usize)> {
        // stable: equal counts keep first-seen order
        self.order.sort_by(|a, b| b.1.cmp(&a.1));
        self.order
    }
}

/// Ranked term frequencies over a set of notes, most frequent first
pub fn term_frequencies<'a, I>(notes: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Note>,
{
    let mut counts = TermCounts::default();
    for note in notes {
        for word in content_words(&note.content) {
            counts.add(word, 1);
        }
        for tag in &note.tags {
            let tag = tag.trim().to_lowercase();
            if tag.chars().count() > MIN_KEYWORD_LEN {
                counts.add(tag, TAG_WEIGHT);
            }
        }
    }
    counts.ranked()
}

/// Top [`KEYWORD_LIMIT`] themes across the given notes
pub fn extract_keywords<'a, I>(notes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Note>,
{
    term_frequencies(notes)
        .into_iter()
        .take(KEYWORD_LIMIT)
        .map(|(term, _)| term)
        .collect()
}

/// How many keywords occur as plain substrings of the note's text
pub fn keyword_overlap(note: &Note, keywords: &[String]) -> usize {
    if keywords.is_empty() {
        return 0;
    }
    let haystack = search_haystack(note);
    keywords
        .iter()
        .filter(|k| haystack.contains(k.as_str()))
        .count()
}
