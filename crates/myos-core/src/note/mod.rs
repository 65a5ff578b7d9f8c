//! Note model
//!
//! A note is the atomic record of the collection. Field names serialize in
//! camelCase so export files stay readable by other tools built on the same
//! format (`createdAt`, `updatedAt`, `type`).

mod types;

pub use types::{Mood, NoteType};

use serde::{Deserialize, Serialize};

/// Maximum length of a title derived from content
pub const DERIVED_TITLE_MAX_CHARS: usize = 80;

/// Title used when content has no usable first line
pub const UNTITLED: &str = "Untitled";

/// Canonical note record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type", default)]
    pub note_type: NoteType,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Milliseconds since epoch
    pub created_at: i64,
    /// Milliseconds since epoch, never below `created_at`
    pub updated_at: i64,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub archived: bool,
    /// Outgoing edges, in insertion order
    #[serde(default)]
    pub links: Vec<String>,
}

impl Note {
    /// Title for display: the stored title, or one derived from content
    pub fn display_title(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title.to_string(),
            _ => title_from_content(&self.content),
        }
    }

    /// Advance `updated_at` to `now`. The clock always moves forward by at
    /// least one tick, even when `now` lags behind the stored value.
    pub fn touch(&mut self, now: i64) {
        self.updated_at = now
            .max(self.updated_at.saturating_add(1))
            .max(self.created_at);
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn links_to(&self, id: &str) -> bool {
        self.links.iter().any(|l| l == id)
    }

    /// Apply a partial update. Returns true if anything changed; the caller
    /// is responsible for bumping `updated_at`.
    pub fn apply(&mut self, patch: NotePatch) -> bool {
        let before = self.clone();

        if let Some(content) = patch.content {
            self.content = content;
        }
        match patch.title {
            // An explicitly blank title re-derives it from the current content
            Some(title) if title.trim().is_empty() => {
                self.title = Some(title_from_content(&self.content));
            }
            Some(title) => self.title = Some(title),
            None => {}
        }
        if let Some(note_type) = patch.note_type {
            self.note_type = note_type;
        }
        if let Some(tags) = patch.tags {
            self.tags = normalize_tags(tags);
        }
        if let Some(mood) = patch.mood {
            self.mood = mood;
        }
        if let Some(source) = patch.source {
            self.source = source;
        }
        if let Some(pinned) = patch.pinned {
            self.pinned = pinned;
        }
        if let Some(archived) = patch.archived {
            self.archived = archived;
        }
        if let Some(links) = patch.links {
            self.links = normalize_links(&self.id, links);
        }

        *self != before
    }
}

/// Input for creating a note
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: Option<String>,
    pub content: String,
    pub note_type: Option<NoteType>,
    pub tags: Vec<String>,
    pub mood: Option<Mood>,
    pub source: Option<String>,
    pub links: Vec<String>,
}

impl NoteDraft {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_type(mut self, note_type: NoteType) -> Self {
        self.note_type = Some(note_type);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }

    /// Materialize the draft into a note with the given id and clock reading
    pub fn into_note(self, id: String, default_type: NoteType, now: i64) -> Note {
        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => title_from_content(&self.content),
        };
        let links = normalize_links(&id, self.links);

        Note {
            id,
            title: Some(title),
            content: self.content,
            note_type: self.note_type.unwrap_or(default_type),
            tags: normalize_tags(self.tags),
            mood: self.mood,
            source: self.source,
            created_at: now,
            updated_at: now,
            pinned: false,
            archived: false,
            links,
        }
    }
}

/// Partial update; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub note_type: Option<NoteType>,
    pub tags: Option<Vec<String>>,
    pub mood: Option<Option<Mood>>,
    pub source: Option<Option<String>>,
    pub pinned: Option<bool>,
    pub archived: Option<bool>,
    pub links: Option<Vec<String>>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.note_type.is_none()
            && self.tags.is_none()
            && self.mood.is_none()
            && self.source.is_none()
            && self.pinned.is_none()
            && self.archived.is_none()
            && self.links.is_none()
    }
}

/// First line of the content, trimmed and capped, or "Untitled"
pub fn title_from_content(content: &str) -> String {
    let first_line = content.split('\n').next().unwrap_or("").trim();
    if first_line.is_empty() {
        return UNTITLED.to_string();
    }
    first_line.chars().take(DERIVED_TITLE_MAX_CHARS).collect()
}

/// Drop self-links and duplicates, keeping first-occurrence order
pub fn normalize_links(own_id: &str, links: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(links.len());
    for link in links {
        let link = link.trim().to_string();
        if link.is_empty() || link == own_id || out.contains(&link) {
            continue;
        }
        out.push(link);
    }
    out
}

/// Trim tags and drop blanks and duplicates, keeping first-occurrence order
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_string();
        if tag.is_empty() || out.contains(&tag) {
            continue;
        }
        out.push(tag);
    }
    out
}

/// Current wall clock in milliseconds since epoch
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
