//! Note filtering and ordering for library listings

use std::fmt;
use std::str::FromStr;

use crate::error::{MyosError, Result};
use crate::graph::EnrichedNote;
use crate::note::{Note, NoteType};
use crate::text::matches_query;

use super::DAY_MS;

/// Creation-date window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateRange {
    Week,
    Month,
    Quarter,
    #[default]
    All,
}

impl DateRange {
    pub fn days(&self) -> Option<i64> {
        match self {
            DateRange::Week => Some(7),
            DateRange::Month => Some(30),
            DateRange::Quarter => Some(90),
            DateRange::All => None,
        }
    }

    /// Earliest `created_at` admitted, if the range is bounded
    pub fn cutoff(&self, now: i64) -> Option<i64> {
        self.days().map(|d| now - d * DAY_MS)
    }
}

impl FromStr for DateRange {
    type Err = MyosError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "7" => Ok(DateRange::Week),
            "30" => Ok(DateRange::Month),
            "90" => Ok(DateRange::Quarter),
            "all" => Ok(DateRange::All),
            other => Err(MyosError::invalid_value(
                "date range",
                format!("{} (expected: 7, 30, 90, all)", other),
            )),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.days() {
            Some(d) => write!(f, "{}", d),
            None => write!(f, "all"),
        }
    }
}

/// Listing order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Created, newest first
    #[default]
    Newest,
    /// Created, oldest first
    Oldest,
    /// Link score, highest first
    Linked,
    /// Updated, newest first
    Updated,
}

impl SortOrder {
    pub const VALID_ORDERS: &'static [&'static str] = &["newest", "oldest", "linked", "updated"];

    pub fn sort(&self, notes: &mut [&EnrichedNote]) {
        match self {
            SortOrder::Newest => notes.sort_by(|a, b| b.note.created_at.cmp(&a.note.created_at)),
            SortOrder::Oldest => notes.sort_by(|a, b| a.note.created_at.cmp(&b.note.created_at)),
            SortOrder::Linked => notes.sort_by(|a, b| b.link_score.cmp(&a.link_score)),
            SortOrder::Updated => notes.sort_by(|a, b| b.note.updated_at.cmp(&a.note.updated_at)),
        }
    }
}

impl FromStr for SortOrder {
    type Err = MyosError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "linked" => Ok(SortOrder::Linked),
            "updated" => Ok(SortOrder::Updated),
            other => Err(MyosError::invalid_value(
                "sort order",
                format!("{} (expected: {})", other, Self::VALID_ORDERS.join(", ")),
            )),
        }
    }
}

/// Filter configuration for notes
#[derive(Debug, Clone)]
pub struct NoteFilter {
    /// Admitted note types
    pub types: Vec<NoteType>,
    /// Creation-date window
    pub date_range: DateRange,
    /// Only pinned notes
    pub pinned_only: bool,
    /// true: only archived notes; false: only live notes
    pub archived: bool,
    /// Every listed tag must be present
    pub tags: Vec<String>,
    /// Fuzzy query, blank matches everything
    pub query: String,
}

impl Default for NoteFilter {
    fn default() -> Self {
        Self {
            types: NoteType::ALL.to_vec(),
            date_range: DateRange::All,
            pinned_only: false,
            archived: false,
            tags: Vec::new(),
            query: String::new(),
        }
    }
}

impl NoteFilter {
    /// Create a new filter with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given types; an empty list keeps all types
    pub fn with_types(mut self, types: Vec<NoteType>) -> Self {
        if !types.is_empty() {
            self.types = types;
        }
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self
    }

    pub fn with_pinned_only(mut self, pinned_only: bool) -> Self {
        self.pinned_only = pinned_only;
        self
    }

    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Check if a note matches all configured filters
    pub fn matches(&self, note: &Note, now: i64) -> bool {
        if note.archived != self.archived {
            return false;
        }

        if !self.types.contains(&note.note_type) {
            return false;
        }

        if self.pinned_only && !note.pinned {
            return false;
        }

        if !self.tags.iter().all(|t| note.has_tag(t)) {
            return false;
        }

        if let Some(cutoff) = self.date_range.cutoff(now) {
            if note.created_at < cutoff {
                return false;
            }
        }

        matches_query(note, &self.query)
    }

    /// Filter then order a derived view
    pub fn apply<'a>(
        &self,
        view: &'a [EnrichedNote],
        now: i64,
        order: SortOrder,
    ) -> Vec<&'a EnrichedNote> {
        let mut out: Vec<&EnrichedNote> =
            view.iter().filter(|n| self.matches(&n.note, now)).collect();
        order.sort(&mut out);
        out
    }
}
