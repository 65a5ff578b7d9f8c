use myos_core::config::BackendPreference;
use myos_core::note::{Mood, NoteType};
use myos_core::query::{DateRange, SortOrder};

/// Parse note type from string
pub fn parse_note_type(s: &str) -> std::result::Result<NoteType, String> {
    s.parse::<NoteType>().map_err(|e| e.to_string())
}

pub fn parse_mood(s: &str) -> std::result::Result<Mood, String> {
    s.parse::<Mood>().map_err(|e| e.to_string())
}

pub fn parse_date_range(s: &str) -> std::result::Result<DateRange, String> {
    s.parse::<DateRange>().map_err(|e| e.to_string())
}

pub fn parse_sort_order(s: &str) -> std::result::Result<SortOrder, String> {
    s.parse::<SortOrder>().map_err(|e| e.to_string())
}

pub fn parse_backend(s: &str) -> std::result::Result<BackendPreference, String> {
    s.parse::<BackendPreference>().map_err(|e| e.to_string())
}
