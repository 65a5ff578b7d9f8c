//! Note ID generation
//!
//! IDs are opaque to the rest of the core: `note_<ulid>` in lowercase.
//! Imported notes keep whatever id they arrive with.

/// Prefix applied to locally generated ids
pub const NOTE_ID_PREFIX: &str = "note_";

/// Generate a new ULID-based note id
pub fn generate_id() -> String {
    format!(
        "{}{}",
        NOTE_ID_PREFIX,
        ulid::Ulid::new().to_string().to_lowercase()
    )
}
