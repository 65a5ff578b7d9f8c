//! Durable note storage
//!
//! Two interchangeable backends sit behind [`NoteBackend`]: an indexed SQLite
//! table and a flat JSON file. One of them is chosen once when a store is
//! opened (see [`select::select_backend`]) and used for the whole session.

pub mod flat;
pub mod select;
pub mod sqlite;

use std::fmt;

use serde::Serialize;

use crate::config::BackendPreference;
use crate::error::Result;
use crate::note::Note;

pub use flat::{FlatFileBackend, FLAT_STORE_KEY};
pub use select::{select_backend, CapabilityCheck, SqliteCheck};
pub use sqlite::{SqliteBackend, CURRENT_SCHEMA_VERSION};

/// SQLite database file inside the store directory
pub const DB_FILE: &str = "myos.db";

/// Flat blob file inside the store directory
pub const FLAT_FILE: &str = "notes.json";

/// Which backend a store is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Sqlite,
    Flat,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Sqlite => "sqlite",
            BackendKind::Flat => "flat",
        }
    }
}

impl From<BackendKind> for BackendPreference {
    fn from(kind: BackendKind) -> Self {
        match kind {
            BackendKind::Sqlite => BackendPreference::Sqlite,
            BackendKind::Flat => BackendPreference::Flat,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistence contract used by the store.
///
/// Records are keyed by note id. `put` and `put_all` upsert; nothing here
/// validates links or other cross-record references.
pub trait NoteBackend: fmt::Debug + Send {
    fn kind(&self) -> BackendKind;

    /// Every persisted note
    fn get_all(&self) -> Result<Vec<Note>>;

    /// Upsert many notes as one unit
    fn put_all(&mut self, notes: &[Note]) -> Result<()>;

    /// Upsert one note
    fn put(&mut self, note: &Note) -> Result<()>;

    /// Remove one note; unknown ids are not an error
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Remove every note
    fn clear(&mut self) -> Result<()>;
}
