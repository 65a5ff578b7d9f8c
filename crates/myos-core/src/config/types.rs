//! Configuration type definitions

use std::fmt;
use std::str::FromStr;

use crate::error::{MyosError, Result};
use crate::note::NoteType;
use serde::{Deserialize, Serialize};

/// Current store format version. There is no migration scheme yet; the
/// number is written so a future format can detect old stores.
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Default note type for new notes
    #[serde(default)]
    pub default_note_type: NoteType,

    /// Which persistence backend to use
    #[serde(default)]
    pub backend: BackendPreference,

    /// Dashboard and digest tuning
    #[serde(default)]
    pub digest: DigestConfig,
}

/// Backend selection policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    /// SQLite when the capability check passes, otherwise the flat file
    #[default]
    Auto,
    /// SQLite only; failing the check is an error
    Sqlite,
    /// Flat JSON file only
    Flat,
}

impl FromStr for BackendPreference {
    type Err = MyosError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(BackendPreference::Auto),
            "sqlite" => Ok(BackendPreference::Sqlite),
            "flat" => Ok(BackendPreference::Flat),
            other => Err(MyosError::invalid_value(
                "backend",
                format!("{} (expected: auto, sqlite, flat)", other),
            )),
        }
    }
}

impl fmt::Display for BackendPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendPreference::Auto => "auto",
            BackendPreference::Sqlite => "sqlite",
            BackendPreference::Flat => "flat",
        };
        f.write_str(name)
    }
}

/// Limits used by resurfacing, suggestions and the weekly digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestConfig {
    /// How many recently updated notes count as "recent activity"
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,

    /// How many resurfaced notes to show
    #[serde(default = "default_resurface_limit")]
    pub resurface_limit: usize,

    /// How many link suggestions to show
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Digest window in days
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// How many most-connected notes the digest lists
    #[serde(default = "default_top_connected")]
    pub top_connected: usize,
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_recent_count() -> usize {
    5
}

fn default_resurface_limit() -> usize {
    4
}

fn default_suggestion_limit() -> usize {
    6
}

fn default_window_days() -> u32 {
    7
}

fn default_top_connected() -> usize {
    5
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: STORE_FORMAT_VERSION,
            default_note_type: NoteType::default(),
            backend: BackendPreference::default(),
            digest: DigestConfig::default(),
        }
    }
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            recent_count: default_recent_count(),
            resurface_limit: default_resurface_limit(),
            suggestion_limit: default_suggestion_limit(),
            window_days: default_window_days(),
            top_connected: default_top_connected(),
        }
    }
}
