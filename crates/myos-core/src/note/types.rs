use crate::error::{MyosError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Note category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NoteType {
    /// Quick thought, the default for captures
    #[default]
    Idea,
    /// Something someone else said or wrote
    Quote,
    /// Something noticed
    Observation,
    /// Working note attached to a project
    #[serde(rename = "Project Note")]
    ProjectNote,
    /// Diary-style entry
    Journal,
}

impl NoteType {
    /// Every note type, in display order
    pub const ALL: [NoteType; 5] = [
        NoteType::Idea,
        NoteType::Quote,
        NoteType::Observation,
        NoteType::ProjectNote,
        NoteType::Journal,
    ];

    /// Accepted spellings for parsing
    pub const VALID_TYPES: &'static [&'static str] =
        &["idea", "quote", "observation", "project-note", "journal"];

    pub fn label(&self) -> &'static str {
        match self {
            NoteType::Idea => "Idea",
            NoteType::Quote => "Quote",
            NoteType::Observation => "Observation",
            NoteType::ProjectNote => "Project Note",
            NoteType::Journal => "Journal",
        }
    }
}

impl FromStr for NoteType {
    type Err = MyosError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "idea" => Ok(NoteType::Idea),
            "quote" => Ok(NoteType::Quote),
            "observation" => Ok(NoteType::Observation),
            "project-note" | "project" => Ok(NoteType::ProjectNote),
            "journal" => Ok(NoteType::Journal),
            other => Err(MyosError::invalid_value(
                "note type",
                format!("{} (expected: {})", other, Self::VALID_TYPES.join(", ")),
            )),
        }
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Optional mood metadata, no structural effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Calm,
    Focused,
    Stressed,
    Excited,
}

impl Mood {
    pub const VALID_MOODS: &'static [&'static str] = &["calm", "focused", "stressed", "excited"];
}

impl FromStr for Mood {
    type Err = MyosError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "calm" => Ok(Mood::Calm),
            "focused" => Ok(Mood::Focused),
            "stressed" => Ok(Mood::Stressed),
            "excited" => Ok(Mood::Excited),
            other => Err(MyosError::invalid_value(
                "mood",
                format!("{} (expected: {})", other, Self::VALID_MOODS.join(", ")),
            )),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mood::Calm => "Calm",
            Mood::Focused => "Focused",
            Mood::Stressed => "Stressed",
            Mood::Excited => "Excited",
        };
        f.write_str(s)
    }
}
