//! Subcommand argument structures

use std::path::PathBuf;

use clap::Args;

use super::parse::{
    parse_backend, parse_date_range, parse_mood, parse_note_type, parse_sort_order,
};
use myos_core::config::BackendPreference;
use myos_core::note::{Mood, NoteType};
use myos_core::query::{DateRange, SortOrder};

/// Arguments for the init command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Storage backend (auto, sqlite, flat)
    #[arg(long, value_parser = parse_backend)]
    pub backend: Option<BackendPreference>,

    /// Type given to notes created without --type
    #[arg(long, value_parser = parse_note_type)]
    pub default_type: Option<NoteType>,
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Note content; read from stdin when omitted
    pub content: Option<String>,

    /// Note title (first line of content if not provided)
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Note type
    #[arg(long, short = 'T', value_parser = parse_note_type)]
    pub r#type: Option<NoteType>,

    /// Tags (can be specified multiple times)
    #[arg(long, action = clap::ArgAction::Append)]
    pub tag: Vec<String>,

    /// Mood at capture time (journal notes)
    #[arg(long, value_parser = parse_mood)]
    pub mood: Option<Mood>,

    /// Where the idea or quote came from
    #[arg(long)]
    pub source: Option<String>,

    /// Link to an existing note id (can be specified multiple times)
    #[arg(long, action = clap::ArgAction::Append)]
    pub link: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Note ID
    pub id: String,

    /// New title; an empty string re-derives it from the content
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// New content
    #[arg(long, short = 'c')]
    pub content: Option<String>,

    #[arg(long, short = 'T', value_parser = parse_note_type)]
    pub r#type: Option<NoteType>,

    /// Replace tags (can be specified multiple times)
    #[arg(long, action = clap::ArgAction::Append, conflicts_with = "clear_tags")]
    pub tag: Vec<String>,

    /// Remove all tags
    #[arg(long)]
    pub clear_tags: bool,

    #[arg(long, value_parser = parse_mood, conflicts_with = "clear_mood")]
    pub mood: Option<Mood>,

    #[arg(long)]
    pub clear_mood: bool,

    #[arg(long, conflicts_with = "clear_source")]
    pub source: Option<String>,

    #[arg(long)]
    pub clear_source: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Note ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by note type (can be specified multiple times)
    #[arg(long, short = 'T', value_parser = parse_note_type, action = clap::ArgAction::Append)]
    pub r#type: Vec<NoteType>,

    /// Require tag (can be specified multiple times; all must match)
    #[arg(long, action = clap::ArgAction::Append)]
    pub tag: Vec<String>,

    /// Created within the last 7, 30 or 90 days, or all
    #[arg(long, value_parser = parse_date_range, default_value = "all")]
    pub range: DateRange,

    /// Only notes created today (local time)
    #[arg(long, conflicts_with = "range")]
    pub today: bool,

    /// Only pinned notes
    #[arg(long)]
    pub pinned: bool,

    /// Show archived notes instead of live ones
    #[arg(long)]
    pub archived: bool,

    /// Only notes with at least one link or backlink
    #[arg(long)]
    pub connected: bool,

    /// Fuzzy filter over title, content and tags
    #[arg(long, short)]
    pub query: Option<String>,

    /// Order: newest, oldest, linked, updated
    #[arg(long, value_parser = parse_sort_order, default_value = "newest")]
    pub sort: SortOrder,

    /// Maximum notes to print
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query; every word must appear in order, gaps allowed
    pub query: String,

    #[arg(long, short = 'T', value_parser = parse_note_type, action = clap::ArgAction::Append)]
    pub r#type: Vec<NoteType>,

    #[arg(long, action = clap::ArgAction::Append)]
    pub tag: Vec<String>,

    /// Search archived notes too
    #[arg(long)]
    pub include_archived: bool,

    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct LinkArgs {
    /// Source note ID
    pub from: String,

    /// Target note ID
    pub to: String,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Note ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Restrict to a note and its direct links and backlinks
    #[arg(long)]
    pub focus: Option<String>,

    /// Only notes with at least one link or backlink
    #[arg(long)]
    pub connected: bool,

    /// List links whose target no longer exists
    #[arg(long)]
    pub dangling: bool,
}

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Existing note to suggest links for
    pub id: String,

    /// Free-text search for link targets instead of heuristics
    #[arg(long, short)]
    pub query: Option<String>,

    /// Maximum suggestions (default from config)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ResurfaceArgs {
    /// Maximum notes to resurface (default from config)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show how each score was built
    #[arg(long)]
    pub explain: bool,
}

#[derive(Args, Debug)]
pub struct DigestArgs {
    /// Window length in days (default from config)
    #[arg(long)]
    pub days: Option<u32>,
}

#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// Only notes created within this many days
    #[arg(long)]
    pub days: Option<u32>,

    /// Include archived notes
    #[arg(long)]
    pub include_archived: bool,

    /// Print frequencies next to each term
    #[arg(long)]
    pub counts: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Directory to write the export into (default: root)
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Print the export document to stdout instead of writing a file
    #[arg(long, conflicts_with = "output_dir")]
    pub stdout: bool,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Export file to merge
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Must be exactly RESET
    #[arg(long)]
    pub confirm: Option<String>,
}
