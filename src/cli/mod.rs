//! CLI argument parsing for myos
//!
//! Global flags: --root, --store, --format, --quiet, --verbose, --log-level,
//! --log-json

pub mod args;
pub mod output;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::*;
pub use output::OutputFormat;

/// Myos - capture notes, link them, resurface what you forgot
#[derive(Parser, Debug)]
#[command(name = "myos")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store directory
    #[arg(long, global = true, env = "MYOS_STORE")]
    pub store: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new store
    Init(InitArgs),

    /// Create a note (content from the argument or stdin)
    #[command(visible_alias = "capture")]
    Create(CreateArgs),

    /// Change fields of an existing note
    Edit(EditArgs),

    /// Show a note with its links and backlinks
    Show(ShowArgs),

    /// List notes with filters and ordering
    List(ListArgs),

    /// Fuzzy search across titles, content and tags
    Search(SearchArgs),

    /// Add a link from one note to another
    Link(LinkArgs),

    /// Remove a link between two notes
    Unlink(LinkArgs),

    /// Toggle the pinned flag
    Pin(IdArgs),

    /// Toggle the archived flag
    Archive(IdArgs),

    /// Delete a note (links pointing at it are kept)
    Delete(IdArgs),

    /// Summarize the link graph
    Graph(GraphArgs),

    /// Suggest notes to link
    Suggest(SuggestArgs),

    /// Resurface older notes related to recent activity
    Resurface(ResurfaceArgs),

    /// Weekly digest: counts, themes, connections, resurfacing
    Digest(DigestArgs),

    /// Top keyword themes
    Keywords(KeywordsArgs),

    /// List every distinct tag
    Tags,

    /// Write all notes to a dated JSON export
    Export(ExportArgs),

    /// Merge notes from an export file
    Import(ImportArgs),

    /// Delete every note in the store
    Reset(ResetArgs),
}
