//! Myos Core Library
//!
//! Note graph and retrieval engine for the myos knowledge tool: backlink
//! derivation, fuzzy search, keyword themes, resurfacing, import/export
//! merging and dual-backend persistence.

pub mod config;
pub mod error;
pub mod graph;
pub mod id;
pub mod logging;
pub mod note;
pub mod query;
pub mod similarity;
pub mod storage;
pub mod store;
pub mod text;
pub mod transfer;
