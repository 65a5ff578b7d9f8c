//! CLI commands for myos

pub mod create;
pub mod digest;
pub mod dispatch;
pub mod edit;
pub mod flags;
pub mod format;
pub mod graph;
pub mod init;
pub mod keywords;
pub mod link;
pub mod list;
pub mod reset;
pub mod resurface;
pub mod search;
pub mod show;
pub mod suggest;
pub mod transfer;
