//! Import, export and merge of note collections
//!
//! The interchange format is a JSON object with a single `notes` array.
//! Import never fails on bad input: unreadable payloads and malformed
//! records degrade to "nothing imported" and are reported back as a notice.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{MyosError, Result};
use crate::note::Note;

/// Prefix of export file names
pub const EXPORT_FILE_PREFIX: &str = "myos-export-";

/// Last-write-wins merge keyed by id, with `updated_at` as the clock.
///
/// An incoming note replaces an existing one only when strictly newer.
/// Existing notes keep their position; new ids are appended in incoming
/// order. Records are merged whole, never field by field.
pub fn merge_notes(existing: &[Note], incoming: &[Note]) -> Vec<Note> {
    let mut merged: Vec<Note> = Vec::with_capacity(existing.len() + incoming.len());
    let mut index: HashMap<String, usize> = HashMap::with_capacity(existing.len());

    // duplicate ids already in the collection collapse to the last occurrence
    for note in existing {
        match index.get(&note.id) {
            Some(&i) => merged[i] = note.clone(),
            None => {
                index.insert(note.id.clone(), merged.len());
                merged.push(note.clone());
            }
        }
    }

    for note in incoming {
        match index.get(&note.id) {
            Some(&i) => {
                if note.updated_at > merged[i].updated_at {
                    merged[i] = note.clone();
                }
            }
            None => {
                index.insert(note.id.clone(), merged.len());
                merged.push(note.clone());
            }
        }
    }

    merged
}

/// Serialized export payload
#[derive(Debug, Clone, Serialize)]
pub struct ExportPayload<'a> {
    pub notes: &'a [Note],
}

/// Render the export document
pub fn export_json(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ExportPayload { notes })?)
}

/// `myos-export-YYYY-MM-DD.json` for the given instant (UTC date)
pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("{}{}.json", EXPORT_FILE_PREFIX, at.format("%Y-%m-%d"))
}

/// Write an export into `dir` and return the file path
#[tracing::instrument(skip(dir, notes), fields(dir = %dir.display(), count = notes.len()))]
pub fn write_export(dir: &Path, notes: &[Note], at: DateTime<Utc>) -> Result<PathBuf> {
    let path = dir.join(export_file_name(at));
    let body = export_json(notes)?;
    fs::write(&path, body).map_err(|e| MyosError::io_operation("write export", path.display(), e))?;
    Ok(path)
}

/// Outcome of parsing an import payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Records found in the payload
    pub received: usize,
    /// Records dropped because they could not be read as notes
    pub skipped: usize,
    /// Collection size after merging; filled in by the store
    pub merged_total: usize,
    /// Human-readable notice when the payload itself was unusable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Deserialize)]
struct RawPayload {
    #[serde(default)]
    notes: Option<serde_json::Value>,
}

/// Parse an import document leniently.
///
/// Malformed JSON, a missing `notes` key, or a non-array `notes` value all
/// yield an empty list. Individual records that fail to parse are skipped.
pub fn parse_import(text: &str) -> (Vec<Note>, ImportReport) {
    let mut report = ImportReport::default();

    let payload: RawPayload = match serde_json::from_str(text) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, "import payload is not a JSON object");
            report.notice = Some(format!("import file could not be read: {}", e));
            return (Vec::new(), report);
        }
    };

    let records = match payload.notes {
        Some(serde_json::Value::Array(items)) => items,
        Some(_) => {
            tracing::warn!("import payload has a non-array `notes` field");
            report.notice = Some("`notes` is not a list; nothing imported".to_string());
            return (Vec::new(), report);
        }
        None => {
            tracing::warn!("import payload has no `notes` field");
            report.notice = Some("no `notes` found; nothing imported".to_string());
            return (Vec::new(), report);
        }
    };

    report.received = records.len();
    let mut notes = Vec::with_capacity(records.len());
    for (i, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Note>(record) {
            Ok(note) => notes.push(note),
            Err(e) => {
                tracing::warn!(index = i, error = %e, "skipping malformed note record");
                report.skipped += 1;
            }
        }
    }
    if report.skipped > 0 {
        report.notice = Some(format!("{} malformed record(s) skipped", report.skipped));
    }

    (notes, report)
}

/// Read and leniently parse an import file; only the file read itself can fail
pub fn read_import(path: &Path) -> Result<(Vec<Note>, ImportReport)> {
    let bytes =
        fs::read(path).map_err(|e| MyosError::io_operation("read import", path.display(), e))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(parse_import(&text)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "import file is not UTF-8");
            let report = ImportReport {
                notice: Some(format!("import file could not be read: {}", e)),
                ..ImportReport::default()
            };
            Ok((Vec::new(), report))
        }
    }
}
