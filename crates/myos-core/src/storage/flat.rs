//! Flat JSON blob storage
//!
//! The whole collection lives in one file as `{"myos_notes": [...]}`. Every
//! write rewrites the file through a temp file and a rename so a crash never
//! leaves a half-written blob behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{BackendKind, NoteBackend};
use crate::error::{MyosError, Result};
use crate::note::Note;

/// Fixed key holding the note array
pub const FLAT_STORE_KEY: &str = "myos_notes";

#[derive(Debug, Default, Serialize, Deserialize)]
struct FlatBlob {
    #[serde(rename = "myos_notes", default)]
    notes: Vec<Note>,
}

/// Notes kept in a single JSON file
#[derive(Debug, Clone)]
pub struct FlatFileBackend {
    path: PathBuf,
}

impl FlatFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Note>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| MyosError::io_operation("read", self.path.display(), e))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let blob: FlatBlob = serde_json::from_str(&content)
            .map_err(|e| MyosError::storage("flat", format!("{}: {}", self.path.display(), e)))?;
        Ok(blob.notes)
    }

    fn write(&self, notes: Vec<Note>) -> Result<()> {
        let body = serde_json::to_string_pretty(&FlatBlob { notes })?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path)
            .map_err(|e| MyosError::io_operation("create", temp_path.display(), e))?;
        file.write_all(body.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp_path, &self.path)
            .map_err(|e| MyosError::io_operation("replace", self.path.display(), e))?;
        Ok(())
    }
}

fn upsert(notes: &mut Vec<Note>, note: &Note) {
    match notes.iter_mut().find(|n| n.id == note.id) {
        Some(slot) => *slot = note.clone(),
        None => notes.push(note.clone()),
    }
}

impl NoteBackend for FlatFileBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Flat
    }

    fn get_all(&self) -> Result<Vec<Note>> {
        self.load()
    }

    #[tracing::instrument(skip(self, notes), fields(count = notes.len()))]
    fn put_all(&mut self, notes: &[Note]) -> Result<()> {
        let mut stored = self.load()?;
        if stored.is_empty() {
            return self.write(notes.to_vec());
        }
        for note in notes {
            upsert(&mut stored, note);
        }
        self.write(stored)
    }

    fn put(&mut self, note: &Note) -> Result<()> {
        let mut stored = self.load()?;
        upsert(&mut stored, note);
        self.write(stored)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let mut stored = self.load()?;
        let before = stored.len();
        stored.retain(|n| n.id != id);
        if stored.len() == before {
            return Ok(());
        }
        self.write(stored)
    }

    fn clear(&mut self) -> Result<()> {
        self.write(Vec::new())
    }
}
