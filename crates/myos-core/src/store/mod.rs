//! Note store
//!
//! The store owns the in-memory collection and the one backend chosen when it
//! was opened. Every mutation is applied in memory first and then persisted;
//! if persisting fails the in-memory change is undone and the error returned,
//! so memory never runs ahead of disk.
//!
//! Default location: `.myos/` under the project root.

pub mod paths;


use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;

use crate::config::{BackendPreference, StoreConfig};
use crate::error::{MyosError, Result};
use crate::graph::{CacheStats, DerivationCache, EnrichedNote};
use crate::id::generate_id;
use crate::note::{normalize_links, normalize_tags, now_millis, Note, NoteDraft, NotePatch, NoteType};
use crate::storage::{select_backend, BackendKind, CapabilityCheck, NoteBackend, SqliteCheck};
use crate::transfer::{self, ImportReport};
use paths::{CONFIG_FILE, DEFAULT_STORE_DIR};

/// Options for `Store::init`
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub backend: Option<BackendPreference>,
    pub default_note_type: Option<NoteType>,
}

/// The myos store
#[derive(Debug)]
pub struct Store {
    /// Store directory (`.myos/`)
    root: PathBuf,
    config: StoreConfig,
    backend: Box<dyn NoteBackend>,
    /// Newest first
    notes: Vec<Note>,
    /// Bumped on every write to `notes`; keys the derivation cache
    generation: u64,
    cache: DerivationCache,
}

impl Store {
    /// Discover a store by walking up from the given directory
    pub fn discover(dir: &Path) -> Result<Self> {
        let store_path = paths::discover_store(dir)?;
        Self::open(&store_path)
    }

    /// Open an existing store with the default capability check
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_check(path, &SqliteCheck)
    }

    /// Open an existing store, choosing the backend with `check`
    #[tracing::instrument(skip(path, check), fields(path = %path.display()))]
    pub fn open_with_check(path: &Path, check: &dyn CapabilityCheck) -> Result<Self> {
        if !path.is_dir() {
            return Err(MyosError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        let config = StoreConfig::load_or_default(&path.join(CONFIG_FILE))?;
        let backend = select_backend(path, config.backend, check)?;
        tracing::info!(backend = %backend.kind(), "store opened");

        Self::with_backend(path, config, backend)
    }

    /// Build a store around an already constructed backend
    pub fn with_backend(
        root: &Path,
        config: StoreConfig,
        backend: Box<dyn NoteBackend>,
    ) -> Result<Self> {
        let notes = backend.get_all()?;
        tracing::debug!(count = notes.len(), "loaded notes");

        Ok(Store {
            root: root.to_path_buf(),
            config,
            backend,
            notes,
            generation: 0,
            cache: DerivationCache::new(),
        })
    }

    /// Initialize a new store under the given project root
    pub fn init(project_root: &Path, options: InitOptions) -> Result<Self> {
        Self::init_at(&project_root.join(DEFAULT_STORE_DIR), options)
    }

    /// Initialize a store at an explicit store directory. Idempotent: an
    /// existing config is kept unless options override it.
    pub fn init_at(store_root: &Path, options: InitOptions) -> Result<Self> {
        Self::init_at_with_check(store_root, options, &SqliteCheck)
    }

    /// [`Store::init_at`] with an explicit capability check. An `auto`
    /// backend is resolved here and the concrete choice written to the
    /// config, so later opens stay on the same backend.
    pub fn init_at_with_check(
        store_root: &Path,
        options: InitOptions,
        check: &dyn CapabilityCheck,
    ) -> Result<Self> {
        fs::create_dir_all(store_root)
            .map_err(|e| MyosError::io_operation("create store", store_root.display(), e))?;

        let config_path = store_root.join(CONFIG_FILE);
        let config_existed = config_path.exists();
        let mut config = StoreConfig::load_or_default(&config_path)?;

        let mut changed = !config_existed;
        if let Some(backend) = options.backend {
            changed |= config.backend != backend;
            config.backend = backend;
        }
        if let Some(note_type) = options.default_note_type {
            changed |= config.default_note_type != note_type;
            config.default_note_type = note_type;
        }
        if changed {
            config.save(&config_path)?;
        }

        let mut store = Self::open_with_check(store_root, check)?;
        if store.config.backend == BackendPreference::Auto {
            store.config.backend = store.backend_kind().into();
            store.config.save(&config_path)?;
            tracing::info!(backend = %store.config.backend, "pinned auto backend");
        }
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// The collection in store order (newest created first)
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Look up a note, failing with `NoteNotFound`
    pub fn require(&self, id: &str) -> Result<&Note> {
        self.get(id).ok_or_else(|| MyosError::not_found(id))
    }

    /// Derived view of the current collection
    pub fn enriched(&mut self) -> Arc<Vec<EnrichedNote>> {
        self.cache.get_or_derive(self.generation, &self.notes)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn notes_mut(&mut self) -> &mut Vec<Note> {
        self.generation += 1;
        &mut self.notes
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    /// Swap in `note` at `index` and persist it, restoring the old record if
    /// the write fails
    fn replace_at(&mut self, index: usize, note: Note) -> Result<Note> {
        let previous = std::mem::replace(&mut self.notes_mut()[index], note.clone());
        if let Err(e) = self.backend.put(&note) {
            tracing::warn!(id = %note.id, error = %e, "persist failed, rolling back");
            self.notes_mut()[index] = previous;
            return Err(e);
        }
        Ok(note)
    }

    /// Apply `edit` to the note with `id`, bump `updated_at`, and persist.
    /// Unknown ids yield `Ok(None)`.
    fn modify<F>(&mut self, id: &str, edit: F) -> Result<Option<Note>>
    where
        F: FnOnce(&mut Note),
    {
        let Some(index) = self.position(id) else {
            tracing::debug!(id, "ignoring change to unknown note");
            return Ok(None);
        };
        let mut note = self.notes[index].clone();
        edit(&mut note);
        note.touch(now_millis());
        self.replace_at(index, note).map(Some)
    }

    /// Create a note and place it at the front of the collection
    #[tracing::instrument(skip(self, draft))]
    pub fn create(&mut self, draft: NoteDraft) -> Result<Note> {
        let note = draft.into_note(generate_id(), self.config.default_note_type, now_millis());

        self.notes_mut().insert(0, note.clone());
        if let Err(e) = self.backend.put(&note) {
            tracing::warn!(id = %note.id, error = %e, "persist failed, rolling back");
            self.notes_mut().remove(0);
            return Err(e);
        }

        tracing::debug!(id = %note.id, "created note");
        Ok(note)
    }

    /// Partial update
    #[tracing::instrument(skip(self, patch))]
    pub fn update(&mut self, id: &str, patch: NotePatch) -> Result<Option<Note>> {
        self.modify(id, |note| {
            note.apply(patch);
        })
    }

    /// Remove a note; links pointing at it are left dangling
    #[tracing::instrument(skip(self))]
    pub fn delete(&mut self, id: &str) -> Result<Option<Note>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        let removed = self.notes_mut().remove(index);
        if let Err(e) = self.backend.delete(id) {
            tracing::warn!(id, error = %e, "delete failed, rolling back");
            self.notes_mut().insert(index, removed);
            return Err(e);
        }
        Ok(Some(removed))
    }

    pub fn toggle_pin(&mut self, id: &str) -> Result<Option<Note>> {
        self.modify(id, |note| note.pinned = !note.pinned)
    }

    pub fn toggle_archive(&mut self, id: &str) -> Result<Option<Note>> {
        self.modify(id, |note| note.archived = !note.archived)
    }

    /// Append `target` to the source's links. Self-links and existing links
    /// leave the note untouched.
    #[tracing::instrument(skip(self))]
    pub fn link(&mut self, source: &str, target: &str) -> Result<Option<Note>> {
        let Some(note) = self.get(source) else {
            return Ok(None);
        };
        if source == target || note.links_to(target) {
            return Ok(Some(note.clone()));
        }
        let target = target.to_string();
        self.modify(source, move |note| note.links.push(target))
    }

    /// Remove every occurrence of `target` from the source's links
    #[tracing::instrument(skip(self))]
    pub fn unlink(&mut self, source: &str, target: &str) -> Result<Option<Note>> {
        let Some(note) = self.get(source) else {
            return Ok(None);
        };
        if !note.links_to(target) {
            return Ok(Some(note.clone()));
        }
        self.modify(source, |note| note.links.retain(|l| l != target))
    }

    /// Merge `incoming` into the collection and persist the result
    #[tracing::instrument(skip(self, incoming), fields(incoming = incoming.len()))]
    pub fn import(&mut self, incoming: Vec<Note>) -> Result<usize> {
        let incoming: Vec<Note> = incoming
            .into_iter()
            .map(|mut note| {
                note.links = normalize_links(&note.id, std::mem::take(&mut note.links));
                note.tags = normalize_tags(std::mem::take(&mut note.tags));
                note
            })
            .collect();

        let merged = transfer::merge_notes(&self.notes, &incoming);
        let previous = std::mem::replace(self.notes_mut(), merged);
        if let Err(e) = self.backend.put_all(&self.notes) {
            tracing::warn!(error = %e, "import persist failed, rolling back");
            *self.notes_mut() = previous;
            return Err(e);
        }

        tracing::info!(total = self.notes.len(), "import merged");
        Ok(self.notes.len())
    }

    /// Read an export file, merge it, and report what happened
    pub fn import_file(&mut self, path: &Path) -> Result<ImportReport> {
        let (incoming, mut report) = transfer::read_import(path)?;
        report.merged_total = self.import(incoming)?;
        Ok(report)
    }

    /// Render the collection as an export document
    pub fn export(&self) -> Result<String> {
        transfer::export_json(&self.notes)
    }

    /// Write a dated export file into `dir`
    pub fn export_to(&self, dir: &Path) -> Result<PathBuf> {
        transfer::write_export(dir, &self.notes, Utc::now())
    }

    /// Delete every note from memory and storage
    #[tracing::instrument(skip(self))]
    pub fn clear(&mut self) -> Result<usize> {
        let previous = std::mem::take(self.notes_mut());
        if let Err(e) = self.backend.clear() {
            tracing::warn!(error = %e, "clear failed, rolling back");
            *self.notes_mut() = previous;
            return Err(e);
        }
        Ok(previous.len())
    }
}
