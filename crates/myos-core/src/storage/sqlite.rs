//! SQLite note table

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{BackendKind, NoteBackend};
use crate::error::{MyosError, Result};
use crate::note::{Note, NoteType};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id TEXT PRIMARY KEY,
    title TEXT,
    content TEXT NOT NULL DEFAULT '',
    type TEXT NOT NULL,
    tags TEXT NOT NULL DEFAULT '[]',
    mood TEXT,
    source TEXT,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL,
    pinned INTEGER NOT NULL DEFAULT 0,
    archived INTEGER NOT NULL DEFAULT 0,
    links TEXT NOT NULL DEFAULT '[]'
);
CREATE INDEX IF NOT EXISTS idx_notes_created ON notes(created_at);
CREATE INDEX IF NOT EXISTS idx_notes_updated ON notes(updated_at);
CREATE INDEX IF NOT EXISTS idx_notes_pinned ON notes(pinned);
CREATE INDEX IF NOT EXISTS idx_notes_archived ON notes(archived);
CREATE INDEX IF NOT EXISTS idx_notes_type ON notes(type);

CREATE TABLE IF NOT EXISTS meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

const SELECT_COLUMNS: &str = "id, title, content, type, tags, mood, source, created_at, updated_at, pinned, archived, links";

/// Create tables and stamp the schema version
pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    let stored: Option<String> = conn
        .query_row(
            "SELECT value FROM meta WHERE key = 'schema_version'",
            [],
            |r| r.get(0),
        )
        .optional()?;

    match stored.and_then(|v| v.parse::<i32>().ok()) {
        Some(v) if v > CURRENT_SCHEMA_VERSION => {
            tracing::warn!(
                found = v,
                supported = CURRENT_SCHEMA_VERSION,
                "database schema is newer than this build"
            );
        }
        Some(v) if v == CURRENT_SCHEMA_VERSION => {}
        _ => {
            conn.execute(
                "INSERT OR REPLACE INTO meta (key, value) VALUES ('schema_version', ?1)",
                [CURRENT_SCHEMA_VERSION.to_string()],
            )?;
        }
    }

    Ok(())
}

/// Notes stored one row per record in a local SQLite database
#[derive(Debug)]
pub struct SqliteBackend {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteBackend {
    /// Open or create the database file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| {
            MyosError::storage(
                "sqlite",
                format!("failed to open database at {}: {}", path.display(), e),
            )
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| MyosError::storage("sqlite", format!("failed to enable WAL mode: {}", e)))?;

        create_schema(&conn)?;

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Database that lives only as long as this value
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;
        Ok(Self { conn, path: None })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn schema_version(&self) -> Result<Option<i32>> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM meta WHERE key = 'schema_version'",
                [],
                |r| r.get(0),
            )
            .optional()?;
        Ok(value.and_then(|v| v.parse().ok()))
    }

    pub fn count(&self) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM notes", [], |r| r.get(0))?;
        Ok(n.max(0) as usize)
    }
}

/// Raw column values, converted to a `Note` outside the row callback
struct NoteRow {
    id: String,
    title: Option<String>,
    content: String,
    note_type: String,
    tags: String,
    mood: Option<String>,
    source: Option<String>,
    created_at: i64,
    updated_at: i64,
    pinned: bool,
    archived: bool,
    links: String,
}

impl NoteRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            note_type: row.get(3)?,
            tags: row.get(4)?,
            mood: row.get(5)?,
            source: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
            pinned: row.get(9)?,
            archived: row.get(10)?,
            links: row.get(11)?,
        })
    }

    fn into_note(self) -> Result<Note> {
        let note_type = self.note_type.parse().unwrap_or_else(|_| {
            tracing::warn!(id = %self.id, value = %self.note_type, "unknown note type in database");
            NoteType::default()
        });

        Ok(Note {
            tags: serde_json::from_str(&self.tags)?,
            links: serde_json::from_str(&self.links)?,
            mood: self.mood.and_then(|m| m.parse().ok()),
            id: self.id,
            title: self.title,
            content: self.content,
            note_type,
            source: self.source,
            created_at: self.created_at,
            updated_at: self.updated_at,
            pinned: self.pinned,
            archived: self.archived,
        })
    }
}

fn upsert_note(conn: &Connection, note: &Note) -> Result<()> {
    let tags = serde_json::to_string(&note.tags)?;
    let links = serde_json::to_string(&note.links)?;
    let mood = note.mood.map(|m| m.to_string());

    conn.execute(
        "INSERT OR REPLACE INTO notes (id, title, content, type, tags, mood, source, created_at, updated_at, pinned, archived, links)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            &note.id,
            &note.title,
            &note.content,
            note.note_type.label(),
            tags,
            mood,
            &note.source,
            note.created_at,
            note.updated_at,
            note.pinned,
            note.archived,
            links,
        ],
    )
    .map_err(|e| MyosError::note_operation(&note.id, "store", e))?;

    Ok(())
}

impl NoteBackend for SqliteBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Sqlite
    }

    fn get_all(&self) -> Result<Vec<Note>> {
        let sql = format!(
            "SELECT {} FROM notes ORDER BY created_at DESC, id ASC",
            SELECT_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], NoteRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter().map(NoteRow::into_note).collect()
    }

    #[tracing::instrument(skip(self, notes), fields(count = notes.len()))]
    fn put_all(&mut self, notes: &[Note]) -> Result<()> {
        let tx = self.conn.transaction()?;
        for note in notes {
            upsert_note(&tx, note)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn put(&mut self, note: &Note) -> Result<()> {
        upsert_note(&self.conn, note)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM notes WHERE id = ?1", [id])
            .map_err(|e| MyosError::note_operation(id, "delete", e))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM notes", [])?;
        Ok(())
    }
}
