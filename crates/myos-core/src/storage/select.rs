//! Backend selection

use std::path::Path;

use rusqlite::Connection;

use super::{sqlite, FlatFileBackend, NoteBackend, SqliteBackend, DB_FILE, FLAT_FILE};
use crate::config::BackendPreference;
use crate::error::{MyosError, Result};

/// Runtime check for whether the indexed backend can be used
pub trait CapabilityCheck {
    fn sqlite_available(&self, db_path: &Path) -> bool;
}

/// Default check: the database must open and accept the schema
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteCheck;

impl CapabilityCheck for SqliteCheck {
    fn sqlite_available(&self, db_path: &Path) -> bool {
        let conn = match Connection::open(db_path) {
            Ok(conn) => conn,
            Err(e) => {
                tracing::debug!(error = %e, "sqlite open failed");
                return false;
            }
        };
        match sqlite::create_schema(&conn) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, "sqlite schema check failed");
                false
            }
        }
    }
}

/// Choose and open the backend for a store directory.
///
/// Runs once per store open; the returned backend is kept for the session.
#[tracing::instrument(skip(store_dir, check), fields(store = %store_dir.display()))]
pub fn select_backend(
    store_dir: &Path,
    preference: BackendPreference,
    check: &dyn CapabilityCheck,
) -> Result<Box<dyn NoteBackend>> {
    let db_path = store_dir.join(DB_FILE);
    let flat = || -> Box<dyn NoteBackend> { Box::new(FlatFileBackend::new(store_dir.join(FLAT_FILE))) };

    match preference {
        BackendPreference::Flat => Ok(flat()),
        BackendPreference::Sqlite => {
            if !check.sqlite_available(&db_path) {
                return Err(MyosError::BackendUnavailable {
                    backend: "sqlite".to_string(),
                });
            }
            Ok(Box::new(SqliteBackend::open(&db_path)?))
        }
        BackendPreference::Auto => {
            if !check.sqlite_available(&db_path) {
                tracing::warn!("sqlite unavailable, using flat file storage");
                return Ok(flat());
            }
            match SqliteBackend::open(&db_path) {
                Ok(backend) => Ok(Box::new(backend)),
                Err(e) => {
                    tracing::warn!(error = %e, "sqlite open failed, using flat file storage");
                    Ok(flat())
                }
            }
        }
    }
}
