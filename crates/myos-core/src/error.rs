//! Error types and exit codes for myos
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/store error (missing store, unknown note, unusable backend)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for MyosError {
    fn from(err: rusqlite::Error) -> Self {
        MyosError::Storage {
            backend: "sqlite".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Errors that can occur during myos operations
#[derive(Error, Debug)]
pub enum MyosError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("note not found: {id}")]
    NoteNotFound { id: String },

    #[error("storage backend unavailable: {backend}")]
    BackendUnavailable { backend: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{backend} storage failed: {reason}")]
    Storage { backend: String, reason: String },

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl MyosError {
    /// Create an error for a failed storage write or read
    pub fn storage(backend: &str, error: impl std::fmt::Display) -> Self {
        MyosError::Storage {
            backend: backend.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed note operation
    pub fn note_operation(note_id: &str, operation: &str, error: impl std::fmt::Display) -> Self {
        MyosError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: format!("note {}", note_id),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        MyosError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        MyosError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a note id that does not resolve
    pub fn not_found(id: impl Into<String>) -> Self {
        MyosError::NoteNotFound { id: id.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MyosError::UsageError(_) | MyosError::InvalidValue { .. } => ExitCode::Usage,

            MyosError::StoreNotFound { .. }
            | MyosError::InvalidStore { .. }
            | MyosError::NoteNotFound { .. }
            | MyosError::BackendUnavailable { .. } => ExitCode::Data,

            MyosError::Io(_)
            | MyosError::Json(_)
            | MyosError::Toml(_)
            | MyosError::Storage { .. }
            | MyosError::FailedOperationWithTarget { .. }
            | MyosError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            MyosError::UsageError(_) => "usage_error",
            MyosError::InvalidValue { .. } => "invalid_value",
            MyosError::StoreNotFound { .. } => "store_not_found",
            MyosError::InvalidStore { .. } => "invalid_store",
            MyosError::NoteNotFound { .. } => "note_not_found",
            MyosError::BackendUnavailable { .. } => "backend_unavailable",
            MyosError::Io(_) => "io_error",
            MyosError::Json(_) => "json_error",
            MyosError::Toml(_) => "toml_error",
            MyosError::Storage { .. } => "storage_error",
            MyosError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            MyosError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for myos operations
pub type Result<T> = std::result::Result<T, MyosError>;
