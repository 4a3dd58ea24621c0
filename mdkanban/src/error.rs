//! Error types for the kanban engine

use std::path::PathBuf;
use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
///
/// Position-addressed mutations never produce an error for an unknown column
/// or index; they report [`crate::Outcome::Unchanged`] instead. The variants
/// here are reserved for storage failures and structurally wrong requests.
#[derive(Debug, Error)]
pub enum KanbanError {
    /// The board location could not be read
    #[error("failed to read board {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The board could not be persisted; the in-memory board is kept as is
    #[error("failed to write board {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A cross-board transfer named a source column the board does not have
    #[error("source column \"{column}\" not found in {location}")]
    SourceColumnNotFound { column: String, location: PathBuf },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    /// Create a read error for the given location
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for the given location
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True when the board location does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }

    /// True when the error came from persisting a board
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}
