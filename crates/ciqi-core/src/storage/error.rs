//! Persistence error handling
//!
//! Typed errors for storage operations, classified from the underlying I/O
//! failure so callers can print a useful warning.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting the timeline
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Permission denied accessing path
    #[error("Permission denied: cannot access '{path}'. Check file permissions.")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Disk is full or quota exceeded
    #[error("Disk full or quota exceeded while writing to '{path}'.")]
    DiskFull {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read the stored timeline
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write the stored timeline
    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Atomic write failed during rename
    #[error("Atomic write failed: could not rename '{from}' to '{to}': {source}")]
    AtomicWriteFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Storage backend rejected the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Timeline could not be serialized for storage
    #[error("Failed to serialize timeline: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl PersistenceError {
    /// Classify an I/O error with path context
    pub fn from_io(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => PersistenceError::PermissionDenied {
                path,
                source: error,
            },
            _ if is_disk_full_error(&error) => PersistenceError::DiskFull {
                path,
                source: error,
            },
            _ => PersistenceError::WriteError {
                path,
                source: error,
            },
        }
    }

    /// A hint for the user on how to get persistence working again
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            PersistenceError::DiskFull { .. } => Some("Free up disk space and try again."),
            PersistenceError::PermissionDenied { .. } => {
                Some("Check file and directory permissions on the data directory.")
            }
            PersistenceError::Unavailable(_) => {
                Some("Your edits are kept in memory for this session only.")
            }
            _ => None,
        }
    }
}

/// Check if an I/O error indicates a disk full condition
fn is_disk_full_error(error: &io::Error) -> bool {
    let msg = error.to_string().to_lowercase();
    msg.contains("no space left")
        || msg.contains("disk full")
        || msg.contains("quota exceeded")
        || msg.contains("not enough space")
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;
