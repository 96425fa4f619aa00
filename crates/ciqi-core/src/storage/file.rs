//! File-backed timeline storage
//!
//! One JSON file named after the fixed storage key, written atomically
//! (write to temp file, sync, rename) so the file is never left in a
//! partially-written state.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::Config;
use crate::models::Entry;
use crate::storage::error::{PersistenceError, PersistenceResult};
use crate::storage::schema;
use crate::storage::TimelineStorage;

/// Timeline storage backed by a single JSON file
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage under the configured data directory
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.timeline_path(),
        }
    }

    /// Storage at an explicit path
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a stored timeline exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl TimelineStorage for FileStorage {
    fn save(&self, entries: &[Entry]) -> PersistenceResult<()> {
        let payload = schema::write_payload(entries)?;
        atomic_write(&self.path, payload.as_bytes())
    }

    fn load(&self) -> PersistenceResult<Option<Vec<Entry>>> {
        let payload = match fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(PersistenceError::ReadError {
                    path: self.path.clone(),
                    source: err,
                })
            }
        };

        match schema::read_payload(&payload) {
            Ok(entries) => Ok(Some(entries)),
            Err(err) => {
                // corrupt persisted state reads as absent, never fatal
                warn!(path = %self.path.display(), %err, "stored timeline is corrupt; ignoring it");
                Ok(None)
            }
        }
    }

    fn clear(&self) -> PersistenceResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(PersistenceError::from_io(err, self.path.clone())),
        }
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
fn atomic_write(path: &Path, data: &[u8]) -> PersistenceResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| PersistenceError::from_io(err, parent.to_path_buf()))?;
    }

    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)
        .map_err(|err| PersistenceError::from_io(err, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|err| PersistenceError::from_io(err, temp_path.clone()))?;

    file.sync_all()
        .map_err(|err| PersistenceError::from_io(err, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|err| PersistenceError::AtomicWriteFailed {
        from: temp_path.clone(),
        to: path.to_path_buf(),
        source: err,
    })?;

    Ok(())
}
