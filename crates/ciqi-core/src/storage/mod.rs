//! Persistence layer
//!
//! Durable storage of the full timeline under one fixed key. The store talks
//! to a [`TimelineStorage`] capability rather than a concrete backend, so
//! tests run against [`MemoryStorage`] while the CLI uses [`FileStorage`].
//!
//! Persistence is best-effort by design: the in-memory timeline is
//! authoritative, and a failed write-back surfaces as a warning, never as a
//! lost mutation.

pub mod error;
pub mod file;
pub mod memory;
pub mod schema;

pub use error::{PersistenceError, PersistenceResult};
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use schema::SCHEMA_VERSION;

use std::rc::Rc;

use crate::models::Entry;

/// Durable storage for the timeline
pub trait TimelineStorage {
    /// Overwrite the stored timeline
    fn save(&self, entries: &[Entry]) -> PersistenceResult<()>;

    /// Read the stored timeline
    ///
    /// `None` when nothing is stored or the stored content cannot be parsed;
    /// corrupt state is never fatal.
    fn load(&self) -> PersistenceResult<Option<Vec<Entry>>>;

    /// Remove the stored timeline
    fn clear(&self) -> PersistenceResult<()>;
}

impl<S: TimelineStorage> TimelineStorage for Rc<S> {
    fn save(&self, entries: &[Entry]) -> PersistenceResult<()> {
        (**self).save(entries)
    }

    fn load(&self) -> PersistenceResult<Option<Vec<Entry>>> {
        (**self).load()
    }

    fn clear(&self) -> PersistenceResult<()> {
        (**self).clear()
    }
}
