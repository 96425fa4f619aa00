//! In-memory timeline storage
//!
//! Holds the persisted payload in a cell instead of a file. Used by tests
//! that need deterministic persistence without touching the filesystem.

use std::cell::RefCell;

use crate::models::Entry;
use crate::storage::error::PersistenceResult;
use crate::storage::schema;
use crate::storage::TimelineStorage;

/// Timeline storage backed by process memory
#[derive(Default)]
pub struct MemoryStorage {
    payload: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a timeline, as if a previous session saved it
    pub fn seeded(entries: &[Entry]) -> Self {
        let storage = Self::new();
        storage
            .save(entries)
            .unwrap_or_else(|_| unreachable!("in-memory save cannot fail"));
        storage
    }

    /// The raw stored payload, for assertions
    pub fn payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }
}

impl TimelineStorage for MemoryStorage {
    fn save(&self, entries: &[Entry]) -> PersistenceResult<()> {
        let payload = schema::write_payload(entries)?;
        *self.payload.borrow_mut() = Some(payload);
        Ok(())
    }

    fn load(&self) -> PersistenceResult<Option<Vec<Entry>>> {
        match self.payload.borrow().as_deref() {
            Some(payload) => Ok(schema::read_payload(payload).ok()),
            None => Ok(None),
        }
    }

    fn clear(&self) -> PersistenceResult<()> {
        self.payload.borrow_mut().take();
        Ok(())
    }
}
