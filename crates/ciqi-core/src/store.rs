//! Unified timeline interface
//!
//! The `Store` owns the live collection of entries and mediates every read
//! and mutation. It is the only component that talks to the snapshot codec
//! and the persistence adapter.
//!
//! ## Initialization
//!
//! Run once when the store opens, in precedence order:
//!
//! 1. A pending shared snapshot, when present and decodable
//! 2. The persisted timeline
//! 3. The bundled default timeline
//!
//! Initialization always resolves to some collection; a malformed shared
//! snapshot or unreadable persisted state is logged and skipped, never
//! surfaced as a failure.
//!
//! ## Write-back
//!
//! Mutations update the in-memory collection first, then persist the whole
//! timeline. A failed write-back leaves the in-memory state authoritative;
//! the next successful mutation rewrites the full timeline, which is the
//! implicit retry.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::open_local(&config);
//!
//! store.upsert(entry)?;
//! let timeline = store.list();
//! let link_payload = store.export_snapshot()?;
//! ```

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::codec::{self, EncodeError};
use crate::config::Config;
use crate::defaults;
use crate::models::Entry;
use crate::share::{NoShare, ShareSource};
use crate::storage::{FileStorage, PersistenceResult, TimelineStorage};

/// Sole owner of the live timeline
pub struct Store {
    /// Current collection, in insertion order
    entries: Vec<Entry>,
    /// Durable storage capability
    storage: Box<dyn TimelineStorage>,
    /// Pending shared-snapshot capability
    share: Box<dyn ShareSource>,
}

impl Store {
    /// Open a store over injected capabilities
    ///
    /// Never fails: initialization falls through shared snapshot, persisted
    /// timeline, and bundled defaults until something is adopted.
    pub fn open(storage: Box<dyn TimelineStorage>, share: Box<dyn ShareSource>) -> Self {
        let entries = initial_entries(storage.as_ref(), share.as_ref());
        Self {
            entries,
            storage,
            share,
        }
    }

    /// Open a store over file storage in the configured data directory,
    /// with no pending shared snapshot
    pub fn open_local(config: &Config) -> Self {
        Self::open(Box::new(FileStorage::new(config)), Box::new(NoShare))
    }

    /// The timeline in chronological order
    ///
    /// Sorted by sort year ascending; entries with equal sort years keep
    /// their relative insertion order. The stored order is not mutated.
    pub fn list(&self) -> Vec<Entry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| {
            a.sort_year
                .partial_cmp(&b.sort_year)
                .unwrap_or(Ordering::Equal)
        });
        sorted
    }

    /// Look up an entry by id
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The collection in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace an entry, keyed by id
    ///
    /// An existing entry with the same id is replaced wholesale; otherwise
    /// the entry is appended. The in-memory change always takes effect; an
    /// `Err` only reports that the write-back failed.
    pub fn upsert(&mut self, entry: Entry) -> PersistenceResult<()> {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
        self.persist()
    }

    /// Remove the entry with the given id
    ///
    /// A no-op when the id is absent; removal is irreversible within a
    /// session. As with [`Store::upsert`], an `Err` only reports a failed
    /// write-back.
    pub fn remove(&mut self, id: &str) -> PersistenceResult<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Replace the timeline with the bundled default set
    ///
    /// Clears the persisted timeline and the pending shared snapshot, so a
    /// subsequent fresh initialization adopts the defaults rather than
    /// re-reading stale state.
    pub fn reset_to_defaults(&mut self) -> PersistenceResult<()> {
        self.entries = defaults::default_entries();
        self.share.clear();
        self.storage.clear()
    }

    /// Encode the current timeline as a shareable snapshot string
    ///
    /// Does not mutate state; embedded images are stripped in the output
    /// only.
    pub fn export_snapshot(&self) -> Result<String, EncodeError> {
        codec::encode(&self.entries)
    }

    /// Write the current timeline to storage
    ///
    /// Called automatically after every mutation; also useful to persist an
    /// adopted shared snapshot immediately.
    pub fn persist(&self) -> PersistenceResult<()> {
        if let Err(err) = self.storage.save(&self.entries) {
            warn!(%err, "timeline kept in memory; write-back failed");
            return Err(err);
        }
        Ok(())
    }
}

/// Resolve the initial collection: shared snapshot, then persisted
/// timeline, then bundled defaults
fn initial_entries(storage: &dyn TimelineStorage, share: &dyn ShareSource) -> Vec<Entry> {
    if let Some(payload) = share.read().filter(|p| !p.is_empty()) {
        match codec::decode(&payload) {
            Ok(entries) => {
                debug!(count = entries.len(), "adopted shared snapshot");
                return entries;
            }
            Err(err) => warn!(%err, "ignoring malformed shared snapshot"),
        }
    }

    match storage.load() {
        Ok(Some(entries)) => {
            debug!(count = entries.len(), "loaded persisted timeline");
            return entries;
        }
        Ok(None) => {}
        Err(err) => warn!(%err, "could not read persisted timeline"),
    }

    defaults::default_entries()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, EntryDraft};
    use crate::share::PendingShare;
    use crate::storage::{MemoryStorage, PersistenceError, SCHEMA_VERSION};
    use std::rc::Rc;

    fn draft(title: &str, sort_year: f64) -> EntryDraft {
        EntryDraft {
            title: title.to_string(),
            display_date: format!("{} AD", sort_year),
            sort_year,
            description: "notes".to_string(),
            category: Category::Course,
            image_url: None,
            tags: vec![],
        }
    }

    fn in_memory_store() -> Store {
        Store::open(Box::new(MemoryStorage::new()), Box::new(NoShare))
    }

    #[test]
    fn test_open_adopts_defaults_when_nothing_stored() {
        let store = in_memory_store();
        assert_eq!(store.entries(), &defaults::default_entries()[..]);
    }

    #[test]
    fn test_open_prefers_persisted_over_defaults() {
        let entries = vec![draft("Only Entry", 1500.0).into_entry(None)];
        let storage = MemoryStorage::seeded(&entries);

        let store = Store::open(Box::new(storage), Box::new(NoShare));
        assert_eq!(store.entries(), &entries[..]);
    }

    #[test]
    fn test_open_prefers_shared_snapshot_over_persisted() {
        let persisted = vec![draft("Persisted", 1500.0).into_entry(None)];
        let shared = vec![draft("Shared", 1600.0).into_entry(None)];
        let payload = codec::encode(&shared).unwrap();

        let store = Store::open(
            Box::new(MemoryStorage::seeded(&persisted)),
            Box::new(PendingShare::new(payload)),
        );
        assert_eq!(store.entries(), &shared[..]);
    }

    #[test]
    fn test_malformed_shared_snapshot_falls_back_to_persisted() {
        let persisted = vec![draft("Persisted", 1500.0).into_entry(None)];

        let store = Store::open(
            Box::new(MemoryStorage::seeded(&persisted)),
            Box::new(PendingShare::new("not-valid-base64!!")),
        );
        assert_eq!(store.entries(), &persisted[..]);
    }

    #[test]
    fn test_empty_shared_snapshot_is_skipped() {
        let store = Store::open(Box::new(MemoryStorage::new()), Box::new(PendingShare::new("")));
        assert_eq!(store.len(), defaults::default_entries().len());
    }

    #[test]
    fn test_list_is_sorted_and_stable() {
        let mut store = in_memory_store();
        store.reset_to_defaults().unwrap();

        let first = draft("First at 1500", 1500.0).into_entry(None);
        let second = draft("Second at 1500", 1500.0).into_entry(None);
        store.upsert(first.clone()).unwrap();
        store.upsert(second.clone()).unwrap();

        let listed = store.list();
        let years: Vec<f64> = listed.iter().map(|e| e.sort_year).collect();
        let mut expected = years.clone();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(years, expected);

        // equal sort years keep insertion order
        let pos_first = listed.iter().position(|e| e.id == first.id).unwrap();
        let pos_second = listed.iter().position(|e| e.id == second.id).unwrap();
        assert!(pos_first < pos_second);

        // calling list twice returns identical sequences and does not
        // disturb the stored order
        assert_eq!(store.list(), listed);
        assert_eq!(store.entries().last().unwrap().id, second.id);
    }

    #[test]
    fn test_upsert_appends_then_replaces() {
        let mut store = in_memory_store();
        let baseline = store.len();

        let entry = draft("New Entry", 1234.0).into_entry(None);
        store.upsert(entry.clone()).unwrap();
        assert_eq!(store.len(), baseline + 1);

        let mut replacement = entry.clone();
        replacement.title = "Renamed Entry".to_string();
        replacement.sort_year = 4321.0;
        store.upsert(replacement.clone()).unwrap();

        assert_eq!(store.len(), baseline + 1);
        let stored = store.get(&entry.id).unwrap();
        assert_eq!(stored, &replacement);
    }

    #[test]
    fn test_remove_deletes_and_ignores_absent_ids() {
        let mut store = in_memory_store();
        let entry = draft("Doomed", 1234.0).into_entry(None);
        store.upsert(entry.clone()).unwrap();
        let size = store.len();

        store.remove(&entry.id).unwrap();
        assert_eq!(store.len(), size - 1);
        assert!(store.get(&entry.id).is_none());
        assert!(store.list().iter().all(|e| e.id != entry.id));

        // absent id: no error, no state change
        let before = store.list();
        store.remove("no-such-id").unwrap();
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_mutations_write_back() {
        let storage = Rc::new(MemoryStorage::new());
        let mut store = Store::open(Box::new(storage.clone()), Box::new(NoShare));

        assert!(storage.payload().is_none());

        store.upsert(draft("Saved", 1.0).into_entry(None)).unwrap();
        let payload = storage.payload().unwrap();
        assert!(payload.contains(&format!("\"schemaVersion\":{}", SCHEMA_VERSION)));
        assert!(payload.contains("Saved"));
    }

    #[test]
    fn test_write_back_failure_keeps_memory_authoritative() {
        struct FailingStorage;

        impl TimelineStorage for FailingStorage {
            fn save(&self, _entries: &[Entry]) -> PersistenceResult<()> {
                Err(PersistenceError::Unavailable("storage disabled".into()))
            }

            fn load(&self) -> PersistenceResult<Option<Vec<Entry>>> {
                Ok(None)
            }

            fn clear(&self) -> PersistenceResult<()> {
                Ok(())
            }
        }

        let mut store = Store::open(Box::new(FailingStorage), Box::new(NoShare));
        let entry = draft("Unsaved", 1.0).into_entry(None);

        let result = store.upsert(entry.clone());
        assert!(result.is_err());
        // the mutation still took effect in memory
        assert!(store.get(&entry.id).is_some());
    }

    #[test]
    fn test_reset_restores_defaults_and_clears_everything() {
        let storage = Rc::new(MemoryStorage::new());
        let share = Rc::new(PendingShare::new(
            codec::encode(&[draft("Shared", 1.0).into_entry(None)]).unwrap(),
        ));

        let mut store = Store::open(Box::new(storage.clone()), Box::new(share.clone()));
        assert_eq!(store.len(), 1);

        store.reset_to_defaults().unwrap();
        assert_eq!(store.entries(), &defaults::default_entries()[..]);
        assert!(storage.payload().is_none());

        // a simulated reload over the same capabilities must not re-adopt
        // the shared snapshot
        let reloaded = Store::open(Box::new(storage.clone()), Box::new(share.clone()));
        assert_eq!(reloaded.entries(), &defaults::default_entries()[..]);
    }

    #[test]
    fn test_export_snapshot_round_trips_and_leaves_state_alone() {
        let store = in_memory_store();
        let before = store.list();

        let payload = store.export_snapshot().unwrap();
        let decoded = codec::decode(&payload).unwrap();

        assert_eq!(decoded, store.entries());
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_export_rejects_non_finite_sort_year() {
        let mut store = in_memory_store();
        let mut entry = draft("Bad", 1.0).into_entry(None);
        entry.sort_year = f64::INFINITY;
        // upsert does not validate; export does
        let _ = store.upsert(entry);
        assert!(store.export_snapshot().is_err());
    }

    #[test]
    fn test_new_earliest_entry_sorts_first_and_removal_restores_order() {
        let mut store = in_memory_store();
        let original = store.list();

        let earliest = draft("Neolithic Proto-Porcelain", -5000.0).into_entry(None);
        store.upsert(earliest.clone()).unwrap();
        assert_eq!(store.list()[0].id, earliest.id);

        store.remove(&earliest.id).unwrap();
        assert_eq!(store.list(), original);
    }
}
