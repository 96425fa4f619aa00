//! Cíqì Chronicles core library
//!
//! This crate provides the data layer for Cíqì Chronicles, a bilingual
//! timeline keeper for a personal collection of Chinese porcelain artifacts.
//!
//! # Architecture
//!
//! The [`Store`] owns the live collection of entries and is the only
//! component that touches the snapshot codec or the persistence adapter.
//! Both the persistence backend and the shared-snapshot source are injected
//! capabilities, so the whole data layer runs deterministically in tests.
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let mut store = Store::open_local(&config);
//!
//! // Add an entry
//! let entry = EntryDraft { title: "Ru Ware".into(), ..Default::default() }
//!     .into_entry(None);
//! store.upsert(entry)?;
//!
//! // Read the timeline in chronological order
//! let timeline = store.list();
//!
//! // Export a shareable link payload
//! let payload = store.export_snapshot()?;
//! ```
//!
//! # Modules
//!
//! - `store`: timeline owner and mutation interface (main entry point)
//! - `models`: entry, category, language, and draft types
//! - `codec`: URL-safe snapshot encoding and decoding
//! - `storage`: durable persistence behind a capability trait
//! - `share`: pending shared-snapshot capability
//! - `defaults`: the bundled reference timeline
//! - `config`: application configuration

pub mod codec;
pub mod config;
pub mod defaults;
pub mod models;
pub mod share;
pub mod storage;
pub mod store;

pub use codec::{decode, encode, DecodeError, EncodeError};
pub use config::{Config, STORAGE_KEY};
pub use models::{Category, Entry, EntryDraft, Language};
pub use share::{NoShare, PendingShare, ShareSource};
pub use storage::{FileStorage, MemoryStorage, PersistenceError, TimelineStorage};
pub use store::Store;
