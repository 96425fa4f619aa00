//! Persisted payload layout
//!
//! The stored timeline is a versioned JSON envelope:
//!
//! ```json
//! { "schemaVersion": 1, "entries": [ ... ] }
//! ```
//!
//! Older timelines were stored as a bare array of entries with no version
//! tag; reading still accepts that layout so existing data migrates on the
//! next write.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Entry;

/// Current persisted-payload schema version
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeRef<'a> {
    schema_version: u32,
    entries: &'a [Entry],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    schema_version: u32,
    entries: Vec<Entry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Stored {
    Versioned(Envelope),
    Legacy(Vec<Entry>),
}

/// Serialize a timeline into the persisted payload form
pub fn write_payload(entries: &[Entry]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&EnvelopeRef {
        schema_version: SCHEMA_VERSION,
        entries,
    })
}

/// Parse a persisted payload, accepting both the versioned envelope and the
/// legacy bare-array layout
pub fn read_payload(payload: &str) -> Result<Vec<Entry>, serde_json::Error> {
    match serde_json::from_str(payload)? {
        Stored::Versioned(envelope) => {
            if envelope.schema_version > SCHEMA_VERSION {
                warn!(
                    stored = envelope.schema_version,
                    supported = SCHEMA_VERSION,
                    "persisted timeline has a newer schema version; reading anyway"
                );
            }
            Ok(envelope.entries)
        }
        Stored::Legacy(entries) => Ok(entries),
    }
}
