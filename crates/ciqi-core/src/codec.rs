//! Snapshot codec
//!
//! Converts a timeline to and from a single URL-transportable string:
//! a JSON array of entries wrapped in URL-safe base64. Embedded data-URL
//! images are stripped before encoding so exported links stay short;
//! external image URLs pass through unchanged.

use base64::alphabet;
use base64::engine::{self, general_purpose, DecodePaddingMode, Engine as _};
use thiserror::Error;

use crate::models::Entry;

/// Marker that an image reference is an embedded payload rather than a URL
///
/// String-prefix check kept as-is for compatibility with existing shared
/// links; it does not generalize to other embedding schemes.
pub const EMBEDDED_IMAGE_PREFIX: &str = "data:";

// Encode without padding; links in the wild carry both padded and unpadded
// payloads, so decoding accepts either.
const SNAPSHOT_ENGINE: engine::GeneralPurpose = engine::GeneralPurpose::new(
    &alphabet::URL_SAFE,
    general_purpose::NO_PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Errors raised when a snapshot cannot be produced
#[derive(Debug, Error)]
pub enum EncodeError {
    /// An entry's ordering key cannot be represented in the snapshot
    #[error("entry '{id}' has a non-finite sort year and cannot be exported")]
    NonFiniteSortYear { id: String },

    /// Serialization failure
    #[error("failed to serialize timeline: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised when a snapshot cannot be read back
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Payload contains characters outside the snapshot alphabet
    #[error("snapshot is not valid base64: {0}")]
    Alphabet(#[from] base64::DecodeError),

    /// Payload decoded to bytes that are not UTF-8 text
    #[error("snapshot payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Payload text is not a JSON array of entries
    #[error("snapshot payload is not a timeline: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// True when an image reference is an embedded payload
pub fn is_embedded_image(image_url: &str) -> bool {
    image_url.starts_with(EMBEDDED_IMAGE_PREFIX)
}

/// Encode a timeline as a URL-safe snapshot string
///
/// Embedded images are replaced with empty references in the output; the
/// input collection is left untouched.
pub fn encode(entries: &[Entry]) -> Result<String, EncodeError> {
    if let Some(bad) = entries.iter().find(|e| !e.sort_year.is_finite()) {
        return Err(EncodeError::NonFiniteSortYear { id: bad.id.clone() });
    }

    let mut shareable = entries.to_vec();
    for entry in &mut shareable {
        if entry.image_url.as_deref().is_some_and(is_embedded_image) {
            entry.image_url = Some(String::new());
        }
    }

    let json = serde_json::to_string(&shareable)?;
    Ok(SNAPSHOT_ENGINE.encode(json))
}

/// Decode a snapshot string back into a timeline
///
/// All-or-nothing: either the whole collection parses or an error is
/// returned. No partial result is ever produced.
pub fn decode(payload: &str) -> Result<Vec<Entry>, DecodeError> {
    let bytes = SNAPSHOT_ENGINE.decode(payload.trim())?;
    let json = String::from_utf8(bytes)?;
    let entries: Vec<Entry> = serde_json::from_str(&json)?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_entries;
    use crate::models::Category;

    fn entry_with_image(id: &str, image_url: Option<&str>) -> Entry {
        Entry {
            id: id.to_string(),
            title: format!("Entry {}", id),
            title_zh: None,
            display_date: "1400 AD".to_string(),
            display_date_zh: None,
            sort_year: 1400.0,
            description: "notes".to_string(),
            description_zh: None,
            category: Category::Course,
            image_url: image_url.map(|u| u.to_string()),
            tags: None,
            tags_zh: None,
        }
    }

    #[test]
    fn test_round_trip_without_embedded_images() {
        let entries = default_entries();
        let decoded = decode(&encode(&entries).unwrap()).unwrap();
        assert_eq!(decoded, entries);
    }

    #[test]
    fn test_embedded_images_are_stripped() {
        let entries = vec![
            entry_with_image("a", Some("data:image/png;base64,iVBORw0KGgo")),
            entry_with_image("b", Some("https://example.com/pot.jpg")),
            entry_with_image("c", None),
        ];

        let decoded = decode(&encode(&entries).unwrap()).unwrap();
        assert_eq!(decoded[0].image_url.as_deref(), Some(""));
        assert_eq!(
            decoded[1].image_url.as_deref(),
            Some("https://example.com/pot.jpg")
        );
        assert_eq!(decoded[2].image_url, None);
        // everything else survives unchanged
        assert_eq!(decoded[1], entries[1]);
        // the input collection is not mutated
        assert!(entries[0]
            .image_url
            .as_deref()
            .unwrap()
            .starts_with("data:"));
    }

    #[test]
    fn test_decode_rejects_invalid_alphabet() {
        assert!(matches!(
            decode("not-valid-base64!!"),
            Err(DecodeError::Alphabet(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_array_payload() {
        let payload = SNAPSHOT_ENGINE.encode("{\"id\":\"solo\"}");
        assert!(matches!(decode(&payload), Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_decode_rejects_non_utf8_payload() {
        let payload = SNAPSHOT_ENGINE.encode([0xff, 0xfe, 0xfd]);
        assert!(matches!(decode(&payload), Err(DecodeError::Utf8(_))));
    }

    #[test]
    fn test_decode_accepts_padded_payloads() {
        let padded = engine::GeneralPurpose::new(&alphabet::URL_SAFE, general_purpose::PAD)
            .encode("[]");
        let entries = decode(&padded).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_encode_rejects_non_finite_sort_year() {
        let mut entry = entry_with_image("nan", None);
        entry.sort_year = f64::NAN;
        match encode(&[entry]) {
            Err(EncodeError::NonFiniteSortYear { id }) => assert_eq!(id, "nan"),
            other => panic!("expected NonFiniteSortYear, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_embedded_marker() {
        assert!(is_embedded_image("data:image/jpeg;base64,/9j/4AAQ"));
        assert!(!is_embedded_image("https://example.com/a.png"));
        assert!(!is_embedded_image(""));
    }
}
