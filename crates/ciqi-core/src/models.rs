//! Data models for Cíqì Chronicles
//!
//! Defines the timeline entry, its category, and the bilingual field
//! resolution rules. Serde field names match the wire format used by shared
//! links and persisted timelines, so old payloads keep decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Classification of a timeline entry
///
/// Display-only; no behavioral difference between variants.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Lecture / recitation material
    #[default]
    Course,
    /// Family history, personal notes
    Personal,
    /// General historical context
    Historical,
}

impl Category {
    /// Display label in the given language
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Category::Course, Language::En) => "Lecture / Recitation",
            (Category::Course, Language::Zh) => "课程",
            (Category::Personal, Language::En) => "Personal / Interests",
            (Category::Personal, Language::Zh) => "个人",
            (Category::Historical, Language::En) => "Historical Context",
            (Category::Historical, Language::Zh) => "历史背景",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "course" => Ok(Category::Course),
            "personal" => Ok(Category::Personal),
            "historical" => Ok(Category::Historical),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown category name
#[derive(Debug, Clone, Error)]
#[error("unknown category '{0}' (expected 'course', 'personal', or 'historical')")]
pub struct CategoryParseError(String);

/// Display language
///
/// Chinese is the secondary-language slot on entries; fields without a
/// Chinese variant fall back to the primary text.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Zh => write!(f, "zh"),
            Language::En => write!(f, "en"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zh" => Ok(Language::Zh),
            "en" => Ok(Language::En),
            _ => Err(LanguageParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown language code
#[derive(Debug, Clone, Error)]
#[error("unknown language '{0}' (expected 'zh' or 'en')")]
pub struct LanguageParseError(String);

/// One timeline item: an artifact record with bilingual text, a date label,
/// a numeric ordering key, a category, and an optional image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Opaque unique identifier, stable for the entry's lifetime
    pub id: String,
    /// Primary-language title
    pub title: String,
    /// Chinese title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_zh: Option<String>,
    /// Human-readable date label, e.g. "1420 AD" (not used for ordering)
    #[serde(rename = "year")]
    pub display_date: String,
    /// Chinese date label
    #[serde(rename = "yearZh", default, skip_serializing_if = "Option::is_none")]
    pub display_date_zh: Option<String>,
    /// Numeric ordering key; the sole basis for chronological order
    pub sort_year: f64,
    /// Narrative text
    pub description: String,
    /// Chinese narrative text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_zh: Option<String>,
    /// Entry classification
    #[serde(rename = "type")]
    pub category: Category,
    /// External URL or embedded data-URL image payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Short labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Chinese short labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_zh: Option<Vec<String>>,
}

impl Entry {
    /// Title in the given language, falling back to the primary title
    pub fn title_in(&self, language: Language) -> &str {
        match language {
            Language::Zh => self.title_zh.as_deref().unwrap_or(&self.title),
            Language::En => &self.title,
        }
    }

    /// Date label in the given language, falling back to the primary label
    pub fn display_date_in(&self, language: Language) -> &str {
        match language {
            Language::Zh => self.display_date_zh.as_deref().unwrap_or(&self.display_date),
            Language::En => &self.display_date,
        }
    }

    /// Description in the given language, falling back to the primary text
    pub fn description_in(&self, language: Language) -> &str {
        match language {
            Language::Zh => self.description_zh.as_deref().unwrap_or(&self.description),
            Language::En => &self.description,
        }
    }

    /// Tags in the given language
    ///
    /// Chinese falls back to the primary tags when no Chinese tags exist.
    /// Absent tags resolve to an empty slice, never a fault.
    pub fn tags_in(&self, language: Language) -> &[String] {
        let tags = match language {
            Language::Zh => self
                .tags_zh
                .as_deref()
                .filter(|t| !t.is_empty())
                .or(self.tags.as_deref()),
            Language::En => self.tags.as_deref(),
        };
        tags.unwrap_or(&[])
    }

    /// True when the entry carries an image reference (possibly empty)
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|u| !u.is_empty())
    }
}

/// Generate a fresh entry id
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// Deterministic placeholder image reference derived from an entry id
pub fn placeholder_image(id: &str) -> String {
    format!("https://picsum.photos/seed/{}/400/300", id)
}

/// An editor submission, before it becomes a full [`Entry`]
///
/// The draft carries primary-language fields only. Localized fields are
/// filled by [`EntryDraft::into_entry`]: preserved from the entry being
/// edited when present, otherwise seeded from the primary text.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub title: String,
    pub display_date: String,
    pub sort_year: f64,
    pub description: String,
    pub category: Category,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
}

impl EntryDraft {
    /// Build the final entry
    ///
    /// With `existing` set (an edit), the entry keeps its id and its
    /// localized fields. Without it (a creation), a fresh id is assigned and
    /// a missing image falls back to a placeholder derived from that id; an
    /// edited entry with the image removed keeps an empty reference instead.
    pub fn into_entry(self, existing: Option<&Entry>) -> Entry {
        let id = match existing {
            Some(entry) => entry.id.clone(),
            None => new_entry_id(),
        };

        let image_url = match self.image_url.filter(|url| !url.is_empty()) {
            Some(url) => url,
            None if existing.is_none() => placeholder_image(&id),
            None => String::new(),
        };

        Entry {
            title_zh: existing
                .and_then(|e| e.title_zh.clone())
                .or_else(|| Some(self.title.clone())),
            display_date_zh: existing
                .and_then(|e| e.display_date_zh.clone())
                .or_else(|| Some(self.display_date.clone())),
            description_zh: existing
                .and_then(|e| e.description_zh.clone())
                .or_else(|| Some(self.description.clone())),
            tags_zh: existing
                .and_then(|e| e.tags_zh.clone())
                .or_else(|| Some(Vec::new())),
            id,
            title: self.title,
            display_date: self.display_date,
            sort_year: self.sort_year,
            description: self.description,
            category: self.category,
            image_url: Some(image_url),
            tags: Some(self.tags),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> Entry {
        Entry {
            id: "xuande-stem-cup".to_string(),
            title: "Xuande Stem Cup".to_string(),
            title_zh: Some("宣德高足杯".to_string()),
            display_date: "1426 AD".to_string(),
            display_date_zh: None,
            sort_year: 1426.0,
            description: "Imperial blue-and-white from the Jingdezhen kilns.".to_string(),
            description_zh: None,
            category: Category::Course,
            image_url: Some("https://example.com/cup.jpg".to_string()),
            tags: Some(vec!["ming".to_string(), "jingdezhen".to_string()]),
            tags_zh: None,
        }
    }

    #[test]
    fn test_title_fallback() {
        let mut entry = sample_entry();
        assert_eq!(entry.title_in(Language::Zh), "宣德高足杯");
        assert_eq!(entry.title_in(Language::En), "Xuande Stem Cup");

        entry.title_zh = None;
        assert_eq!(entry.title_in(Language::Zh), "Xuande Stem Cup");
    }

    #[test]
    fn test_date_and_description_fallback() {
        let entry = sample_entry();
        assert_eq!(entry.display_date_in(Language::Zh), "1426 AD");
        assert_eq!(
            entry.description_in(Language::Zh),
            "Imperial blue-and-white from the Jingdezhen kilns."
        );
    }

    #[test]
    fn test_tags_fallback_to_primary() {
        let mut entry = sample_entry();
        assert_eq!(entry.tags_in(Language::Zh), ["ming", "jingdezhen"]);

        entry.tags_zh = Some(vec!["明代".to_string()]);
        assert_eq!(entry.tags_in(Language::Zh), ["明代"]);

        entry.tags = None;
        entry.tags_zh = None;
        assert!(entry.tags_in(Language::En).is_empty());
        assert!(entry.tags_in(Language::Zh).is_empty());
    }

    #[test]
    fn test_wire_field_names() {
        let entry = sample_entry();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"sortYear\":1426.0"));
        assert!(json.contains("\"year\":\"1426 AD\""));
        assert!(json.contains("\"titleZh\""));
        assert!(json.contains("\"type\":\"COURSE\""));
        assert!(json.contains("\"imageUrl\""));
        // absent localized fields stay off the wire
        assert!(!json.contains("yearZh"));
        assert!(!json.contains("descriptionZh"));
    }

    #[test]
    fn test_legacy_payload_decodes() {
        // minimal shape produced by old versions: numeric id, no localized
        // fields, no tags
        let json = r#"{
            "id": "1700000000000",
            "title": "Ru Ware Basin",
            "year": "c. 1100",
            "sortYear": 1100,
            "description": "Sky-blue glaze.",
            "type": "HISTORICAL"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "1700000000000");
        assert_eq!(entry.category, Category::Historical);
        assert!(entry.title_zh.is_none());
        assert!(entry.image_url.is_none());
        assert!(entry.tags_in(Language::Zh).is_empty());
    }

    #[test]
    fn test_draft_creates_with_placeholder_image() {
        let draft = EntryDraft {
            title: "Kangxi Famille Verte".to_string(),
            display_date: "1690 AD".to_string(),
            sort_year: 1690.0,
            description: "Five-color overglaze enamels.".to_string(),
            category: Category::Course,
            image_url: None,
            tags: vec!["qing".to_string()],
        };

        let entry = draft.into_entry(None);
        assert!(!entry.id.is_empty());
        assert_eq!(entry.image_url, Some(placeholder_image(&entry.id)));
        // localized slots seeded from primary text
        assert_eq!(entry.title_zh.as_deref(), Some("Kangxi Famille Verte"));
        assert_eq!(entry.display_date_zh.as_deref(), Some("1690 AD"));
        assert_eq!(entry.tags_zh.as_deref(), Some(&[][..]));
    }

    #[test]
    fn test_draft_edit_preserves_id_and_localized_fields() {
        let original = sample_entry();
        let draft = EntryDraft {
            title: "Xuande Stem Cup (revised)".to_string(),
            display_date: original.display_date.clone(),
            sort_year: original.sort_year,
            description: "Revised notes.".to_string(),
            category: original.category,
            image_url: original.image_url.clone(),
            tags: vec!["ming".to_string()],
        };

        let edited = draft.into_entry(Some(&original));
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.title, "Xuande Stem Cup (revised)");
        // prior Chinese title survives the edit
        assert_eq!(edited.title_zh, original.title_zh);
        // missing Chinese description is seeded from the new primary text
        assert_eq!(edited.description_zh.as_deref(), Some("Revised notes."));
    }

    #[test]
    fn test_draft_edit_allows_image_removal() {
        let original = sample_entry();
        let draft = EntryDraft {
            title: original.title.clone(),
            display_date: original.display_date.clone(),
            sort_year: original.sort_year,
            description: original.description.clone(),
            category: original.category,
            image_url: None,
            tags: vec![],
        };

        let edited = draft.into_entry(Some(&original));
        assert_eq!(edited.image_url.as_deref(), Some(""));
        assert!(edited.image().is_none());
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = new_entry_id();
        let b = new_entry_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        assert_eq!(placeholder_image("abc"), placeholder_image("abc"));
        assert_ne!(placeholder_image("abc"), placeholder_image("def"));
    }

    #[test]
    fn test_category_parsing_and_labels() {
        assert_eq!("course".parse::<Category>().unwrap(), Category::Course);
        assert_eq!("Personal".parse::<Category>().unwrap(), Category::Personal);
        assert!("dynasty".parse::<Category>().is_err());
        assert_eq!(Category::Historical.label(Language::En), "Historical Context");
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("zh".parse::<Language>().unwrap(), Language::Zh);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::Zh);
    }

    #[test]
    fn test_entry_serialization_round_trip() {
        let entry = sample_entry();
        let json = serde_json::to_string(&entry).unwrap();
        let decoded: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, decoded);
    }
}
