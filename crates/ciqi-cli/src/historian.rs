//! AI historian integration
//!
//! The text-enhancement collaborator used by the editing commands: given an
//! entry's title, date label, and current notes, it returns an expanded
//! description, historical context, and suggested tags. The store has no
//! knowledge of this module.

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "CIQI_API_KEY";

/// Divider the editor uses when folding generated context into notes
pub const CONTEXT_DIVIDER: &str = "--- AI HISTORIAN CONTEXT ---";

const API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Request timeout in seconds
const REQUEST_TIMEOUT: u64 = 30;

/// Structured result of a text-enhancement call
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Enhancement {
    pub expanded_description: String,
    pub historical_context: String,
    #[serde(default)]
    pub suggested_tags: Vec<String>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Ask the historian to expand an entry's notes
pub fn enhance_entry(title: &str, display_date: &str, current_notes: &str) -> Result<Enhancement> {
    let api_key = env::var(API_KEY_ENV)
        .with_context(|| format!("{} is not set; the AI historian needs an API key", API_KEY_ENV))?;

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT))
        .build()
        .context("Failed to build HTTP client")?;

    let prompt = format!(
        "The user is creating a timeline of Chinese porcelain (Cíqì).\n\
         Topic: {title}\n\
         Time Period: {display_date}\n\
         User Notes: {current_notes}\n\n\
         Act as an expert art historian. Expand on the user's notes, provide \
         historical context regarding design movements, and suggest tags. \
         Focus on aesthetics, kiln types (e.g., Jingdezhen, Longquan), and \
         cultural significance.\n\n\
         Respond with a single JSON object: string fields \
         \"expandedDescription\" and \"historicalContext\", and a string \
         array \"suggestedTags\" of 3-5 short tags."
    );

    let body = serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "systemInstruction": {
            "parts": [{ "text": "You are a world-class expert in Chinese art history and ceramics." }]
        },
        "generationConfig": { "responseMimeType": "application/json" }
    });

    let response = client
        .post(API_URL)
        .query(&[("key", api_key.as_str())])
        .json(&body)
        .send()
        .context("AI historian request failed")?
        .error_for_status()
        .context("AI historian request was rejected")?;

    let response: GenerateResponse = response
        .json()
        .context("AI historian response was not JSON")?;

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| anyhow!("AI historian returned an empty response"))?;

    parse_enhancement(&text)
}

/// Parse the model's JSON payload into an [`Enhancement`]
pub fn parse_enhancement(text: &str) -> Result<Enhancement> {
    serde_json::from_str(text.trim()).context("AI historian returned malformed JSON")
}

/// Fold an enhancement into an entry's notes
pub fn apply_to_description(description: &str, enhancement: &Enhancement) -> String {
    let lead = if description.is_empty() {
        String::new()
    } else {
        format!("{}\n\n", description)
    };
    format!(
        "{lead}{CONTEXT_DIVIDER}\n{}\n\nHistorical Context: {}",
        enhancement.expanded_description, enhancement.historical_context
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enhancement() {
        let text = r#"{
            "expandedDescription": "Ru ware was produced for the Northern Song court.",
            "historicalContext": "Emperor Huizong's reign prized understated glazes.",
            "suggestedTags": ["song", "ru-ware", "celadon"]
        }"#;

        let enhancement = parse_enhancement(text).unwrap();
        assert!(enhancement.expanded_description.starts_with("Ru ware"));
        assert_eq!(enhancement.suggested_tags.len(), 3);
    }

    #[test]
    fn test_parse_enhancement_defaults_missing_tags() {
        let text = r#"{
            "expandedDescription": "Notes.",
            "historicalContext": "Context."
        }"#;

        let enhancement = parse_enhancement(text).unwrap();
        assert!(enhancement.suggested_tags.is_empty());
    }

    #[test]
    fn test_parse_enhancement_rejects_malformed_payload() {
        assert!(parse_enhancement("not json").is_err());
        assert!(parse_enhancement("{\"expandedDescription\": 42}").is_err());
    }

    #[test]
    fn test_apply_to_description_appends_under_divider() {
        let enhancement = Enhancement {
            expanded_description: "More detail.".to_string(),
            historical_context: "The kilns at Jingdezhen.".to_string(),
            suggested_tags: vec![],
        };

        let folded = apply_to_description("My notes.", &enhancement);
        assert_eq!(
            folded,
            "My notes.\n\n--- AI HISTORIAN CONTEXT ---\nMore detail.\n\nHistorical Context: The kilns at Jingdezhen."
        );

        let from_empty = apply_to_description("", &enhancement);
        assert!(from_empty.starts_with(CONTEXT_DIVIDER));
    }
}
