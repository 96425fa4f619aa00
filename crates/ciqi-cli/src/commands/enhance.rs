//! AI historian command handler

use anyhow::Result;

use ciqi_core::{Language, Store};

use crate::historian;
use crate::output::Output;

/// Expand an entry's notes with generated historical context
pub fn enhance(store: &mut Store, id: &str, language: Language, output: &Output) -> Result<()> {
    let entry = super::timeline::find_entry(store, id)?;

    output.message(&format!(
        "Consulting the AI historian about '{}'...",
        entry.title
    ));

    let enhancement =
        historian::enhance_entry(&entry.title, &entry.display_date, &entry.description)?;

    let mut updated = entry.clone();
    updated.description = historian::apply_to_description(&entry.description, &enhancement);

    if !enhancement.suggested_tags.is_empty() {
        let mut tags = updated.tags.take().unwrap_or_default();
        for tag in &enhancement.suggested_tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        updated.tags = Some(tags);
    }

    if let Err(err) = store.upsert(updated.clone()) {
        output.warn_persistence(&err);
    }

    output.success(&format!("Expanded notes for entry: {}", updated.id));
    output.print_entry(&updated, language);
    Ok(())
}
