//! Timeline command handlers

use anyhow::{bail, Context, Result};

use ciqi_core::{Category, Entry, EntryDraft, Language, Store};

use crate::editor::{self, confirm, prompt_with_default};
use crate::output::Output;

/// List the timeline in chronological order, optionally filtered by category
pub fn list(
    store: &Store,
    category: Option<Category>,
    language: Language,
    output: &Output,
) -> Result<()> {
    let entries: Vec<Entry> = store
        .list()
        .into_iter()
        .filter(|e| category.map_or(true, |c| e.category == c))
        .collect();

    output.print_entries(&entries, language);
    Ok(())
}

/// Show a single entry
pub fn show(store: &Store, id: &str, language: Language, output: &Output) -> Result<()> {
    let entry = find_entry(store, id)?;
    output.print_entry(&entry, language);
    Ok(())
}

/// Add a new entry from editor-supplied fields
pub fn add(store: &mut Store, draft: EntryDraft, language: Language, output: &Output) -> Result<()> {
    let entry = draft.into_entry(None);

    if let Err(err) = store.upsert(entry.clone()) {
        output.warn_persistence(&err);
    }

    output.success(&format!("Added entry: {}", entry.id));
    output.print_entry(&entry, language);
    Ok(())
}

/// Edit an entry interactively
pub fn edit(store: &mut Store, id: &str, language: Language, output: &Output) -> Result<()> {
    let current = find_entry(store, id)?;

    println!("Editing entry: {}", current.id);
    println!("Press Enter to keep current value, or type new value.\n");

    let title = prompt_with_default("Title", &current.title)?.unwrap_or_else(|| current.title.clone());

    let display_date = prompt_with_default("Display date", &current.display_date)?
        .unwrap_or_else(|| current.display_date.clone());

    let sort_year = match prompt_with_default("Sort year", &current.sort_year.to_string())? {
        Some(value) => value
            .trim()
            .parse()
            .context("Sort year must be a number")?,
        None => current.sort_year,
    };

    let category = match prompt_with_default(
        "Category (course/personal/historical)",
        category_slug(current.category),
    )? {
        Some(value) => value.parse()?,
        None => current.category,
    };

    let image_url = prompt_with_default("Image URL", current.image_url.as_deref().unwrap_or(""))?
        .or_else(|| current.image_url.clone());

    let current_tags = current.tags.clone().unwrap_or_default().join(", ");
    let tags = match prompt_with_default("Tags (comma separated)", &current_tags)? {
        Some(value) => split_tags(&value),
        None => current.tags.clone().unwrap_or_default(),
    };

    // notes are usually multi-line; hand them to $EDITOR
    let description = editor::edit_text(&current.description)?
        .trim_end()
        .to_string();

    let draft = EntryDraft {
        title,
        display_date,
        sort_year,
        description,
        category,
        image_url,
        tags,
    };
    let entry = draft.into_entry(Some(&current));

    if let Err(err) = store.upsert(entry.clone()) {
        output.warn_persistence(&err);
    }

    output.success(&format!("Updated entry: {}", entry.id));
    output.print_entry(&entry, language);
    Ok(())
}

/// Delete an entry, with confirmation
pub fn delete(store: &mut Store, id: &str, yes: bool, output: &Output) -> Result<()> {
    let entry = find_entry(store, id)?;

    if !yes && output.should_prompt() {
        let prompt = format!("Remove '{}' from the timeline?", entry.title);
        if !confirm(&prompt)? {
            output.message("Cancelled.");
            return Ok(());
        }
    }

    if let Err(err) = store.remove(&entry.id) {
        output.warn_persistence(&err);
    }

    output.success(&format!("Removed entry: {}", entry.id));
    Ok(())
}

/// Replace the timeline with the bundled reference set
pub fn reset(store: &mut Store, yes: bool, output: &Output) -> Result<()> {
    if !yes && output.should_prompt() {
        let prompt = "Replace the whole timeline with the bundled reference set?";
        if !confirm(prompt)? {
            output.message("Cancelled.");
            return Ok(());
        }
    }

    if let Err(err) = store.reset_to_defaults() {
        output.warn_persistence(&err);
    }

    output.success(&format!(
        "Timeline reset to {} reference entries",
        store.len()
    ));
    Ok(())
}

/// Resolve an entry by full id or unique prefix
pub(crate) fn find_entry(store: &Store, id: &str) -> Result<Entry> {
    if let Some(entry) = store.get(id) {
        return Ok(entry.clone());
    }

    let matches: Vec<&Entry> = store
        .entries()
        .iter()
        .filter(|e| e.id.starts_with(id))
        .collect();

    match matches.len() {
        0 => bail!("Entry not found: {}", id),
        1 => Ok(matches[0].clone()),
        n => bail!("Ambiguous id prefix '{}' ({} matches)", id, n),
    }
}

fn category_slug(category: Category) -> &'static str {
    match category {
        Category::Course => "course",
        Category::Personal => "personal",
        Category::Historical => "historical",
    }
}

fn split_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
