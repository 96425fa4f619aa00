//! Share command handlers
//!
//! Export prints the URL-safe snapshot of the current timeline; import
//! adopts a shared snapshot through the store's initialization precedence
//! and persists it locally.

use anyhow::{Context, Result};

use ciqi_core::{decode, Config, FileStorage, PendingShare, Store};

use crate::output::{Output, OutputFormat};

/// Print the shareable snapshot, optionally as a full link
pub fn export(store: &Store, base_url: Option<&str>, output: &Output) -> Result<()> {
    let payload = store
        .export_snapshot()
        .context("Failed to export timeline")?;

    let rendered = match base_url {
        Some(base) => share_link(base, &payload),
        None => payload,
    };

    match output.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "data": rendered })),
        _ => println!("{}", rendered),
    }
    Ok(())
}

/// Adopt a shared timeline and persist it
pub fn import(config: &Config, data: &str, output: &Output) -> Result<()> {
    let payload = extract_payload(data);

    // validate up front so a bad link is a visible error here, not a
    // silent fallback inside the store
    let shared = decode(payload).context("This share link cannot be read")?;

    let store = Store::open(
        Box::new(FileStorage::new(config)),
        Box::new(PendingShare::new(payload)),
    );
    if let Err(err) = store.persist() {
        output.warn_persistence(&err);
    }

    output.success(&format!("Imported timeline with {} entries", shared.len()));
    Ok(())
}

/// Build a share link from a base URL and an encoded payload
fn share_link(base: &str, payload: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}data={}", base, separator, payload)
}

/// Accept either a bare payload or a full link containing `data=`
fn extract_payload(data: &str) -> &str {
    match data.split_once("data=") {
        Some((_, rest)) => rest.split('&').next().unwrap_or(rest),
        None => data,
    }
}
