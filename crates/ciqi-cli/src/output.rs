//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output, rendered in the display language
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use ciqi_core::{Entry, Language, PersistenceError};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Print a single entry in full
    pub fn print_entry(&self, entry: &Entry, language: Language) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:        {}", entry.id);
                println!("Title:     {}", entry.title_in(language));
                println!("Date:      {}", entry.display_date_in(language));
                println!("Sort year: {}", entry.sort_year);
                println!("Category:  {}", entry.category.label(language));
                if let Some(image) = entry.image() {
                    println!("Image:     {}", image);
                }
                let tags = entry.tags_in(language);
                if !tags.is_empty() {
                    println!("Tags:      {}", tags.join(", "));
                }
                let description = entry.description_in(language);
                if !description.is_empty() {
                    println!();
                    println!("{}", description);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(entry).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", entry.id);
            }
        }
    }

    /// Print the timeline as a list
    pub fn print_entries(&self, entries: &[Entry], language: Language) {
        match self.format {
            OutputFormat::Human => {
                if entries.is_empty() {
                    println!("The timeline is empty.");
                    return;
                }
                for entry in entries {
                    println!(
                        "{} | {:<12} | {:<20} | {}",
                        short_id(&entry.id),
                        truncate(entry.display_date_in(language), 12),
                        entry.category.label(language),
                        truncate(entry.title_in(language), 45)
                    );
                }
                println!("\n{} entries", entries.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(entries).unwrap());
            }
            OutputFormat::Quiet => {
                for entry in entries {
                    println!("{}", entry.id);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        if !self.is_quiet() {
            println!("{}", msg);
        }
    }

    /// Report a failed write-back
    ///
    /// The mutation already took effect in memory; this is a warning, not a
    /// failure of the command.
    pub fn warn_persistence(&self, err: &PersistenceError) {
        if self.is_quiet() {
            return;
        }
        eprintln!("⚠ Change kept in memory only: {}", err);
        if let Some(hint) = err.recovery_suggestion() {
            eprintln!("  {}", hint);
        }
    }
}

/// First characters of an id, enough to address an entry
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// Truncate a string for column display
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        // quiet wins over json
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long title indeed", 10), "a very lo…");
        assert_eq!(truncate("唐三彩釉陶器与镇墓兽", 5), "唐三彩釉…");
    }

    #[test]
    fn test_short_id_handles_short_ids() {
        assert_eq!(short_id("1"), "1");
        assert_eq!(short_id("0d9f3a7c-legacy"), "0d9f3a7c");
    }
}
