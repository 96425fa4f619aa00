//! Cíqì Chronicles CLI
//!
//! Command-line editor for a bilingual porcelain timeline.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ciqi_core::{Category, Config, EntryDraft, Language, Store};

mod commands;
mod editor;
mod historian;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "ciqi")]
#[command(about = "Cíqì Chronicles - a bilingual porcelain timeline keeper")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Display language (zh or en), overriding the configured one
    #[arg(long, global = true, value_parser = parse_language)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the timeline in chronological order
    #[command(alias = "ls")]
    List {
        /// Filter by category (course, personal, historical)
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,
    },
    /// Show a single entry
    Show {
        /// Entry id (full or unique prefix)
        id: String,
    },
    /// Add a new entry
    Add {
        /// Entry title
        title: String,
        /// Human-readable date label, e.g. "1420 AD"
        #[arg(short, long)]
        date: String,
        /// Numeric year used for chronological ordering
        #[arg(short = 'y', long)]
        sort_year: f64,
        /// Narrative notes
        #[arg(short = 'n', long, default_value = "")]
        description: String,
        /// Category (course, personal, historical)
        #[arg(short, long, default_value = "course", value_parser = parse_category)]
        category: Category,
        /// Image URL (a placeholder is assigned when omitted)
        #[arg(short, long)]
        image: Option<String>,
        /// Tags to add
        #[arg(short, long)]
        tag: Vec<String>,
    },
    /// Edit an entry interactively
    Edit {
        /// Entry id (full or unique prefix)
        id: String,
    },
    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Entry id (full or unique prefix)
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Expand an entry's notes with the AI historian
    Enhance {
        /// Entry id (full or unique prefix)
        id: String,
    },
    /// Print the shareable snapshot of the current timeline
    Export {
        /// Emit a full link instead of the bare payload
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Adopt a shared timeline from a link or payload
    Import {
        /// Share link or bare payload
        data: String,
    },
    /// Replace the timeline with the bundled reference set
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value (data_dir, language)
    Set { key: String, value: String },
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|err| format!("{}", err))
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse().map_err(|err| format!("{}", err))
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .compact()
        .try_init();

    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    let config = Config::load().context("Failed to load configuration")?;
    let language = cli.lang.unwrap_or(config.language);
    debug!(timeline = %config.timeline_path().display(), %language, "resolved configuration");

    match cli.command {
        Commands::List { category } => {
            let store = Store::open_local(&config);
            commands::timeline::list(&store, category, language, &output)
        }
        Commands::Show { id } => {
            let store = Store::open_local(&config);
            commands::timeline::show(&store, &id, language, &output)
        }
        Commands::Add {
            title,
            date,
            sort_year,
            description,
            category,
            image,
            tag,
        } => {
            let mut store = Store::open_local(&config);
            let draft = EntryDraft {
                title,
                display_date: date,
                sort_year,
                description,
                category,
                image_url: image,
                tags: tag,
            };
            commands::timeline::add(&mut store, draft, language, &output)
        }
        Commands::Edit { id } => {
            let mut store = Store::open_local(&config);
            commands::timeline::edit(&mut store, &id, language, &output)
        }
        Commands::Delete { id, yes } => {
            let mut store = Store::open_local(&config);
            commands::timeline::delete(&mut store, &id, yes, &output)
        }
        Commands::Enhance { id } => {
            let mut store = Store::open_local(&config);
            commands::enhance::enhance(&mut store, &id, language, &output)
        }
        Commands::Export { base_url } => {
            let store = Store::open_local(&config);
            commands::share::export(&store, base_url.as_deref(), &output)
        }
        Commands::Import { data } => commands::share::import(&config, &data, &output),
        Commands::Reset { yes } => {
            let mut store = Store::open_local(&config);
            commands::timeline::reset(&mut store, yes, &output)
        }
        Commands::Config { command } => match command {
            Some(ConfigCommands::Set { key, value }) => {
                commands::config::set(&key, &value, &output)
            }
            Some(ConfigCommands::Show) | None => commands::config::show(&output),
        },
    }
}
