use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Search and inspect a Zettelkasten note index with a boolean query language
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Note index CSV (falls back to `default_index` from the config)
    #[arg(short, long, env = "NOTE_SEARCH_INDEX", global = true)]
    pub index: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Write the output to a file as well as stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter the note index with a query expression
    Search {
        /// Query expression (AND, OR, -, parentheses, field prefixes)
        query: String,

        /// Keep only notes with this commonplace key (repeatable)
        #[arg(short, long = "key")]
        keys: Vec<String>,

        /// Maximum number of notes to display (0 = unlimited)
        #[arg(short, long, default_value_t = 0)]
        limit: usize,
    },
    /// Summarize the note index
    Info,
    /// Display a single note in full, with memo links resolved
    Show {
        /// Unique key of the note
        key: String,
    },
    /// Suggest tags for the word currently being typed
    Suggest {
        /// The search input typed so far
        #[arg(default_value = "")]
        input: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
