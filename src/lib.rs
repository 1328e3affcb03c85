pub mod cli;
pub mod config;
pub mod display;
pub mod links;
pub mod loader;
pub mod query;
pub mod record;
pub mod suggest;

use anyhow::{Context, bail};
use std::path::{Path, PathBuf};

pub use cli::{Cli, Commands, OutputFormat, cli_parse};
pub use loader::load_note_index;
pub use query::{QueryExpr, match_indices, match_mask, parse_query, search};
pub use record::{NoteField, NoteRecord};
pub use suggest::suggest_tags;

fn write_output_file(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output file '{}'", path.display()))
}

fn emit(content: &str, output: &Option<PathBuf>) -> anyhow::Result<()> {
    print!("{content}");
    if let Some(path) = output {
        write_output_file(path, content)?;
    }
    Ok(())
}

/// Resolve which index file to load: the --index argument wins, then the
/// config's `default_index`.
fn resolve_index_path(cli_index: &Option<PathBuf>, config: &config::AppConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli_index {
        return Ok(path.clone());
    }
    if let Some(path) = &config.default_index {
        return Ok(path.clone());
    }
    bail!("No note index given. Pass --index or set `default_index` in the config file.")
}

/// Load the suggestion vocabulary from the configured tags file, if any.
fn load_vocabulary(config: &config::AppConfig) -> anyhow::Result<Vec<String>> {
    match &config.tags_file {
        Some(path) => config::load_predefined_tags(path)
            .with_context(|| format!("Failed to load tag vocabulary '{}'", path.display())),
        None => Ok(Vec::new()),
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = cli_parse();
    let app_config =
        config::load_config(cli.config.as_deref()).context("Failed to load config")?;
    let format = cli.format;
    let output = &cli.output;

    match &cli.command {
        Commands::Search { query, keys, limit } => {
            let index_path = resolve_index_path(&cli.index, &app_config)?;
            let records = load_note_index(&index_path)?;

            // Commonplace-key pre-filter, applied before the query runs.
            let scoped: Vec<NoteRecord> = if keys.is_empty() {
                records
            } else {
                records
                    .into_iter()
                    .filter(|record| {
                        keys.iter()
                            .any(|key| key.eq_ignore_ascii_case(&record.commonplace_key))
                    })
                    .collect()
            };

            let results = search(&scoped, query);
            let content = match format {
                OutputFormat::Text => {
                    display::format_search_text(&results, *limit, &app_config)
                }
                OutputFormat::Json => {
                    display::format_search_json(&index_path, query, &results, *limit)
                }
            };
            emit(&content, output)?;
        }
        Commands::Info => {
            let index_path = resolve_index_path(&cli.index, &app_config)?;
            let records = load_note_index(&index_path)?;
            let content = match format {
                OutputFormat::Text => display::format_info_text(&records),
                OutputFormat::Json => display::format_info_json(&index_path, &records),
            };
            emit(&content, output)?;
        }
        Commands::Show { key } => {
            let index_path = resolve_index_path(&cli.index, &app_config)?;
            let records = load_note_index(&index_path)?;
            let Some(record) = records.iter().find(|record| &record.key == key) else {
                bail!("No note with key '{}' in '{}'", key, index_path.display());
            };
            let content = match format {
                OutputFormat::Text => display::format_note_text(record, &records, &app_config),
                OutputFormat::Json => display::format_note_json(record, &records),
            };
            emit(&content, output)?;
        }
        Commands::Suggest { input } => {
            let vocabulary = load_vocabulary(&app_config)?;
            let suggestions = suggest_tags(input, &vocabulary);
            let content = match format {
                OutputFormat::Text => display::format_suggest_text(&suggestions),
                OutputFormat::Json => display::format_suggest_json(input, &suggestions),
            };
            emit(&content, output)?;
        }
    }

    Ok(())
}
