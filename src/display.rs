use crate::config::AppConfig;
use crate::links::{MemoSegment, find_backlinks, parse_memo_segments};
use crate::record::NoteRecord;
use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{Cell, ContentArrangement, Table};
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;
use std::path::Path;

/// Build the shared result table shell.
fn create_results_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format search results as a count line plus a table.
pub fn format_search_text(results: &[&NoteRecord], limit: usize, config: &AppConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "SEARCH matched {} note{}",
        results.len(),
        if results.len() == 1 { "" } else { "s" }
    );

    if results.is_empty() {
        let _ = writeln!(out, "No matching notes found.");
        return out;
    }

    let display_limit = displayed_count(results.len(), limit);
    let mut table = create_results_table();
    table.set_header(vec!["", "Date", "Key", "IndexKey", "Title", "Tags"]);
    for record in results.iter().take(display_limit) {
        table.add_row(vec![
            Cell::new(config.icon_for(&record.commonplace_key)),
            Cell::new(&record.date),
            Cell::new(&record.key),
            Cell::new(&record.commonplace_key),
            Cell::new(&record.title),
            Cell::new(&record.tags),
        ]);
    }

    let _ = writeln!(out, "\n{table}");

    if display_limit < results.len() {
        let _ = writeln!(
            out,
            "... {} more note{} hidden by --limit {}",
            results.len() - display_limit,
            if results.len() - display_limit == 1 {
                ""
            } else {
                "s"
            },
            limit
        );
    }

    out
}

pub fn format_search_json(
    index: &Path,
    query: &str,
    results: &[&NoteRecord],
    limit: usize,
) -> String {
    let display_limit = displayed_count(results.len(), limit);
    serde_json::to_string_pretty(&json!({
        "search": {
            "index": index.display().to_string(),
            "query": query,
            "matches": results.len(),
            "displayed": display_limit,
            "notes": results.iter().take(display_limit).collect::<Vec<_>>(),
        }
    }))
    .unwrap_or_else(|_| "{\"search\":{\"error\":\"failed to serialize search output\"}}".into())
}

/// Format the index summary: totals, per-commonplace-key counts, tag and
/// date coverage.
pub fn format_info_text(records: &[NoteRecord]) -> String {
    let stats = IndexStats::collect(records);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "INDEX: {} note{}",
        records.len(),
        if records.len() == 1 { "" } else { "s" }
    );

    if records.is_empty() {
        return out;
    }

    let _ = writeln!(out, "Distinct tags: {}", stats.distinct_tags);
    match (stats.first_date, stats.last_date) {
        (Some(first), Some(last)) => {
            let _ = writeln!(out, "Date range: {first} .. {last}");
        }
        _ => {
            let _ = writeln!(out, "Date range: n/a");
        }
    }

    if !stats.key_counts.is_empty() {
        let mut table = create_results_table();
        table.set_header(vec!["IndexKey", "Notes"]);
        for (key, count) in &stats.key_counts {
            table.add_row(vec![Cell::new(key), Cell::new(count)]);
        }
        let _ = writeln!(out, "\n{table}");
    }

    out
}

pub fn format_info_json(index: &Path, records: &[NoteRecord]) -> String {
    let stats = IndexStats::collect(records);
    serde_json::to_string_pretty(&json!({
        "info": {
            "index": index.display().to_string(),
            "notes": records.len(),
            "distinct_tags": stats.distinct_tags,
            "first_date": stats.first_date.map(|d| d.to_string()),
            "last_date": stats.last_date.map(|d| d.to_string()),
            "commonplace_keys": stats.key_counts,
        }
    }))
    .unwrap_or_else(|_| "{\"info\":{\"error\":\"failed to serialize info output\"}}".into())
}

/// Format a single note in full: fields, memo with links resolved to titles,
/// and the notes linking back to it.
pub fn format_note_text(
    record: &NoteRecord,
    all_records: &[NoteRecord],
    config: &AppConfig,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", record.title.bold());
    let _ = writeln!(out, "  key:      {}", record.key);
    let _ = writeln!(out, "  date:     {}", record.date);
    let _ = writeln!(
        out,
        "  indexkey: {} {}",
        config.icon_for(&record.commonplace_key),
        record
            .commonplace_key
            .color(config.color_for(&record.commonplace_key))
    );
    let _ = writeln!(out, "  tags:     {}", record.tags);
    if !record.filepath.is_empty() {
        let _ = writeln!(out, "  file:     {}", record.filepath);
    }

    if !record.memo.is_empty() {
        let _ = writeln!(out, "\n{}", render_memo(&record.memo, all_records));
    }

    let backlinks = find_backlinks(all_records, &record.key);
    if !backlinks.is_empty() {
        let _ = writeln!(out, "\nLinked from:");
        for backlink in backlinks {
            let _ = writeln!(out, "  - {}  {}", backlink.key, backlink.title);
        }
    }

    out
}

pub fn format_note_json(record: &NoteRecord, all_records: &[NoteRecord]) -> String {
    let backlinks: Vec<_> = find_backlinks(all_records, &record.key)
        .into_iter()
        .map(|backlink| {
            json!({
                "key": backlink.key,
                "title": backlink.title,
            })
        })
        .collect();

    serde_json::to_string_pretty(&json!({
        "note": record,
        "backlinks": backlinks,
    }))
    .unwrap_or_else(|_| "{\"note\":{\"error\":\"failed to serialize note output\"}}".into())
}

pub fn format_suggest_text(suggestions: &[&str]) -> String {
    let mut out = String::new();
    for suggestion in suggestions {
        let _ = writeln!(out, "{suggestion}");
    }
    out
}

pub fn format_suggest_json(input: &str, suggestions: &[&str]) -> String {
    serde_json::to_string_pretty(&json!({
        "suggest": {
            "input": input,
            "suggestions": suggestions,
        }
    }))
    .unwrap_or_else(|_| "{\"suggest\":{\"error\":\"failed to serialize suggestions\"}}".into())
}

/// Render memo text with `[[key]]` links resolved to `[[key: Title]]`.
fn render_memo(memo: &str, all_records: &[NoteRecord]) -> String {
    let mut out = String::new();
    for segment in parse_memo_segments(memo) {
        match segment {
            MemoSegment::Text(text) => out.push_str(&text),
            MemoSegment::Link { key } => {
                let rendered = match crate::links::resolve_title(all_records, &key) {
                    Some(title) => format!("[[{key}: {title}]]").bright_blue().to_string(),
                    None => format!("[[{key} (unknown note)]]").yellow().to_string(),
                };
                out.push_str(&rendered);
            }
        }
    }
    out
}

struct IndexStats {
    key_counts: BTreeMap<String, usize>,
    distinct_tags: usize,
    first_date: Option<NaiveDate>,
    last_date: Option<NaiveDate>,
}

impl IndexStats {
    fn collect(records: &[NoteRecord]) -> Self {
        let mut key_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut tags: BTreeSet<String> = BTreeSet::new();
        let mut first_date: Option<NaiveDate> = None;
        let mut last_date: Option<NaiveDate> = None;

        for record in records {
            if !record.commonplace_key.is_empty() {
                *key_counts.entry(record.commonplace_key.clone()).or_insert(0) += 1;
            }

            for tag in record.tags.split(',') {
                let tag = tag.trim();
                if !tag.is_empty() {
                    tags.insert(tag.to_lowercase());
                }
            }

            // Dates are stored as YYYYMMDD text; anything else is skipped.
            if let Ok(date) = NaiveDate::parse_from_str(&record.date, "%Y%m%d") {
                first_date = Some(first_date.map_or(date, |d| d.min(date)));
                last_date = Some(last_date.map_or(date, |d| d.max(date)));
            }
        }

        Self {
            key_counts,
            distinct_tags: tags.len(),
            first_date,
            last_date,
        }
    }
}

fn displayed_count(total: usize, limit: usize) -> usize {
    if limit == 0 { total } else { limit.min(total) }
}
