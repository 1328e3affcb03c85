//! `[[key]]` cross-references inside memo text.
//!
//! Memos link to other notes with `[[key]]` or `[[key: label]]`. The link key
//! is the part before the first colon. Parsing yields alternating text and
//! link segments in source order; backlink lookup inverts the relation.

use crate::record::NoteRecord;
use regex::Regex;
use std::sync::LazyLock;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(.*?)\]\]").expect("valid memo link regex"));

/// One piece of a memo: literal text or a link to another note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoSegment {
    Text(String),
    Link { key: String },
}

/// Split memo text into text and link segments, preserving order.
pub fn parse_memo_segments(memo: &str) -> Vec<MemoSegment> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for captures in LINK_RE.captures_iter(memo) {
        let whole = captures.get(0).expect("match has a full group");
        if whole.start() > last_end {
            segments.push(MemoSegment::Text(memo[last_end..whole.start()].to_string()));
        }

        let content = captures
            .get(1)
            .map(|group| group.as_str())
            .unwrap_or("")
            .trim();
        let key = content
            .split(':')
            .next()
            .unwrap_or("")
            .trim()
            .to_string();
        segments.push(MemoSegment::Link { key });

        last_end = whole.end();
    }

    if last_end < memo.len() {
        segments.push(MemoSegment::Text(memo[last_end..].to_string()));
    }

    segments
}

/// The keys of every link in a memo, in order of appearance.
pub fn link_keys(memo: &str) -> Vec<String> {
    parse_memo_segments(memo)
        .into_iter()
        .filter_map(|segment| match segment {
            MemoSegment::Link { key } => Some(key),
            MemoSegment::Text(_) => None,
        })
        .collect()
}

/// Resolve a link key to the title of the note it points to.
pub fn resolve_title<'a>(records: &'a [NoteRecord], key: &str) -> Option<&'a str> {
    records
        .iter()
        .find(|record| record.key == key)
        .map(|record| record.title.as_str())
}

/// Notes whose memo links reference `key`, excluding the note itself,
/// in index order.
pub fn find_backlinks<'a>(records: &'a [NoteRecord], key: &str) -> Vec<&'a NoteRecord> {
    records
        .iter()
        .filter(|record| record.key != key && link_keys(&record.memo).iter().any(|k| k == key))
        .collect()
}
