//! Tag suggestion for the search input.
//!
//! This is pure presentation support: given what the user has typed so far,
//! work out the word currently being typed and offer matching entries from
//! the predefined tag vocabulary. The literal tokens `AND`/`OR` only act as
//! segment boundaries here; no boolean semantics are involved.

use regex::Regex;
use std::sync::LazyLock;

static OPERATOR_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:AND|OR)\s+").expect("valid operator boundary regex"));

/// The trailing segment of the input after the last `AND`/`OR` boundary,
/// i.e. the word currently being typed.
pub fn current_segment(input: &str) -> &str {
    OPERATOR_BOUNDARY_RE
        .split(input)
        .last()
        .unwrap_or(input)
        .trim()
}

/// Vocabulary entries whose lowercase form starts with the segment currently
/// being typed. An empty input, or an input that just finished an operator,
/// offers the whole vocabulary; an otherwise empty segment offers nothing.
pub fn suggest_tags<'a>(input: &str, vocabulary: &'a [String]) -> Vec<&'a str> {
    let upper = input.to_uppercase();
    if input.is_empty() || upper.ends_with(" AND ") || upper.ends_with(" OR ") {
        return vocabulary.iter().map(String::as_str).collect();
    }

    let segment = current_segment(input).to_lowercase();
    if segment.is_empty() {
        return Vec::new();
    }

    vocabulary
        .iter()
        .filter(|tag| tag.to_lowercase().starts_with(&segment))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vec<String> {
        ["ethics", "logic", "logistics", "zettel"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_empty_input_offers_everything() {
        let vocab = vocabulary();
        assert_eq!(suggest_tags("", &vocab).len(), 4);
    }

    #[test]
    fn test_prefix_filters_vocabulary() {
        let vocab = vocabulary();
        assert_eq!(suggest_tags("log", &vocab), vec!["logic", "logistics"]);
        assert_eq!(suggest_tags("LOG", &vocab), vec!["logic", "logistics"]);
    }

    #[test]
    fn test_segment_restarts_after_operator() {
        let vocab = vocabulary();
        assert_eq!(suggest_tags("tag:logic AND eth", &vocab), vec!["ethics"]);
        assert_eq!(suggest_tags("a or ZET", &vocab), vec!["zettel"]);
    }

    #[test]
    fn test_trailing_operator_offers_everything() {
        let vocab = vocabulary();
        assert_eq!(suggest_tags("logic AND ", &vocab).len(), 4);
        assert_eq!(suggest_tags("logic or ", &vocab).len(), 4);
    }

    #[test]
    fn test_operator_words_need_whitespace() {
        let vocab = vocabulary();
        // "android" contains AND but is one word, so it is the segment.
        assert!(suggest_tags("android", &vocab).is_empty());
    }

    #[test]
    fn test_current_segment_extraction() {
        assert_eq!(current_segment("a AND b OR ce"), "ce");
        assert_eq!(current_segment("plain"), "plain");
        assert_eq!(current_segment(""), "");
    }
}
