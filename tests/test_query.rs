use note_search::record::NoteRecord;
use note_search::search;
use std::collections::BTreeSet;

fn note(title: &str, key: &str, tags: &str, memo: &str) -> NoteRecord {
    NoteRecord {
        title: title.to_string(),
        key: key.to_string(),
        date: "20260115".to_string(),
        tags: tags.to_string(),
        memo: memo.to_string(),
        commonplace_key: "Philosophy".to_string(),
        ..NoteRecord::default()
    }
}

fn fixture() -> Vec<NoteRecord> {
    vec![
        note("Alpha", "k-01", "x", "first note"),
        note("Beta", "k-02", "y", "second note, mentions keyword"),
        note("Gamma", "k-03", "x", "third note"),
        note("Delta", "k-04", "y, x", "keyword in memo here too"),
    ]
}

fn keys<'a>(results: &[&'a NoteRecord]) -> Vec<&'a str> {
    results.iter().map(|r| r.key.as_str()).collect()
}

fn key_set<'a>(results: &[&'a NoteRecord]) -> BTreeSet<&'a str> {
    results.iter().map(|r| r.key.as_str()).collect()
}

#[test]
fn test_and_is_set_intersection() {
    let records = fixture();
    let both = key_set(&search(&records, "tag:x AND memo:note"));
    let left = key_set(&search(&records, "tag:x"));
    let right = key_set(&search(&records, "memo:note"));

    let intersection: BTreeSet<&str> = left.intersection(&right).copied().collect();
    assert_eq!(both, intersection);
    assert_eq!(both, BTreeSet::from(["k-01", "k-03"]));
}

#[test]
fn test_or_is_set_union() {
    let records = fixture();
    let either = key_set(&search(&records, "title:alpha OR title:beta"));
    let left = key_set(&search(&records, "title:alpha"));
    let right = key_set(&search(&records, "title:beta"));

    let union: BTreeSet<&str> = left.union(&right).copied().collect();
    assert_eq!(either, union);
    assert_eq!(either, BTreeSet::from(["k-01", "k-02"]));
}

#[test]
fn test_negation_is_set_complement() {
    let records = fixture();
    let positive = key_set(&search(&records, "tag:x"));
    let negative = key_set(&search(&records, "-tag:x"));

    let all: BTreeSet<&str> = records.iter().map(|r| r.key.as_str()).collect();
    let complement: BTreeSet<&str> = all.difference(&positive).copied().collect();
    assert_eq!(negative, complement);
}

#[test]
fn test_and_binds_tighter_than_or() {
    let records = fixture();

    // Alpha OR (Gamma AND x), never (Alpha OR Gamma) AND x.
    let ungrouped = keys(&search(&records, "title:Alpha OR title:Gamma AND tag:x"));
    assert_eq!(ungrouped, vec!["k-01", "k-03"]);

    let grouped = keys(&search(
        &records,
        "(title:Alpha OR title:Gamma) AND tag:x",
    ));
    assert_eq!(grouped, vec!["k-01", "k-03"]);

    // With Beta (tag y) the grouping changes the result: ungrouped keeps
    // Alpha regardless of its tag, grouped demands tag x of both.
    let ungrouped = keys(&search(&records, "title:Beta OR title:Alpha AND tag:x"));
    assert_eq!(ungrouped, vec!["k-01", "k-02"]);

    let grouped = keys(&search(&records, "(title:Beta OR title:Alpha) AND tag:x"));
    assert_eq!(grouped, vec!["k-01"]);
}

#[test]
fn test_search_is_idempotent() {
    let records = fixture();
    let expression = "memo:keyword OR title:gamma";

    let once: Vec<NoteRecord> = search(&records, expression)
        .into_iter()
        .cloned()
        .collect();
    let twice = search(&once, expression);

    assert_eq!(keys(&twice), keys(&search(&records, expression)));
}

#[test]
fn test_empty_expression_bypasses() {
    let records = fixture();
    assert_eq!(search(&records, "").len(), records.len());
    assert_eq!(search(&records, "   ").len(), records.len());
}

#[test]
fn test_dangling_field_prefix_matches_nothing() {
    let records = fixture();
    assert!(search(&records, "title:").is_empty());
    assert!(search(&records, "tag: ").is_empty());
}

#[test]
fn test_field_scoping_isolates_fields() {
    let records = fixture();

    // "keyword" appears only in the memo of k-02 and k-04.
    assert!(search(&records, "title:keyword").is_empty());
    assert_eq!(keys(&search(&records, "keyword")), vec!["k-02", "k-04"]);
    assert_eq!(keys(&search(&records, "memo:keyword")), vec!["k-02", "k-04"]);
}

#[test]
fn test_operators_and_literals_are_case_insensitive() {
    let records = fixture();
    assert_eq!(
        keys(&search(&records, "ALPHA")),
        keys(&search(&records, "alpha"))
    );
    assert_eq!(
        keys(&search(&records, "title:alpha or title:beta")),
        keys(&search(&records, "title:Alpha OR title:Beta"))
    );
    assert_eq!(
        keys(&search(&records, "tag:x and memo:note")),
        keys(&search(&records, "tag:x AND memo:note"))
    );
}

#[test]
fn test_result_preserves_input_order() {
    let records = fixture();
    assert_eq!(keys(&search(&records, "note")), vec!["k-01", "k-02", "k-03"]);
}

#[test]
fn test_operator_word_needs_whitespace_boundaries() {
    let mut records = fixture();
    records.push(note("Phone", "k-05", "", "android handbook"));

    // "android" contains OR and AND fragments but is one word.
    assert_eq!(keys(&search(&records, "android")), vec!["k-05"]);
    assert_eq!(keys(&search(&records, "memo:android handbook")), vec!["k-05"]);
}

#[test]
fn test_stray_operators_degrade_without_error() {
    let records = fixture();
    // All operands empty: the AND-group degenerates to the full set.
    assert_eq!(search(&records, "AND AND").len(), records.len());
    // A leading operator just vanishes.
    assert_eq!(keys(&search(&records, "OR title:alpha")), vec!["k-01"]);
}

#[test]
fn test_unknown_prefix_searches_whole_operand_globally() {
    let mut records = fixture();
    records.push(note("Mixed", "k-06", "", "see ratio:2 for details"));

    assert_eq!(keys(&search(&records, "ratio:2")), vec!["k-06"]);
    assert!(search(&records, "ratio:9").is_empty());
}

#[test]
fn test_value_may_contain_further_colons() {
    let mut records = fixture();
    records.push(note("Times", "k-07", "", "meeting at 10:30 sharp"));

    assert_eq!(keys(&search(&records, "memo:at 10:30")), vec!["k-07"]);
}

#[test]
fn test_negated_group() {
    let records = fixture();
    let complement = keys(&search(&records, "-(title:alpha OR title:beta)"));
    assert_eq!(complement, vec!["k-03", "k-04"]);
}
