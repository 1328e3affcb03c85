use super::parser::{QueryExpr, QueryTerm, parse_query};
use crate::record::{NoteField, NoteRecord};

impl QueryExpr {
    /// Evaluate this expression as a membership predicate over one record.
    pub fn matches(&self, record: &NoteRecord) -> bool {
        match self {
            // An empty disjunction matches nothing: the facade, not the
            // grammar, is responsible for the blank-query bypass.
            QueryExpr::Or(parts) => parts.iter().any(|part| part.matches(record)),
            // An empty conjunction matches everything, so a group that
            // contained only stray operators degenerates gracefully.
            QueryExpr::And(parts) => parts.iter().all(|part| part.matches(record)),
            QueryExpr::Not(inner) => !inner.matches(record),
            QueryExpr::Term(term) => term.matches(record),
        }
    }
}

impl QueryTerm {
    fn matches(&self, record: &NoteRecord) -> bool {
        if self.value.is_empty() {
            // Dangling prefix (`title:`) matches no records by design.
            return false;
        }

        match self.field {
            Some(field) => contains_ci(record.field(field), &self.value),
            None => NoteField::SEARCHABLE
                .iter()
                .any(|field| contains_ci(record.field(*field), &self.value)),
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Evaluate an expression over a collection, yielding a boolean mask aligned
/// with the record index.
pub fn match_mask(records: &[NoteRecord], expr: &QueryExpr) -> Vec<bool> {
    records.iter().map(|record| expr.matches(record)).collect()
}

/// Indices of the records an already-parsed expression matches, in input order.
pub fn match_indices(records: &[NoteRecord], expr: &QueryExpr) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| expr.matches(record).then_some(idx))
        .collect()
}

/// The single entry point callers use: filter a record collection by a raw
/// expression string.
///
/// A blank expression bypasses filtering and returns every record. A failed
/// parse (the nesting guard is the only way to fail) is reported on stderr
/// and treated as matching no records; an odd query must never take down the
/// caller's interactive loop. Input order is preserved and records are not
/// mutated.
pub fn search<'a>(records: &'a [NoteRecord], expression: &str) -> Vec<&'a NoteRecord> {
    let expression = expression.trim();
    if expression.is_empty() {
        return records.iter().collect();
    }

    let expr = match parse_query(expression) {
        Ok(expr) => expr,
        Err(e) => {
            eprintln!("Warning: skipping unusable query '{}': {}", expression, e);
            return Vec::new();
        }
    };

    records
        .iter()
        .filter(|record| expr.matches(record))
        .collect()
}
