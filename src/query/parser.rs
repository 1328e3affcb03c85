use super::error::QueryError;
use super::splitter::split_top_level;
use crate::record::NoteField;

/// Upper bound on grammar re-entry through groups and negation. Each level
/// strictly shrinks the substring being parsed, so depth is already linear in
/// the input length; the guard exists to turn a pathological input into a
/// clean error instead of a deep stack.
pub const MAX_GROUP_DEPTH: usize = 64;

/// One parsed query expression, built fresh per evaluation call.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryExpr {
    /// Disjunction of AND-groups. Empty matches no records.
    Or(Vec<QueryExpr>),
    /// Conjunction of terms. Empty matches every record.
    And(Vec<QueryExpr>),
    /// Logical complement of the inner expression.
    Not(Box<QueryExpr>),
    /// A single literal term, optionally field-scoped.
    Term(QueryTerm),
}

/// The smallest unit of the grammar: a substring test, either against one
/// canonical field (`field: Some(..)`) or against all searchable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryTerm {
    pub field: Option<NoteField>,
    pub value: String,
}

/// Parse a raw expression string into an AST.
///
/// Grammar, highest binding first: group/negation, then `AND`, then `OR`, so
/// `a AND b OR c` parses as `(a AND b) OR c`.
pub fn parse_query(expression: &str) -> Result<QueryExpr, QueryError> {
    parse_or(expression, 0)
}

fn parse_or(expression: &str, depth: usize) -> Result<QueryExpr, QueryError> {
    if depth > MAX_GROUP_DEPTH {
        return Err(QueryError::NestingTooDeep(MAX_GROUP_DEPTH));
    }

    let mut chunks = split_top_level(expression, "OR");
    match chunks.len() {
        1 => parse_and(chunks.remove(0), depth),
        _ => Ok(QueryExpr::Or(
            chunks
                .into_iter()
                .map(|chunk| parse_and(chunk, depth))
                .collect::<Result<_, _>>()?,
        )),
    }
}

fn parse_and(expression: &str, depth: usize) -> Result<QueryExpr, QueryError> {
    let mut chunks = split_top_level(expression, "AND");
    match chunks.len() {
        1 => parse_term(chunks.remove(0), depth),
        _ => Ok(QueryExpr::And(
            chunks
                .into_iter()
                .map(|chunk| parse_term(chunk, depth))
                .collect::<Result<_, _>>()?,
        )),
    }
}

fn parse_term(operand: &str, depth: usize) -> Result<QueryExpr, QueryError> {
    let operand = operand.trim();

    if let Some(negated) = operand.strip_prefix('-') {
        // The remainder re-enters the full grammar, so `-(a OR b)` works.
        return Ok(QueryExpr::Not(Box::new(parse_or(
            negated.trim_start(),
            depth + 1,
        )?)));
    }

    if let Some(interior) = strip_outer_parens(operand) {
        return parse_or(interior, depth + 1);
    }

    Ok(QueryExpr::Term(parse_simple_term(operand)))
}

/// Interpret one non-compound operand as `prefix:value` or a global literal.
fn parse_simple_term(operand: &str) -> QueryTerm {
    if let Some((prefix, value)) = operand.split_once(':')
        && let Ok(field) = prefix.trim().parse::<NoteField>()
    {
        // A recognized prefix scopes the term even when the value is empty;
        // the empty value then matches nothing, so `title:` returns zero
        // results instead of acting as a no-op filter.
        return QueryTerm {
            field: Some(field),
            value: value.trim().to_string(),
        };
    }

    // Unrecognized prefixes stay part of the literal text, colon included.
    QueryTerm {
        field: None,
        value: operand.to_string(),
    }
}

/// Strip one outer parenthesis pair, but only when the `(` at the start is
/// matched by the `)` at the very end. `(a) AND (b)` never reaches here as a
/// single operand, but `(a) (b)` could, and must stay a literal.
fn strip_outer_parens(operand: &str) -> Option<&str> {
    let bytes = operand.as_bytes();
    if bytes.first() != Some(&b'(') || bytes.last() != Some(&b')') {
        return None;
    }

    let mut depth = 0usize;
    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return (i == bytes.len() - 1).then(|| &operand[1..operand.len() - 1]);
                }
            }
            _ => {}
        }
    }

    None
}
