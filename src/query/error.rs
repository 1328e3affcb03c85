use thiserror::Error;

/// Errors that can occur when parsing query expressions.
///
/// Malformed syntax is deliberately not an error: a dangling operator or an
/// unmatched parenthesis degrades to an empty or full match set instead. The
/// only failure the engine surfaces is the recursion guard tripping, and the
/// search facade maps that to "no matches" with a warning.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("query expression exceeds {0} levels of grouping")]
    NestingTooDeep(usize),
}
