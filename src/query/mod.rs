//! Boolean query parsing and matching over the note index
//!
//! Queries are free text, written the way they are typed into a search box.
//! Terms match case-insensitively as substrings and combine with boolean
//! operators; conjunction binds tighter than disjunction.
//!
//! # Syntax
//!
//! ```text
//! word                  Substring match across all searchable fields
//! field:value           Substring match against one field only
//! -term                 Negate a term (or a whole group)
//! a AND b               Both sides must match (binds tighter than OR)
//! a OR b                Either side matches
//! ( ... )               Grouping, overrides precedence
//! ```
//!
//! # Field prefixes
//!
//! - `title:` - note title
//! - `key:` - unique note key
//! - `date:` - date text (e.g. `date:202601`)
//! - `tag:` / `tags:` - the joined tag list
//! - `memo:` - memo body
//! - `cpkey:` / `indexkey:` / `ikey:` - commonplace (index) key
//!
//! # Examples
//!
//! ```text
//! stoicism                              # Anywhere in the note
//! tag:ethics AND -tag:draft             # Tagged ethics, not tagged draft
//! title:Seneca OR title:Epictetus       # Either title
//! (memo:virtue OR memo:duty) AND date:2026
//! ```
//!
//! Malformed input never errors: dangling operators and stray parentheses
//! degrade to an empty or full match per the rules in [`parser`], and the
//! [`matcher::search`] facade maps the one internal failure mode (the
//! nesting guard) to an empty result with a warning on stderr.

pub mod error;
pub mod matcher;
pub mod parser;
pub mod splitter;

pub use error::QueryError;
pub use matcher::{match_indices, match_mask, search};
pub use parser::{MAX_GROUP_DEPTH, QueryExpr, QueryTerm, parse_query};
pub use splitter::split_top_level;
