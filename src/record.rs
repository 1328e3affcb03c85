use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single note from the index.
///
/// Every field is plain text. Columns missing from the source CSV default to
/// the empty string so field lookups during matching never fail. `tags` holds
/// the comma-joined tag list as one string; matching treats it as a plain
/// substring, not a parsed set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteRecord {
    pub title: String,
    pub key: String,
    pub date: String,
    pub tags: String,
    pub memo: String,
    pub commonplace_key: String,
    /// Path of the original document, relative to the configured PDF root.
    pub filepath: String,
    /// Name of the merged PDF this note was bound into, if any.
    pub merged_pdf_filename: String,
    /// Start page within the merged PDF (kept as text, may be empty).
    pub merged_start_page: String,
}

impl NoteRecord {
    /// Get the value of one searchable field.
    pub fn field(&self, field: NoteField) -> &str {
        match field {
            NoteField::Title => &self.title,
            NoteField::Key => &self.key,
            NoteField::Date => &self.date,
            NoteField::Tags => &self.tags,
            NoteField::Memo => &self.memo,
            NoteField::CommonplaceKey => &self.commonplace_key,
        }
    }
}

/// The searchable fields of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteField {
    Title,
    Key,
    Date,
    Tags,
    Memo,
    CommonplaceKey,
}

impl NoteField {
    /// All searchable fields, in the order a global (unscoped) term probes them.
    pub const SEARCHABLE: [NoteField; 6] = [
        NoteField::Title,
        NoteField::Tags,
        NoteField::Key,
        NoteField::Memo,
        NoteField::CommonplaceKey,
        NoteField::Date,
    ];

    /// Get the canonical column name of this field
    pub fn canonical_name(&self) -> &'static str {
        match self {
            NoteField::Title => "title",
            NoteField::Key => "key",
            NoteField::Date => "date",
            NoteField::Tags => "tags",
            NoteField::Memo => "memo",
            NoteField::CommonplaceKey => "commonplace_key",
        }
    }
}

impl fmt::Display for NoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

/// The fixed prefix alias table. Unknown prefixes are not an error at this
/// level; the query parser treats them as literal text.
impl FromStr for NoteField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(NoteField::Title),
            "key" => Ok(NoteField::Key),
            "date" => Ok(NoteField::Date),
            "tag" | "tags" => Ok(NoteField::Tags),
            "memo" => Ok(NoteField::Memo),
            "cpkey" | "indexkey" | "ikey" => Ok(NoteField::CommonplaceKey),
            _ => Err(()),
        }
    }
}
