use crate::record::NoteRecord;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read note index '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse note index '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Load the note index from a headered CSV file.
///
/// Headers and field values are whitespace-trimmed and rows shorter than the
/// header are tolerated; columns absent from the file come back as empty
/// strings on every record, so the query engine can probe any searchable
/// field without a missing-key case. A UTF-8 BOM, which the original index
/// files carry, is skipped by the reader.
pub fn load_note_index(path: &Path) -> Result<Vec<NoteRecord>, LoadError> {
    let path_display = path.display().to_string();
    let file = File::open(path).map_err(|source| LoadError::Read {
        path: path_display.clone(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: NoteRecord = row.map_err(|source| LoadError::Parse {
            path: path_display.clone(),
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}
