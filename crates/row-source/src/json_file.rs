use crate::error::SourceError;
use core_types::Row;
use std::fs;
use std::path::Path;

/// Parses a JSON array of row objects. Fields other than the five row fields are ignored.
///
/// Revenue may be a JSON number or a numeric string. Numbers are read from their
/// literal text, so long amounts keep every digit.
pub fn parse_json(text: &str) -> Result<Vec<Row>, SourceError> {
    let rows: Vec<Row> = serde_json::from_str(text)?;
    Ok(rows)
}

pub fn load_json(path: &Path) -> Result<Vec<Row>, SourceError> {
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = parse_json(&text)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Loaded JSON rows.");
    Ok(rows)
}

/// Writes rows as a pretty-printed JSON array that `load_json` can read back.
pub fn write_json(path: &Path, rows: &[Row]) -> Result<(), SourceError> {
    let text = serde_json::to_string_pretty(rows)?;
    fs::write(path, text).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Wrote JSON rows.");
    Ok(())
}
