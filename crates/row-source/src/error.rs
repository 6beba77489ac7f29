use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to access rows file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed JSON rows: {0}")]
    Json(#[from] serde_json::Error),

    /// `line` is the 1-based line of the offending record, when the reader knows it.
    #[error("Malformed CSV rows: {source}")]
    Csv { line: Option<u64>, source: csv::Error },

    #[error("Unsupported rows file '{}': expected a .json or .csv extension", .0.display())]
    UnsupportedFormat(PathBuf),
}
