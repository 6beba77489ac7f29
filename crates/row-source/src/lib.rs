//! # Commerce Pulse Row Sources
//!
//! Adapters that produce the flat `Row` collection the dashboard aggregates.
//!
//! ## Architectural Principles
//!
//! - **Adapter Layer:** Everything that touches the filesystem or invents data
//!   lives here. The analytics crate only ever sees a `&[Row]`.
//! - **Validation at the Boundary:** Dates, counts and amounts are parsed into
//!   typed fields on the way in, so malformed input fails here with a
//!   `SourceError` instead of leaking into aggregation.
//!
//! ## Public API
//!
//! - `RowSource`: the trait both sources implement.
//! - `FileSource`: `.json` or `.csv` files, picked by extension.
//! - `DemoSource` / `DemoGenerator`: the seeded synthetic dataset.

pub mod csv_file;
pub mod demo;
pub mod error;
pub mod json_file;

pub use csv_file::{load_csv, parse_csv};
pub use demo::DemoGenerator;
pub use error::SourceError;
pub use json_file::{load_json, parse_json, write_json};

use core_types::{Clock, Row};
use std::path::{Path, PathBuf};

/// Anything that can hand the dashboard its ordered row collection.
pub trait RowSource {
    fn load(&self) -> Result<Vec<Row>, SourceError>;
}

/// Rows read from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for FileSource {
    fn load(&self) -> Result<Vec<Row>, SourceError> {
        load(&self.path)
    }
}

/// Rows produced by the demo generator, anchored to a clock.
#[derive(Debug, Clone)]
pub struct DemoSource<C> {
    generator: DemoGenerator,
    clock: C,
}

impl<C: Clock> DemoSource<C> {
    pub fn new(generator: DemoGenerator, clock: C) -> Self {
        Self { generator, clock }
    }
}

impl<C: Clock> RowSource for DemoSource<C> {
    fn load(&self) -> Result<Vec<Row>, SourceError> {
        Ok(self.generator.generate(&self.clock))
    }
}

/// Loads rows from `path`, choosing the parser by file extension.
pub fn load(path: &Path) -> Result<Vec<Row>, SourceError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => load_json(path),
        Some("csv") => load_csv(path),
        _ => Err(SourceError::UnsupportedFormat(path.to_path_buf())),
    }
}
