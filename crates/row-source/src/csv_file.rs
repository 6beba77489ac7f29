use crate::error::SourceError;
use chrono::NaiveDate;
use core_types::{Channel, Row};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One CSV record. Revenue is read from the raw field text, so it never passes
/// through a float on its way to `Decimal`.
#[derive(Deserialize)]
struct CsvRecord {
    date: NaiveDate,
    channel: Channel,
    orders: u64,
    units: u64,
    #[serde(deserialize_with = "rust_decimal::serde::str::deserialize")]
    revenue: Decimal,
}

impl From<CsvRecord> for Row {
    fn from(record: CsvRecord) -> Self {
        Row {
            date: record.date,
            channel: record.channel,
            orders: record.orders,
            units: record.units,
            revenue: record.revenue,
        }
    }
}

/// Parses CSV text with a `date,channel,orders,units,revenue` header.
///
/// Columns are matched by header name, so their order is free and extra columns
/// are ignored. A leading UTF-8 BOM is stripped.
pub fn parse_csv(text: &str) -> Result<Vec<Row>, SourceError> {
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.deserialize::<CsvRecord>() {
        let record = result.map_err(|source| SourceError::Csv {
            line: source.position().map(|p| p.line()),
            source,
        })?;
        rows.push(Row::from(record));
    }
    Ok(rows)
}

pub fn load_csv(path: &Path) -> Result<Vec<Row>, SourceError> {
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = parse_csv(&text)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Loaded CSV rows.");
    Ok(rows)
}
