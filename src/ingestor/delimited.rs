//! Delimited-text (CSV) record reader
//!
//! The first row is a header and is discarded without inspection. Every
//! following row maps positionally: field 0 is the postal code, field 3
//! the city and field 6 the region. Fields are taken verbatim; no
//! whitespace is trimmed.

use std::io::Read;

use super::RecordReader;
use crate::errors::{LoadError, LoadResult};
use crate::models::ZipRecord;

pub const CODE_FIELD: usize = 0;
pub const CITY_FIELD: usize = 3;
pub const REGION_FIELD: usize = 6;

/// Minimum number of fields a data row must carry
pub const MIN_FIELDS: usize = REGION_FIELD + 1;

#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedReader;

impl RecordReader for DelimitedReader {
    fn read_records(&self, reader: &mut dyn Read, capacity: usize) -> LoadResult<Vec<ZipRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::with_capacity(capacity);
        let mut row = csv::StringRecord::new();

        loop {
            match csv_reader.read_record(&mut row) {
                Ok(true) => records.push(record_from_row(&row)?),
                Ok(false) => return Ok(records),
                Err(e) => return Err(convert_csv_error(e)),
            }
        }
    }
}

fn record_from_row(row: &csv::StringRecord) -> LoadResult<ZipRecord> {
    let line = row.position().map(|p| p.line()).unwrap_or_default();

    match (row.get(CODE_FIELD), row.get(CITY_FIELD), row.get(REGION_FIELD)) {
        (Some(code), Some(city), Some(region)) => Ok(ZipRecord::new(code, city, region)),
        _ => Err(LoadError::parse(
            line,
            format!("expected at least {MIN_FIELDS} fields, found {}", row.len()),
        )),
    }
}

fn convert_csv_error(err: csv::Error) -> LoadError {
    let line = err.position().map(|p| p.line()).unwrap_or_default();
    let message = err.to_string();

    match err.into_kind() {
        csv::ErrorKind::Io(io) => LoadError::Io(io),
        _ => LoadError::parse(line, message),
    }
}
