//! CSV ingestion implementation.

use std::io::Read;

use crate::error::ParseFailure;
use crate::types::Table;

use super::infer::{Cell, build_table};

/// Parse CSV bytes into a [`Table`].
///
/// Rules:
///
/// - The first record is the header row and must exist.
/// - Column types are inferred from the data (see [`super::infer`]).
/// - Rows shorter than the header are padded with missing cells; longer rows are an error.
pub fn ingest_csv_from_bytes(bytes: &[u8]) -> Result<Table, ParseFailure> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);
    ingest_csv_from_reader(&mut rdr)
}

/// Parse CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: Read>(rdr: &mut csv::Reader<R>) -> Result<Table, ParseFailure> {
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(ParseFailure::malformed("no columns to parse (empty header row)"));
    }

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(Cell::from_text).collect());
    }

    build_table(headers.iter().map(str::to_owned).collect(), rows)
}
