//! CSV parsing with a semicolon-delimiter fallback.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::decode::decode_bytes;
use crate::error::{IngestError, Result};

/// Delimiters tried in order.
const DELIMITERS: [u8; 2] = [b',', b';'];

/// A parsed table: trimmed headers and rows padded to the header width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV file, decoding it and picking the delimiter that fits.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::read(path, e))?;
    let (text, encoding) = decode_bytes(&bytes);
    debug!(path = %path.display(), encoding = encoding.name(), "decoded table");
    let table = parse_table(&text).map_err(|message| IngestError::CsvParse {
        path: path.to_path_buf(),
        message,
    })?;
    if table.headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(table)
}

/// Parses CSV text, retrying with `;` when `,` fails or clearly did not split.
pub fn parse_table(text: &str) -> std::result::Result<RawTable, String> {
    let mut unsplit: Option<RawTable> = None;
    let mut last_error = String::new();
    for delimiter in DELIMITERS {
        match parse_with_delimiter(text, delimiter) {
            Ok(table) if looks_unsplit(&table, delimiter) => {
                debug!(delimiter = %char::from(delimiter), "single unsplit column, retrying");
                unsplit.get_or_insert(table);
            }
            Ok(table) => return Ok(table),
            Err(error) => last_error = error.to_string(),
        }
    }
    unsplit.ok_or(last_error)
}

fn looks_unsplit(table: &RawTable, delimiter: u8) -> bool {
    delimiter != b';' && table.headers.len() == 1 && table.headers[0].contains(';')
}

fn parse_with_delimiter(text: &str, delimiter: u8) -> csv::Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() == 1 && record.get(0).is_some_and(|cell| cell.trim().is_empty()) {
            continue;
        }
        let row: Vec<String> = (0..headers.len())
            .map(|idx| record.get(idx).unwrap_or("").to_string())
            .collect();
        rows.push(row);
    }
    Ok(RawTable { headers, rows })
}
