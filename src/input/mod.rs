use std::io::Read;
use std::path::Path;

use thiserror::Error;

pub mod records;
pub mod source;

use records::{DATE_COLUMN, LoadOutcome, RawRow, load};
use source::open_maybe_gz;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Loads a CSV export from disk; `*.gz` files are decompressed on the fly.
pub fn load_table_file(path: &Path) -> Result<LoadOutcome, InputError> {
    let reader = open_maybe_gz(path)?;
    let outcome = load_csv_reader(reader)?;
    tracing::info!(
        path = %path.display(),
        rows = outcome.rows_read,
        records = outcome.records.len(),
        dropped_missing_date = outcome.dropped_missing_date,
        dropped_invalid_date = outcome.dropped_invalid_date,
        "loaded table"
    );
    Ok(outcome)
}

/// Decodes header-driven CSV and hands the rows to the record loader.
/// Columns other than `date` and the three scores are carried in the raw
/// rows but ignored by the loader. Cells are decoded lossily, so a stray
/// non-UTF-8 byte never rejects a row. An empty input is an empty table.
pub fn load_csv_reader<R: Read>(reader: R) -> Result<LoadOutcome, InputError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .byte_headers()?
        .iter()
        .map(|h| normalize_header(&String::from_utf8_lossy(h)))
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        tracing::warn!("input has no header row; table is empty");
        return Ok(LoadOutcome::default());
    }
    if !headers.iter().any(|h| h == DATE_COLUMN) {
        return Err(InputError::InvalidInput(format!(
            "header has no `{DATE_COLUMN}` column (found: {})",
            headers.join(", ")
        )));
    }

    let mut rows = Vec::new();
    for result in rdr.byte_records() {
        let record = result?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), String::from_utf8_lossy(v).into_owned()))
            .collect();
        rows.push(row);
    }

    Ok(load(rows))
}

fn normalize_header(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
