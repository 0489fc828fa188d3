use crate::models::input_record::CsvRow;
use crate::{CoreError, CoreResult, InputRecord};

use std::fs::File;
use std::io::Read;
use std::panic::Location;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use error_location::ErrorLocation;
use log::debug;

/// Read user rows from a CSV file.
///
/// The first line must be a header naming the columns (`userName`,
/// `displayName`, `emails`, `roles`). Unknown columns are ignored and missing
/// ones read as empty, as do trailing cells missing from a short row.
#[track_caller]
pub fn read_csv_file(path: &Path) -> CoreResult<Vec<InputRecord>> {
    if !path.exists() {
        return Err(CoreError::NotFound {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let file = File::open(path).map_err(|e| CoreError::Io {
        path: path.to_path_buf(),
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })?;

    let records = read_csv(file)?;
    debug!("Read {} rows from {}", records.len(), path.display());
    Ok(records)
}

/// Read user rows from any CSV source. See [`read_csv_file`].
pub fn read_csv<R: Read>(source: R) -> CoreResult<Vec<InputRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let mut record = result?;
        let line = record.position().map(|p| p.line());

        // Exporters drop empty trailing cells; those read as empty.
        while record.len() < headers.len() {
            record.push_field("");
        }

        let row: CsvRow = record.deserialize(Some(&headers))?;
        records.push(InputRecord::from_row(row, line));
    }

    Ok(records)
}
