use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim, Writer};

use crate::error::LoadError;
use crate::telemetry::columns::{self, REQUIRED};
use crate::telemetry::{Sample, TelemetryTable};

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Load and validate a telemetry CSV.
///
/// Fails with [`LoadError::FileNotFound`] when `path` does not exist and with
/// [`LoadError::Schema`] when any required column is absent. Columns beyond
/// the required set are ignored.
pub fn load(path: impl AsRef<Path>) -> Result<TelemetryTable, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::FileNotFound { path: path.to_path_buf() });
    }

    log::info!("Loading telemetry from {:?}", path);
    let table = read_table(File::open(path)?)?;
    log::info!("Loaded {} telemetry samples", table.len());
    Ok(table)
}

/// Parse a telemetry table from any reader. Header row required.
pub fn read_table<R: Read>(reader: R) -> Result<TelemetryTable, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing = columns::missing(headers.iter());
    if !missing.is_empty() {
        return Err(LoadError::Schema {
            missing: missing.into_iter().map(String::from).collect(),
        });
    }

    // Position of each required column in this file's header.
    let mut index = [0usize; 22];
    for (slot, name) in index.iter_mut().zip(REQUIRED) {
        *slot = headers.iter().position(|h| h == name).unwrap_or_default();
    }

    let mut samples = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let mut fields = [0.0_f64; 22];
        for (k, &col) in index.iter().enumerate() {
            let raw = record.get(col).unwrap_or("");
            // Blank cells are gaps, not errors.
            if raw.is_empty() {
                fields[k] = f64::NAN;
                continue;
            }
            fields[k] = raw.parse::<f64>().map_err(|_| LoadError::Value {
                row: row + 1,
                column: REQUIRED[k],
                value: raw.to_string(),
            })?;
        }
        samples.push(Sample::from_fields(&fields));
    }

    Ok(TelemetryTable::from_samples(samples))
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Write a table in the format [`read_table`] accepts.
///
/// Columns: the 22 required headers in canonical order.
pub fn write_table<W: Write>(writer: W, table: &TelemetryTable) -> Result<(), csv::Error> {
    let mut w = Writer::from_writer(writer);
    w.write_record(REQUIRED)?;
    for s in table.samples() {
        w.write_record(s.fields().iter().map(|v| v.to_string()))?;
    }
    w.flush()?;
    Ok(())
}

/// Write a table to a CSV file at the given path.
pub fn write_table_file(path: impl AsRef<Path>, table: &TelemetryTable) -> Result<(), csv::Error> {
    let file = File::create(path)?;
    write_table(file, table)
}
