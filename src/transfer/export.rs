//! CSV export
//!
//! Writes the whole table in natural scan order: an unquoted header line in
//! column order, then one line per record with every field double-quoted.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use log::debug;

use crate::core::COLUMNS;
use crate::store::WordStore;

use super::TransferError;

/// Outcome of an export run.
#[derive(Debug)]
pub struct ExportReport {
    pub path: PathBuf,
    pub exported: u64,
}

/// Timestamped filename used when the caller gives none.
#[must_use]
pub fn default_export_path() -> PathBuf {
    PathBuf::from(format!("export-{}.csv", Local::now().format("%Y-%m-%d %X")))
}

/// Export every record to the CSV file at `path`.
///
/// # Errors
/// `TransferError::Io` if the file cannot be written, `Store` if the scan
/// fails. No partial-file cleanup is attempted on failure.
pub fn export_csv(store: &WordStore, path: &Path) -> Result<ExportReport, TransferError> {
    debug!("exporting to {}", path.display());
    let records = store.scan_unordered()?;

    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{}", COLUMNS.join(","))?;
    for record in &records {
        let line: Vec<String> = record.fields().iter().map(|f| quote(f)).collect();
        writeln!(out, "{}", line.join(","))?;
    }
    out.flush()?;

    Ok(ExportReport {
        path: path.to_path_buf(),
        exported: records.len() as u64,
    })
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
