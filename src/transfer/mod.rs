//! Bulk transfer
//!
//! Moves records between the store and delimited text files: import skips
//! words that are already stored, export writes the whole table with a
//! header line.

mod export;
mod import;

use thiserror::Error;

pub use export::{ExportReport, default_export_path, export_csv};
pub use import::{ImportOutcome, ImportReport, import_csv};

use crate::store::StoreError;

/// Errors that abort a whole import or export.
///
/// Per-row duplicates are not errors; they show up as skipped rows in the
/// import report.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("csv file is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: invalid length value '{value}'")]
    BadLength { row: usize, value: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}
