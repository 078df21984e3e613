//! CSV import
//!
//! Reads a header-carrying CSV file and inserts every row whose word is not
//! already stored. Any `id` column in the source is ignored; the store
//! assigns its own. The `length` column is taken verbatim from the file and
//! not recomputed, unlike manual insert.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::debug;

use crate::store::{StoreError, WordStore};

use super::TransferError;

/// One data row's fate during import. `row` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub row: usize,
    pub word: String,
    pub inserted: bool,
}

/// Outcome of a whole import run.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub rows: Vec<ImportOutcome>,
    pub inserted: usize,
}

impl ImportReport {
    #[must_use]
    pub fn nothing_new(&self) -> bool {
        self.inserted == 0
    }
}

/// Import rows from the CSV file at `path`.
///
/// Fields may be quoted; surrounding whitespace is insignificant. Rows whose
/// word already exists are skipped, not errors. An empty `language` field
/// imports as no tag.
///
/// # Errors
/// `TransferError::Csv`/`Io` if the file cannot be read or parsed,
/// `MissingColumn` if the header lacks `word` or `length`, `BadLength` for a
/// non-numeric length field, `Store` for database failures.
pub fn import_csv(store: &WordStore, path: &Path) -> Result<ImportReport, TransferError> {
    debug!("importing from {}", path.display());
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(path)?;

    let headers = reader.headers()?.clone();
    let word_col = headers
        .iter()
        .position(|h| h == "word")
        .ok_or(TransferError::MissingColumn("word"))?;
    let length_col = headers
        .iter()
        .position(|h| h == "length")
        .ok_or(TransferError::MissingColumn("length"))?;
    let language_col = headers.iter().position(|h| h == "language");

    let mut report = ImportReport::default();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = i + 1;

        let word = record.get(word_col).unwrap_or("").to_string();
        let raw_length = record.get(length_col).unwrap_or("");
        let language = language_col
            .and_then(|col| record.get(col))
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        if store.exists(&word)? {
            report.rows.push(ImportOutcome {
                row,
                word,
                inserted: false,
            });
            continue;
        }

        let length: i64 = raw_length.parse().map_err(|_| TransferError::BadLength {
            row,
            value: raw_length.to_string(),
        })?;

        match store.insert(&word, language.as_deref(), length) {
            Ok(_) => {
                report.inserted += 1;
                report.rows.push(ImportOutcome {
                    row,
                    word,
                    inserted: true,
                });
            }
            // The unique constraint stays authoritative under check-then-act.
            Err(StoreError::DuplicateWord(_)) => {
                report.rows.push(ImportOutcome {
                    row,
                    word,
                    inserted: false,
                });
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn imports_rows_and_drops_source_ids() {
        let store = WordStore::open_in_memory("words").unwrap();
        let file = csv_file(
            "id,word,language,length\n\
             \"9\",\"apple\",\"en\",\"5\"\n\
             \"12\",\"kiwi\",\"en\",\"4\"\n",
        );

        let report = import_csv(&store, file.path()).unwrap();
        assert_eq!(report.inserted, 2);

        let records = store.scan_unordered().unwrap();
        assert_eq!(records.len(), 2);
        // The store assigns its own ids, starting over from 1.
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].word, "apple");
        assert_eq!(records[0].language.as_deref(), Some("en"));
        assert_eq!(records[0].length, 5);
    }

    #[test]
    fn skips_words_already_stored() {
        let store = WordStore::open_in_memory("words").unwrap();
        store.insert("apple", Some("en"), 5).unwrap();

        let file = csv_file(
            "word,language,length\n\
             apple,en,5\n\
             pear,en,4\n",
        );

        let report = import_csv(&store, file.path()).unwrap();
        assert_eq!(report.inserted, 1);
        assert_eq!(
            report.rows,
            vec![
                ImportOutcome {
                    row: 1,
                    word: "apple".to_string(),
                    inserted: false
                },
                ImportOutcome {
                    row: 2,
                    word: "pear".to_string(),
                    inserted: true
                },
            ]
        );
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn whitespace_after_delimiters_is_insignificant() {
        let store = WordStore::open_in_memory("words").unwrap();
        let file = csv_file("word, language, length\napple, en, 5\n");

        let report = import_csv(&store, file.path()).unwrap();
        assert_eq!(report.inserted, 1);

        let record = &store.scan_unordered().unwrap()[0];
        assert_eq!(record.word, "apple");
        assert_eq!(record.language.as_deref(), Some("en"));
        assert_eq!(record.length, 5);
    }

    #[test]
    fn file_length_is_trusted_verbatim() {
        let store = WordStore::open_in_memory("words").unwrap();
        let file = csv_file("word,length\napple,99\n");

        import_csv(&store, file.path()).unwrap();
        assert_eq!(store.scan_unordered().unwrap()[0].length, 99);
    }

    #[test]
    fn empty_language_imports_as_none() {
        let store = WordStore::open_in_memory("words").unwrap();
        let file = csv_file("word,language,length\napple,,5\n");

        import_csv(&store, file.path()).unwrap();
        assert_eq!(store.scan_unordered().unwrap()[0].language, None);
    }

    #[test]
    fn nothing_new_when_every_row_is_known() {
        let store = WordStore::open_in_memory("words").unwrap();
        store.insert("apple", None, 5).unwrap();

        let file = csv_file("word,length\napple,5\n");
        let report = import_csv(&store, file.path()).unwrap();
        assert!(report.nothing_new());
    }

    #[test]
    fn missing_word_column_aborts() {
        let store = WordStore::open_in_memory("words").unwrap();
        let file = csv_file("id,language,length\n1,en,5\n");

        let err = import_csv(&store, file.path()).unwrap_err();
        assert!(matches!(err, TransferError::MissingColumn("word")));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn bad_length_aborts_with_row_number() {
        let store = WordStore::open_in_memory("words").unwrap();
        let file = csv_file("word,length\napple,5\npear,soft\n");

        let err = import_csv(&store, file.path()).unwrap_err();
        assert!(matches!(err, TransferError::BadLength { row: 2, .. }));
    }

    #[test]
    fn unreadable_file_is_fatal() {
        let store = WordStore::open_in_memory("words").unwrap();
        let err = import_csv(&store, Path::new("no/such/file.csv")).unwrap_err();
        assert!(matches!(err, TransferError::Csv(_)));
    }
}
