//! Word insertion
//!
//! Inserts a batch of words, skipping the ones already stored. The length of
//! each word is computed here from its trimmed character count; this is the
//! only path that derives `length`.

use crate::store::{StoreError, WordStore};

/// How a single word fared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertStatus {
    Inserted,
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    pub word: String,
    pub status: InsertStatus,
}

/// Outcome of an insert batch.
#[derive(Debug, Default)]
pub struct InsertReport {
    pub outcomes: Vec<InsertOutcome>,
    pub inserted: usize,
}

/// Insert each word (whitespace-trimmed) with the given language tag.
///
/// Duplicates are reported per-word and never abort the batch.
///
/// # Errors
/// Returns `StoreError::Sqlite` on database failure.
pub fn insert_words(
    store: &WordStore,
    words: &[String],
    language: &str,
) -> Result<InsertReport, StoreError> {
    let mut report = InsertReport::default();

    for raw in words {
        let word = raw.trim();

        let status = if store.exists(word)? {
            InsertStatus::AlreadyExists
        } else {
            let length = word.chars().count() as i64;
            match store.insert(word, Some(language), length) {
                Ok(_) => {
                    report.inserted += 1;
                    InsertStatus::Inserted
                }
                // The unique constraint stays authoritative under check-then-act.
                Err(StoreError::DuplicateWord(_)) => InsertStatus::AlreadyExists,
                Err(e) => return Err(e),
            }
        };

        report.outcomes.push(InsertOutcome {
            word: word.to_string(),
            status,
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_new_words_with_computed_length() {
        let store = WordStore::open_in_memory("words").unwrap();
        let words = vec!["apple".to_string(), "fig".to_string()];

        let report = insert_words(&store, &words, "en").unwrap();
        assert_eq!(report.inserted, 2);

        let records = store.scan_unordered().unwrap();
        assert_eq!(records[0].word, "apple");
        assert_eq!(records[0].length, 5);
        assert_eq!(records[0].language.as_deref(), Some("en"));
        assert_eq!(records[1].length, 3);
    }

    #[test]
    fn words_are_trimmed_before_insert() {
        let store = WordStore::open_in_memory("words").unwrap();
        let words = vec!["  pear ".to_string()];

        let report = insert_words(&store, &words, "en").unwrap();
        assert_eq!(report.outcomes[0].word, "pear");
        assert!(store.exists("pear").unwrap());
        assert_eq!(store.scan_unordered().unwrap()[0].length, 4);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let store = WordStore::open_in_memory("words").unwrap();
        let words = vec!["će".to_string()];

        insert_words(&store, &words, "hr").unwrap();
        assert_eq!(store.scan_unordered().unwrap()[0].length, 2);
    }

    #[test]
    fn double_insert_keeps_a_single_row() {
        let store = WordStore::open_in_memory("words").unwrap();
        let words = vec!["apple".to_string()];

        insert_words(&store, &words, "en").unwrap();
        let report = insert_words(&store, &words, "en").unwrap();

        assert_eq!(report.inserted, 0);
        assert_eq!(report.outcomes[0].status, InsertStatus::AlreadyExists);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn duplicates_do_not_abort_the_batch() {
        let store = WordStore::open_in_memory("words").unwrap();
        store.insert("apple", Some("en"), 5).unwrap();

        let words = vec!["apple".to_string(), "pear".to_string()];
        let report = insert_words(&store, &words, "en").unwrap();

        assert_eq!(report.inserted, 1);
        assert_eq!(report.outcomes[0].status, InsertStatus::AlreadyExists);
        assert_eq!(report.outcomes[1].status, InsertStatus::Inserted);
    }
}
