//! Single-word lookup

use crate::store::{StoreError, WordStore};

/// Whether `word` (exact match, as stored) is present.
///
/// # Errors
/// Returns `StoreError::Sqlite` on database failure.
pub fn find_word(store: &WordStore, word: &str) -> Result<bool, StoreError> {
    store.exists(word.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_stored_word() {
        let store = WordStore::open_in_memory("words").unwrap();
        store.insert("apple", None, 5).unwrap();

        assert!(find_word(&store, "apple").unwrap());
        assert!(find_word(&store, " apple ").unwrap());
        assert!(!find_word(&store, "pear").unwrap());
    }

    #[test]
    fn insert_then_find_round_trip() {
        let store = WordStore::open_in_memory("words").unwrap();
        let words = vec!["quince".to_string()];
        crate::commands::insert_words(&store, &words, "en").unwrap();

        assert!(find_word(&store, "quince").unwrap());
    }
}
