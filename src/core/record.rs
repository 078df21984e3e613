//! Stored word record
//!
//! One row of the word table. The field order here is the canonical column
//! order used by the schema and by CSV export.

use std::fmt;

/// Column names in table order (`id, word, language, length`).
pub const COLUMNS: [&str; 4] = ["id", "word", "language", "length"];

/// A single stored word with its language tag and character count.
///
/// `id` is assigned by the store on insert and never reused after deletion.
/// `length` is derived from `word` on manual insert; bulk import trusts the
/// value found in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub id: i64,
    pub word: String,
    pub language: Option<String>,
    pub length: i64,
}

impl WordRecord {
    /// The record's fields as strings, in [`COLUMNS`] order.
    ///
    /// A missing language tag renders as the empty string.
    #[must_use]
    pub fn fields(&self) -> [String; 4] {
        [
            self.id.to_string(),
            self.word.clone(),
            self.language.clone().unwrap_or_default(),
            self.length.to_string(),
        ]
    }
}

impl fmt::Display for WordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_follow_column_order() {
        let record = WordRecord {
            id: 7,
            word: "apple".to_string(),
            language: Some("en".to_string()),
            length: 5,
        };
        assert_eq!(record.fields(), ["7", "apple", "en", "5"]);
        assert_eq!(COLUMNS, ["id", "word", "language", "length"]);
    }

    #[test]
    fn missing_language_renders_empty() {
        let record = WordRecord {
            id: 1,
            word: "kiwi".to_string(),
            language: None,
            length: 4,
        };
        assert_eq!(record.fields()[2], "");
    }

    #[test]
    fn record_display_is_the_word() {
        let record = WordRecord {
            id: 3,
            word: "grape".to_string(),
            language: None,
            length: 5,
        };
        assert_eq!(format!("{record}"), "grape");
    }
}
