//! Word deletion
//!
//! Removes a batch of words, reporting per-word whether anything was there
//! to remove. Confirmation is the front-end's responsibility; by the time
//! this runs the user has already agreed.

use crate::store::{StoreError, WordStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub word: String,
    pub removed: bool,
}

/// Outcome of a delete batch.
#[derive(Debug, Default)]
pub struct DeleteReport {
    pub outcomes: Vec<DeleteOutcome>,
}

impl DeleteReport {
    #[must_use]
    pub fn removed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.removed).count()
    }
}

/// Delete each word, reporting not-found per-word without aborting.
///
/// # Errors
/// Returns `StoreError::Sqlite` on database failure.
pub fn delete_words(store: &WordStore, words: &[String]) -> Result<DeleteReport, StoreError> {
    let mut report = DeleteReport::default();

    for word in words {
        let removed = store.delete(word)?;
        report.outcomes.push(DeleteOutcome {
            word: word.clone(),
            removed,
        });
    }

    Ok(report)
}
