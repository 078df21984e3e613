//! Filtered listing

use crate::core::WordRecord;
use crate::query::{SortOrder, WordFilter};
use crate::store::{StoreError, WordStore};

/// All records matching `filter`, ordered per `order` (or word-descending
/// when no direction is given). Any filter combination is accepted; a
/// contradictory one just matches nothing.
///
/// # Errors
/// Returns `StoreError::Sqlite` on database failure.
pub fn list_words(
    store: &WordStore,
    filter: &WordFilter,
    order: Option<SortOrder>,
) -> Result<Vec<WordRecord>, StoreError> {
    store.scan(filter, order)
}
