//! Command implementations
//!
//! The operations the CLI front-end calls into. Each validates its own
//! inputs, delegates to the store, and returns a typed report; rendering
//! lives in [`crate::output`].

pub mod delete;
pub mod find;
pub mod insert;
pub mod list;

pub use delete::{DeleteOutcome, DeleteReport, delete_words};
pub use find::find_word;
pub use insert::{InsertOutcome, InsertReport, InsertStatus, insert_words};
pub use list::list_words;
