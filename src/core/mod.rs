//! Core domain types
//!
//! The stored record shape and its canonical column order. Everything here is
//! independent of the storage backend.

mod record;

pub use record::{COLUMNS, WordRecord};
