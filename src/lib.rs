//! Wordbank
//!
//! A personal word-list keeper backed by a single SQLite file. Words carry an
//! optional language tag and their character count, and can be listed through
//! composable filters (allowed character set, language, length bounds) or
//! moved in bulk through CSV files.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordbank::store::{StoreConfig, WordStore};
//! use wordbank::commands::insert_words;
//!
//! let store = WordStore::open(&StoreConfig::default()).unwrap();
//! let report = insert_words(&store, &["apple".into()], "en").unwrap();
//! println!("inserted {} words", report.inserted);
//! ```

// Core domain types
pub mod core;

// SQLite-backed record store
pub mod store;

// Filter predicates and ordering for listings
pub mod query;

// CSV import/export
pub mod transfer;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
