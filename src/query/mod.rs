//! Listing filters and ordering
//!
//! Translates the optional user constraints (allowed character set, language,
//! length bounds) into a single SQL predicate evaluated in one pass over the
//! store, plus the ordering rule for the listing.

mod filter;

pub use filter::{SortOrder, WordFilter, charset_class};
