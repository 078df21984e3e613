//! Terminal output formatting
//!
//! Renders command reports as the per-item status lines and summary counts
//! shown to the user.

pub mod display;

pub use display::{
    print_delete_canceled, print_delete_report, print_export_report, print_find_result,
    print_import_report, print_insert_report, print_word_list,
};
