//! Display functions for command reports

use colored::Colorize;

use crate::commands::{DeleteReport, InsertReport, InsertStatus};
use crate::core::WordRecord;
use crate::transfer::{ExportReport, ImportReport};

/// Print per-word insert status lines and the summary count.
pub fn print_insert_report(report: &InsertReport) {
    println!("\n > Start inserting.\n");

    for (i, outcome) in report.outcomes.iter().enumerate() {
        match outcome.status {
            InsertStatus::Inserted => {
                println!(" {}. {} Inserted '{}'.", i + 1, "✓".green(), outcome.word);
            }
            InsertStatus::AlreadyExists => {
                println!(
                    " {}. Word '{}' {}.",
                    i + 1,
                    outcome.word,
                    "already exists".yellow()
                );
            }
        }
    }

    println!("\n > Inserted {} words.\n", report.inserted);
}

/// Print per-word delete status lines.
pub fn print_delete_report(report: &DeleteReport) {
    println!();
    for (i, outcome) in report.outcomes.iter().enumerate() {
        if outcome.removed {
            println!(" {}. {} Deleted '{}'.", i + 1, "✓".green(), outcome.word);
        } else {
            println!(
                " {}. {} Word '{}' not found.",
                i + 1,
                "✕".red(),
                outcome.word
            );
        }
    }
    println!("\n > Deleted {} words.\n", report.removed());
}

/// Printed when the user declines the delete confirmation.
pub fn print_delete_canceled() {
    println!("\n {} Canceled deleting.\n", "⏹".yellow());
}

/// Print found/not-found for a single word.
pub fn print_find_result(word: &str, found: bool) {
    if found {
        println!("\n {} '{word}' is found.\n", "✅".green());
    } else {
        println!("\n {} '{word}' not found.\n", "🚫".red());
    }
}

/// Print the filtered listing, one word per line with a 1-based index.
pub fn print_word_list(records: &[WordRecord]) {
    println!("\n ✍️  Showing words.\n");

    for (i, record) in records.iter().enumerate() {
        println!(" {}) {}", i + 1, record.word);
    }
}

/// Print the rows an import inserted, or that there was nothing new.
pub fn print_import_report(report: &ImportReport) {
    for outcome in report.rows.iter().filter(|o| o.inserted) {
        println!(
            " {}. {} Inserted '{}'.",
            outcome.row,
            "✓".green(),
            outcome.word
        );
    }

    if report.nothing_new() {
        println!("\n > There is nothing new to import.\n");
    } else {
        println!("\n > Imported {} new words.\n", report.inserted);
    }
}

/// Print the export summary.
pub fn print_export_report(report: &ExportReport) {
    println!(
        "\n {} Exported {} words to '{}'.\n",
        "✓".green(),
        report.exported,
        report.path.display()
    );
}
