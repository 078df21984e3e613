//! Wordbank - CLI
//!
//! Personal word-list keeper: insert, delete, find and list words stored in
//! a local SQLite file, with CSV import/export.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordbank::{
    commands::{delete_words, find_word, insert_words, list_words},
    output::{
        print_delete_canceled, print_delete_report, print_export_report, print_find_result,
        print_import_report, print_insert_report, print_word_list,
    },
    query::{SortOrder, WordFilter},
    store::{StoreConfig, WordStore},
    transfer::{default_export_path, export_csv, import_csv},
};

#[derive(Parser)]
#[command(
    name = "wordbank",
    about = "Keep a personal word list: store words with language tags, filter by letters and length",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Database file holding the word list
    #[arg(short = 'd', long, global = true, default_value = "words.db")]
    database: PathBuf,

    /// Table name inside the database
    #[arg(short = 't', long, global = true, default_value = "words")]
    table: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert one or more words (length is computed per word)
    Insert {
        /// Words to insert
        #[arg(required = true)]
        words: Vec<String>,

        /// Language tag stored with each word
        #[arg(short = 'l', long, default_value = "fa")]
        language: String,
    },

    /// Delete words after confirmation
    Delete {
        /// Words to delete
        #[arg(required = true)]
        words: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check whether a single word is stored
    Find {
        /// The word to look up (exact match)
        word: String,
    },

    /// List words matching optional filters
    Words {
        /// Allowed characters; only words drawn entirely from them match
        chars: Option<String>,

        /// Sort by length: asc or desc (default: by word, descending)
        #[arg(short = 'o', long, value_parser = ["asc", "desc"])]
        order: Option<String>,

        /// Keep only words with this language tag
        #[arg(short = 'l', long)]
        language: Option<String>,

        /// Keep only words of at most this length
        #[arg(long)]
        lessthan: Option<i64>,

        /// Keep only words of at least this length
        #[arg(long)]
        morethan: Option<i64>,
    },

    /// Export all words to a CSV file
    Export {
        /// Output file (default: export-<timestamp>.csv)
        file: Option<PathBuf>,
    },

    /// Import words from a CSV file, skipping ones already stored
    Fromcsv {
        /// Input file with an id,word,language,length header
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = StoreConfig {
        database: cli.database,
        table: cli.table,
    };
    let store = WordStore::open(&config)?;

    match cli.command {
        Commands::Insert { words, language } => {
            let report = insert_words(&store, &words, &language)?;
            print_insert_report(&report);
        }
        Commands::Delete { words, yes } => {
            if yes || confirm("\n i) Do you want to continue?")? {
                let report = delete_words(&store, &words)?;
                print_delete_report(&report);
            } else {
                print_delete_canceled();
            }
        }
        Commands::Find { word } => {
            let found = find_word(&store, &word)?;
            print_find_result(word.trim(), found);
        }
        Commands::Words {
            chars,
            order,
            language,
            lessthan,
            morethan,
        } => {
            let filter = WordFilter {
                charset: chars,
                language,
                max_length: lessthan,
                min_length: morethan,
            };
            let order = order.as_deref().and_then(SortOrder::from_name);
            let records = list_words(&store, &filter, order)?;
            print_word_list(&records);
        }
        Commands::Export { file } => {
            let path = file.unwrap_or_else(default_export_path);
            println!("\n Start exporting rows to '{}'.", path.display());
            let report = export_csv(&store, &path)?;
            print_export_report(&report);
        }
        Commands::Fromcsv { file } => {
            let report = import_csv(&store, &file)?;
            print_import_report(&report);
        }
    }

    Ok(())
}

/// Ask the user a yes/no question, defaulting to yes.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [Y/n]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(
        input.trim().to_lowercase().as_str(),
        "" | "y" | "yes"
    ))
}
