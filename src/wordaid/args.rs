use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "wordaid")]
#[command(about = "Command-line English-Japanese vocabulary notebook", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new word
    #[command(alias = "a")]
    Add {
        /// The English term
        english: String,

        /// The Japanese translation
        japanese: String,

        /// Pronunciation, e.g. /rʌn/
        #[arg(short, long)]
        pronunciation: Option<String>,

        /// Example sentence
        #[arg(short, long)]
        example: Option<String>,
    },

    /// List words
    #[command(alias = "ls")]
    List {
        /// Search term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// View one or more flashcards in full
    #[command(alias = "v")]
    View {
        /// Positions in the listing (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<String>,
    },

    /// Edit fields of a word
    #[command(alias = "e")]
    Edit {
        /// Position in the listing
        position: String,

        /// New English term
        #[arg(long)]
        english: Option<String>,

        /// New Japanese translation
        #[arg(long)]
        japanese: Option<String>,

        /// New pronunciation
        #[arg(long)]
        pronunciation: Option<String>,

        /// New example sentence
        #[arg(long)]
        example: Option<String>,
    },

    /// Delete one or more words
    #[command(alias = "rm")]
    Delete {
        /// Positions in the listing (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<String>,
    },

    /// Delete every word and reset the word book
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Search words (dedicated command)
    Search { term: String },

    /// Speak the English side of a word out loud
    Say {
        /// Position in the listing
        position: String,
    },

    /// Show collection statistics
    Stats,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., speech-lang)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the path of the word collection file
    Path,
}
