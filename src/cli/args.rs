//! CLI argument definitions

use clap::{Parser, Subcommand};

/// Command-line interface for the phonetic matcher.
#[derive(Parser)]
#[command(name = "phonomatch")]
#[command(about = "Phonetic word matching for early readers of French")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Match a spoken transcript against an expected word
    Match {
        /// What the recognizer heard
        spoken: String,

        /// The word the child was asked to read
        expected: String,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical phonetic form of a text
    Phonetic {
        /// Text to canonicalize
        text: String,
    },

    /// List the phonetic spelling variations of a text
    Variations {
        /// Text to expand
        text: String,
    },

    /// Print the consonant skeleton of a text
    Skeleton {
        /// Text to reduce
        text: String,
    },

    /// Print the normalized form of a text
    Normalize {
        /// Text to normalize
        text: String,
    },

    /// Rate a response time with 1-3 stars
    Stars {
        /// Response time in milliseconds
        elapsed_ms: u64,

        /// The word that was read
        word: String,

        /// Difficulty level
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
        level: u8,

        /// Emit the rating and thresholds as JSON
        #[arg(long)]
        json: bool,
    },

    /// Launch the interactive practice REPL
    Repl {
        /// Difficulty level used for star ratings
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
        level: u8,
    },
}
