//! phonomatch - Phonetic word matching for early readers of French
//!
//! One-shot matcher/engine commands and an interactive practice REPL.

use clap::Parser;
use colored::Colorize;
use std::process;

use phonomatch::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli.command) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}
