//! Interactive reading-practice REPL.
//!
//! Set a target word with `word <w>`, then type what the recognizer
//! heard; every other line is scored as an attempt. `phonetic`,
//! `skeleton` and `variations` expose the engine for exploring why a
//! verdict came out the way it did.

pub mod command;
pub mod state;

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cli::commands::print_verdict;
use crate::feedback::encouraging_feedback;
use crate::normalize::normalize;
use crate::phonetic::{consonant_skeleton, PhoneticEngine};
use crate::scoring::{calculate_stars, format_time};

pub use command::Command;
pub use state::ReplState;

/// Run the practice REPL until the user quits.
pub fn run(level: u8) -> Result<()> {
    print_banner();

    let mut state = ReplState::new(level);
    let mut editor = DefaultEditor::new()?;

    loop {
        let prompt = match &state.expected {
            Some(word) => format!("{} ", format!("[{word}]>").cyan()),
            None => format!("{} ", ">".cyan()),
        };

        match editor.readline(&prompt) {
            Ok(line) => {
                editor.add_history_entry(&line)?;
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => dispatch(command, &mut state),
                    Err(usage) => eprintln!("{}", usage.yellow()),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("{}", "À bientôt !".cyan());
    Ok(())
}

fn dispatch(command: Command, state: &mut ReplState) {
    match command {
        Command::Word(word) => {
            println!("target word: {}", word.bold());
            state.set_word(word);
        }
        Command::Level(level) => {
            state.level = level;
            println!("level: {level}");
        }
        Command::Phonetic(text) => {
            println!("{}", PhoneticEngine::french().to_phonetic(&text));
        }
        Command::Skeleton(text) => {
            println!("{}", consonant_skeleton(&text));
        }
        Command::Variations(text) => {
            let mut variations: Vec<String> =
                PhoneticEngine::french().variations(&text).into_iter().collect();
            variations.sort();
            println!("{}", variations.join(" "));
        }
        Command::Help => print_help(),
        Command::Attempt(attempt) => run_attempt(&attempt, state),
        Command::Nothing | Command::Quit => {}
    }
}

fn run_attempt(attempt: &str, state: &mut ReplState) {
    let Some(expected) = state.expected.clone() else {
        eprintln!("{}", "set a target first: word <w>".yellow());
        return;
    };

    let elapsed_ms = state.elapsed_ms();
    let result = state.matcher.match_word(attempt, &expected);
    print_verdict(&result);

    if result.is_correct {
        let word_length = normalize(&expected).chars().count();
        let stars = calculate_stars(elapsed_ms, word_length, state.level);
        let painted = "★".repeat(stars as usize).yellow().bold();
        println!(
            "  {painted}  {} — {}",
            format_time(elapsed_ms),
            encouraging_feedback(stars, &mut state.rng)
        );
        // Ready for the next run at the same word.
        state.set_word(expected);
    } else {
        println!("  {} {}%", "confidence:".dimmed(), result.confidence);
    }
}

fn print_banner() {
    println!("{}", "phonomatch practice".bold());
    println!("type {} for commands\n", "help".cyan());
}

fn print_help() {
    println!("  word <w>          set the target word (restarts the timer)");
    println!("  level <1-10>      set the difficulty level");
    println!("  phonetic <text>   canonical phonetic form");
    println!("  skeleton <text>   consonant skeleton");
    println!("  variations <text> phonetic spelling variations");
    println!("  help              this message");
    println!("  quit              leave");
    println!("  anything else     scored as an attempt at the target word");
}
