//! Command execution

use anyhow::Result;
use colored::Colorize;

use crate::matcher::{MatchResult, WordMatcher};
use crate::normalize::normalize;
use crate::phonetic::{consonant_skeleton, PhoneticEngine};
use crate::scoring::{calculate_stars, format_time, time_thresholds};

use super::args::Commands;

/// Execute a CLI command.
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Match {
            spoken,
            expected,
            json,
        } => run_match(&spoken, &expected, json),
        Commands::Phonetic { text } => {
            println!("{}", PhoneticEngine::french().to_phonetic(&text));
            Ok(())
        }
        Commands::Variations { text } => {
            let mut variations: Vec<String> =
                PhoneticEngine::french().variations(&text).into_iter().collect();
            variations.sort();
            for variation in variations {
                println!("{variation}");
            }
            Ok(())
        }
        Commands::Skeleton { text } => {
            println!("{}", consonant_skeleton(&text));
            Ok(())
        }
        Commands::Normalize { text } => {
            println!("{}", normalize(&text));
            Ok(())
        }
        Commands::Stars {
            elapsed_ms,
            word,
            level,
            json,
        } => run_stars(elapsed_ms, &word, level, json),
        Commands::Repl { level } => crate::repl::run(level),
    }
}

fn run_match(spoken: &str, expected: &str, json: bool) -> Result<()> {
    let result = WordMatcher::default().match_word(spoken, expected);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_verdict(&result);
    println!(
        "  {} {}",
        "confidence:".dimmed(),
        format!("{}%", result.confidence).bold()
    );
    Ok(())
}

/// Print a verdict line the way the practice UI words it.
pub(crate) fn print_verdict(result: &MatchResult) {
    let verdict = if result.is_correct {
        "correct".green().bold()
    } else if result.is_almost {
        "almost".yellow().bold()
    } else {
        "incorrect".red().bold()
    };
    println!("{} — {}", verdict, result.feedback);
}

fn run_stars(elapsed_ms: u64, word: &str, level: u8, json: bool) -> Result<()> {
    let word_length = normalize(word).chars().count();
    let stars = calculate_stars(elapsed_ms, word_length, level);
    let thresholds = time_thresholds(word_length, level);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "stars": stars,
                "thresholds": thresholds,
            })
        );
        return Ok(());
    }

    let painted = "★".repeat(stars as usize).yellow().bold();
    let hollow = "☆".repeat(3 - stars as usize).dimmed();
    println!("{painted}{hollow}  ({})", format_time(elapsed_ms));
    println!(
        "  {} 3★ ≤ {}   2★ ≤ {}",
        "thresholds:".dimmed(),
        format_time(thresholds.three_stars_ms),
        format_time(thresholds.two_stars_ms),
    );
    Ok(())
}
