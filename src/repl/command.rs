//! REPL command parsing

/// A parsed REPL input line.
///
/// Anything that does not start with a known keyword is treated as a
/// reading attempt against the current target word — the common case, so
/// it needs no prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the target word: `word <w>`
    Word(String),
    /// Set the difficulty level: `level <1-10>`
    Level(u8),
    /// Show the canonical phonetic form: `phonetic <text>`
    Phonetic(String),
    /// Show the consonant skeleton: `skeleton <text>`
    Skeleton(String),
    /// List phonetic variations: `variations <text>`
    Variations(String),
    /// Show help
    Help,
    /// Leave the REPL
    Quit,
    /// A reading attempt against the current word
    Attempt(String),
    /// Empty line
    Nothing,
}

impl Command {
    /// Parse an input line.
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Nothing);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((k, r)) => (k, r.trim()),
            None => (line, ""),
        };

        match keyword {
            "word" => {
                if rest.is_empty() {
                    Err("usage: word <target>".to_string())
                } else {
                    Ok(Command::Word(rest.to_string()))
                }
            }
            "level" => match rest.parse::<u8>() {
                Ok(level) if (1..=10).contains(&level) => Ok(Command::Level(level)),
                _ => Err("usage: level <1-10>".to_string()),
            },
            "phonetic" if !rest.is_empty() => Ok(Command::Phonetic(rest.to_string())),
            "skeleton" if !rest.is_empty() => Ok(Command::Skeleton(rest.to_string())),
            "variations" if !rest.is_empty() => Ok(Command::Variations(rest.to_string())),
            "help" | "?" if rest.is_empty() => Ok(Command::Help),
            "quit" | "exit" if rest.is_empty() => Ok(Command::Quit),
            _ => Ok(Command::Attempt(line.to_string())),
        }
    }
}
