//! CLI interface for phonomatch
//!
//! Exposes the matcher, the phonetic engine and the star scorer as
//! one-shot commands, plus the interactive practice REPL.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
