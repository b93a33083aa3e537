//! # phonomatch
//!
//! Phonetic word matching for early readers of French.
//!
//! Given a child's spoken attempt (as transcribed by a speech recognizer)
//! and the word they were asked to read, this library decides whether the
//! attempt counts as correct, "almost correct", or wrong, together with a
//! 0–100 confidence score. The decision has to absorb three independent
//! sources of noise at once: French orthography (many spellings share one
//! sound), recognizer transcription errors, and child mispronunciation.
//! Tolerance is deliberately generous — in a learning tool, discouraging a
//! correct reader is worse than accepting a marginal one.
//!
//! ## Example
//!
//! ```rust
//! use phonomatch::prelude::*;
//!
//! let matcher = WordMatcher::default();
//!
//! // The recognizer heard a longer phrase containing the target word.
//! let result = matcher.match_word("le chat noir", "chat");
//! assert!(result.is_correct);
//!
//! // Same sound, different spelling: au/o.
//! let result = matcher.match_word("chaucolat", "chocolat");
//! assert!(result.is_correct);
//! ```
//!
//! ## Pipeline
//!
//! Raw transcript → [`normalize`](normalize::normalize) →
//! [`PhoneticEngine`](phonetic::PhoneticEngine) (canonical form, variation
//! set, consonant skeleton) → [`WordMatcher`](matcher::WordMatcher) →
//! [`MatchResult`](matcher::MatchResult). Response-time star scoring lives
//! in [`scoring`] and is independent of the matcher.
//!
//! All core operations are pure, synchronous and stateless over immutable
//! tables compiled once at startup; they are safe to call from any number
//! of threads without synchronization.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distance;
pub mod feedback;
pub mod matcher;
pub mod normalize;
pub mod phonetic;
pub mod scoring;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Interactive reading-practice REPL
#[cfg(feature = "cli")]
pub mod repl;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::distance::{edit_distance, similarity_percent};
    pub use crate::feedback::encouraging_feedback;
    pub use crate::matcher::{MatchResult, WordMatcher};
    pub use crate::normalize::normalize;
    pub use crate::phonetic::{consonant_skeleton, PhoneticEngine};
    pub use crate::scoring::{calculate_stars, time_thresholds, TimeThresholds};
}
