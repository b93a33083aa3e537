//! REPL session state

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::matcher::WordMatcher;

/// Mutable state of a practice session.
///
/// Owns the RNG used for encouraging feedback so a test can construct
/// the state with a fixed seed and get reproducible messages.
pub struct ReplState {
    /// The word currently being practiced.
    pub expected: Option<String>,
    /// Difficulty level for star ratings.
    pub level: u8,
    /// When the current word was set, for response-time scoring.
    pub word_set_at: Option<Instant>,
    /// Feedback RNG.
    pub rng: StdRng,
    /// The matcher (French tables).
    pub matcher: WordMatcher<'static>,
}

impl ReplState {
    /// Fresh state at the given level, RNG seeded from the OS.
    pub fn new(level: u8) -> Self {
        Self::with_rng(level, StdRng::from_entropy())
    }

    /// Fresh state with a caller-provided RNG (seedable for tests).
    pub fn with_rng(level: u8, rng: StdRng) -> Self {
        Self {
            expected: None,
            level,
            word_set_at: None,
            rng,
            matcher: WordMatcher::default(),
        }
    }

    /// Set the target word and restart the response timer.
    pub fn set_word(&mut self, word: String) {
        self.expected = Some(word);
        self.word_set_at = Some(Instant::now());
    }

    /// Milliseconds since the current word was set.
    pub fn elapsed_ms(&self) -> u64 {
        self.word_set_at
            .map(|t| t.elapsed().as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_no_word() {
        let state = ReplState::new(1);
        assert!(state.expected.is_none());
        assert_eq!(state.elapsed_ms(), 0);
    }

    #[test]
    fn test_set_word_starts_timer() {
        let mut state = ReplState::new(2);
        state.set_word("chat".to_string());
        assert_eq!(state.expected.as_deref(), Some("chat"));
        assert!(state.word_set_at.is_some());
    }
}
