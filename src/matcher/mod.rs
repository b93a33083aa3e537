//! The word matcher: classifies a spoken attempt against an expected word.
//!
//! [`WordMatcher::match_word`] runs a fixed-precedence cascade over a
//! (spoken, expected) pair; the first rule that fires determines the
//! verdict and its confidence. Cheap deterministic checks come first so
//! the common cases stay fast and get unambiguous top confidence; the
//! structural rules run before edit distance because they accept
//! "sounds right" attempts (extra vowel, doubled consonant) that a raw
//! Levenshtein count would wrongly penalize.

use crate::distance::{edit_distance, similarity_percent};
use crate::feedback;
use crate::normalize::normalize;
use crate::phonetic::{consonant_skeleton, PhoneticEngine};

/// The verdict for one spoken attempt.
///
/// `is_correct` and `is_almost` are mutually exclusive; both false means
/// the attempt was rejected. A fresh value is produced per comparison —
/// there is no persisted identity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct MatchResult {
    /// The attempt counts as a correct reading.
    pub is_correct: bool,
    /// Good enough to encourage a retry, but not accepted.
    pub is_almost: bool,
    /// Confidence in the verdict, 0–100.
    pub confidence: u8,
    /// Short human-readable feedback (cosmetic, not part of the
    /// correctness contract).
    pub feedback: &'static str,
}

impl MatchResult {
    fn correct(confidence: u8, feedback: &'static str) -> Self {
        Self {
            is_correct: true,
            is_almost: false,
            confidence,
            feedback,
        }
    }

    fn almost(confidence: u8) -> Self {
        Self {
            is_correct: false,
            is_almost: true,
            confidence,
            feedback: feedback::ALMOST,
        }
    }

    fn rejected(confidence: u8) -> Self {
        Self {
            is_correct: false,
            is_almost: false,
            confidence,
            feedback: feedback::TRY_AGAIN,
        }
    }
}

/// Matches spoken transcripts against expected words.
///
/// Holds a reference to the immutable [`PhoneticEngine`] configuration;
/// the matcher itself is stateless and safe to share across threads.
pub struct WordMatcher<'e> {
    engine: &'e PhoneticEngine,
}

impl Default for WordMatcher<'static> {
    fn default() -> Self {
        Self::new(PhoneticEngine::french())
    }
}

impl<'e> WordMatcher<'e> {
    /// Create a matcher over the given engine.
    pub fn new(engine: &'e PhoneticEngine) -> Self {
        Self { engine }
    }

    /// Classify a spoken attempt against the expected word.
    ///
    /// Both inputs are [normalized](crate::normalize::normalize) first.
    /// The cascade, first rule wins:
    ///
    /// 1. Exact match → correct, confidence 100
    /// 2. Equal canonical phonetic forms → correct, 98
    /// 3. Structural similarity (substring either way, equal consonant
    ///    skeletons, ≥80% skeleton coverage for words of up to four
    ///    letters, or identical word endings) → correct, 90
    /// 4. Any shared member between the two variation sets → correct, 95
    /// 5. Edit distance: ≤ 1 → correct; ≤ `max(1, len(expected)/4)` →
    ///    almost; confidence is the rounded percentage similarity
    /// 6. Spoken contains expected (the child read a whole phrase) →
    ///    correct, 90
    /// 7. Otherwise rejected, confidence from percentage similarity
    ///
    /// Confidence is **not** symmetric in its arguments — the tolerance
    /// and ending rules scale with the *expected* word only — and the
    /// boolean verdict need not be either (see the crate tests).
    pub fn match_word(&self, spoken: &str, expected: &str) -> MatchResult {
        let spoken = normalize(spoken);
        let expected = normalize(expected);

        if spoken == expected {
            return MatchResult::correct(100, feedback::PERFECT);
        }

        if self.engine.to_phonetic(&spoken) == self.engine.to_phonetic(&expected) {
            return MatchResult::correct(98, feedback::VERY_GOOD);
        }

        if are_phonetically_similar(&spoken, &expected) {
            return MatchResult::correct(90, feedback::GOOD);
        }

        let spoken_variations = self.engine.variations(&spoken);
        let expected_variations = self.engine.variations(&expected);
        if !spoken_variations.is_disjoint(&expected_variations) {
            return MatchResult::correct(95, feedback::VERY_GOOD);
        }

        let distance = edit_distance(&spoken, &expected);
        let confidence = similarity_percent(&spoken, &expected).round() as u8;

        if distance <= 1 {
            return MatchResult::correct(confidence, feedback::BRAVO);
        }

        // Longer words earn proportionally more tolerance.
        let tolerance = (expected.chars().count() / 4).max(1);
        if distance <= tolerance {
            return MatchResult::almost(confidence);
        }

        if spoken.contains(expected.as_str()) {
            return MatchResult::correct(90, feedback::GOOD);
        }

        MatchResult::rejected(confidence)
    }
}

/// Structural similarity for child speech and recognizer noise.
///
/// Fires when any of the following holds on normalized input:
/// one string contains the other; the consonant skeletons are equal; the
/// expected word has at most four letters and at least 80% of its
/// skeleton characters appear in the spoken skeleton; or the trailing
/// `min(3, len(expected) - 1)` characters coincide (word endings are the
/// best-recognized part of French child speech).
fn are_phonetically_similar(spoken: &str, expected: &str) -> bool {
    if spoken.contains(expected) || expected.contains(spoken) {
        return true;
    }

    let spoken_skeleton = consonant_skeleton(spoken);
    let expected_skeleton = consonant_skeleton(expected);

    if spoken_skeleton == expected_skeleton {
        return true;
    }

    if expected.chars().count() <= 4 && !expected_skeleton.is_empty() {
        let matched = expected_skeleton
            .chars()
            .filter(|&c| spoken_skeleton.contains(c))
            .count();
        if matched as f64 / expected_skeleton.chars().count() as f64 >= 0.8 {
            return true;
        }
    }

    let end_len = expected.chars().count().saturating_sub(1).min(3);
    if end_len > 0 && tail(expected, end_len) == tail(spoken, end_len) {
        return true;
    }

    false
}

/// The last `n` characters of `s`, or all of `s` if it is shorter.
fn tail(s: &str, n: usize) -> &str {
    let len = s.chars().count();
    if len <= n {
        return s;
    }
    let (idx, _) = s.char_indices().nth(len - n).unwrap_or((0, ' '));
    &s[idx..]
}
