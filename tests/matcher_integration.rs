//! Integration tests for the full matching cascade.
//!
//! These pin the observable behavior of the (spoken, expected)
//! classification end to end: which rule fires, the verdict, and the
//! confidence. Several fixtures exist precisely because the behavior is
//! quirky (overlapping grapheme classes, asymmetric tolerance) and must
//! not drift.

use phonomatch::matcher::{MatchResult, WordMatcher};
use phonomatch::scoring::{calculate_stars, time_thresholds};

fn match_word(spoken: &str, expected: &str) -> MatchResult {
    WordMatcher::default().match_word(spoken, expected)
}

// ============================================================================
// Exact and normalized matches
// ============================================================================

#[test]
fn identical_word_is_perfect() {
    let result = match_word("maison", "maison");
    assert!(result.is_correct);
    assert!(!result.is_almost);
    assert_eq!(result.confidence, 100);
}

#[test]
fn case_and_accents_are_ignored() {
    let result = match_word("ÉTÉ", "ete");
    assert!(result.is_correct);
    assert_eq!(result.confidence, 100);
}

#[test]
fn punctuation_and_spacing_are_ignored() {
    let result = match_word("  chat !", "chat");
    assert!(result.is_correct);
    assert_eq!(result.confidence, 100);
}

// ============================================================================
// Phonetic equivalence
// ============================================================================

#[test]
fn au_o_swap_matches_phonetically() {
    let result = match_word("chaucolat", "chocolat");
    assert!(result.is_correct);
    assert_eq!(result.confidence, 98);
}

#[test]
fn eau_ending_matches_o_ending() {
    let result = match_word("chapo", "chapeau");
    assert!(result.is_correct);
    assert_eq!(result.confidence, 98);
}

// ============================================================================
// Structural similarity
// ============================================================================

#[test]
fn truncated_word_is_accepted_by_containment() {
    // "cha" for "chat": the 80%-consonant-coverage rule does NOT fire
    // (2 of 3 skeleton chars = 67%), but "chat" contains "cha".
    let result = match_word("cha", "chat");
    assert!(result.is_correct);
    assert_eq!(result.confidence, 90);
}

#[test]
fn vowel_confusion_matches_on_skeleton() {
    let result = match_word("mausin", "maison");
    assert!(result.is_correct);
    assert_eq!(result.confidence, 90);
}

#[test]
fn recognized_phrase_containing_the_word_is_accepted() {
    let result = match_word("le chat noir", "chat");
    assert!(result.is_correct);
    assert_eq!(result.confidence, 90);
}

#[test]
fn shared_ending_is_accepted() {
    // Endings are the best-recognized part; "assez" ends like "nez".
    let result = match_word("assez", "nez");
    assert!(result.is_correct);
    assert_eq!(result.confidence, 90);
}

// ============================================================================
// Edit-distance tolerance
// ============================================================================

#[test]
fn single_edit_is_correct() {
    let result = match_word("bavarler", "bavarder");
    assert!(result.is_correct);
    assert_eq!(result.confidence, 88);
}

#[test]
fn tolerance_boundary_for_length_eight() {
    // Length 8 → tolerance max(1, 8/4) = 2.
    // Distance exactly 2: almost, not correct.
    let result = match_word("bavaller", "bavarder");
    assert!(!result.is_correct);
    assert!(result.is_almost);
    assert_eq!(result.confidence, 75);

    // Distance 3: rejected.
    let result = match_word("bavallez", "bavarder");
    assert!(!result.is_correct);
    assert!(!result.is_almost);
    assert_eq!(result.confidence, 63);
}

#[test]
fn short_words_get_minimum_tolerance_of_one() {
    // "lune" (4 letters) → tolerance max(1, 1) = 1; distance 2 with a
    // different ending and a skeleton missing the "n" is rejected.
    let result = match_word("lame", "lune");
    assert!(!result.is_correct);
    assert!(!result.is_almost);
    assert_eq!(result.confidence, 50);
}

// ============================================================================
// Asymmetry
// ============================================================================

#[test]
fn containment_verdict_is_symmetric() {
    // Rule 3a checks containment in both directions, so the boolean
    // outcome (and here even the confidence) agrees.
    let forward = match_word("le chat noir", "chat");
    let backward = match_word("chat", "le chat noir");
    assert!(forward.is_correct);
    assert!(backward.is_correct);
    assert_eq!(forward.confidence, 90);
    assert_eq!(backward.confidence, 90);
}

#[test]
fn ending_rule_verdict_is_not_symmetric() {
    // The compared ending length scales with the *expected* word only:
    // expecting "nez" accepts "assez" (last two letters agree), but
    // expecting "assez" compares three letters and rejects "nez".
    let forward = match_word("assez", "nez");
    assert!(forward.is_correct);
    assert_eq!(forward.confidence, 90);

    let backward = match_word("nez", "assez");
    assert!(!backward.is_correct);
    assert!(!backward.is_almost);
    assert_eq!(backward.confidence, 40);
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn matcher_is_shareable_across_threads() {
    let matcher = WordMatcher::default();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert!(matcher.match_word("chaucolat", "chocolat").is_correct);
                    assert!(!matcher.match_word("voiture", "chat").is_correct);
                }
            });
        }
    });
}

// ============================================================================
// Star scoring
// ============================================================================

#[test]
fn star_rating_fixtures() {
    // Level 1, word length 4: budget = 4 * 560 + 1000 = 3240 ms.
    assert_eq!(calculate_stars(1000, 4, 1), 3); // <= 1620
    assert_eq!(calculate_stars(3000, 4, 1), 2); // <= 3240
    assert_eq!(calculate_stars(4000, 4, 1), 1);
}

#[test]
fn displayed_thresholds_agree_with_rating() {
    let thresholds = time_thresholds(4, 1);
    assert_eq!(thresholds.three_stars_ms, 1620);
    assert_eq!(thresholds.two_stars_ms, 3240);
    assert_eq!(calculate_stars(thresholds.three_stars_ms, 4, 1), 3);
    assert_eq!(calculate_stars(thresholds.two_stars_ms, 4, 1), 2);
}
