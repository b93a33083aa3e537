//! Response-time scoring and session display helpers.
//!
//! Star ratings reward fluent reading: the time budget scales with word
//! length and shrinks as the difficulty level rises, so a level-1 reader
//! gets 560 ms per letter while a level-10 reader gets 200 ms. The
//! arithmetic is deliberately simple — the interesting decisions happen
//! in the [matcher](crate::matcher); this module only grades how fast a
//! *correct* answer arrived.

/// Milliseconds granted per character at level 1, before level scaling.
const BASE_MS_PER_CHAR: u64 = 600;

/// Per-level reduction of the per-character budget, in milliseconds.
const LEVEL_STEP_MS: u64 = 40;

/// Flat allowance added to every word's budget, in milliseconds.
const FLAT_ALLOWANCE_MS: u64 = 1000;

/// The two finite star cutoffs for a word at a given level.
///
/// Responses at or under `three_stars_ms` earn three stars, at or under
/// `two_stars_ms` earn two; anything slower earns one star — the
/// one-star tier is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TimeThresholds {
    /// Upper bound for a three-star response, in milliseconds.
    pub three_stars_ms: u64,
    /// Upper bound for a two-star response, in milliseconds.
    pub two_stars_ms: u64,
}

fn base_time_ms(word_length: usize, level: u8) -> u64 {
    debug_assert!(
        (1..=10).contains(&level),
        "level {level} outside the documented 1..=10 range"
    );
    let per_char = BASE_MS_PER_CHAR - LEVEL_STEP_MS * u64::from(level);
    word_length as u64 * per_char + FLAT_ALLOWANCE_MS
}

/// Rate a correct response: 3 (fast), 2 (normal) or 1 (slow but right).
///
/// The budget is `word_length * (600 - 40 * level) + 1000` milliseconds;
/// three stars at half the budget, two within it, one beyond.
///
/// `level` must be in `1..=10` — that is a caller contract, checked only
/// by `debug_assert!`. Above level 15 the formula would go negative, so
/// out-of-range levels are not defensively clamped.
///
/// # Example
///
/// ```rust
/// use phonomatch::scoring::calculate_stars;
///
/// // Level 1, four letters: budget = 4 * 560 + 1000 = 3240 ms.
/// assert_eq!(calculate_stars(1000, 4, 1), 3);
/// assert_eq!(calculate_stars(3000, 4, 1), 2);
/// assert_eq!(calculate_stars(4000, 4, 1), 1);
/// ```
pub fn calculate_stars(response_time_ms: u64, word_length: usize, level: u8) -> u8 {
    let base = base_time_ms(word_length, level);
    if response_time_ms <= base / 2 {
        3
    } else if response_time_ms <= base {
        2
    } else {
        1
    }
}

/// The star cutoffs for display, from the same formula as
/// [`calculate_stars`].
pub fn time_thresholds(word_length: usize, level: u8) -> TimeThresholds {
    let base = base_time_ms(word_length, level);
    TimeThresholds {
        three_stars_ms: base / 2,
        two_stars_ms: base,
    }
}

/// Format a duration for display: "850ms" under a second, "3.2s" above.
pub fn format_time(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.1}s", ms as f64 / 1000.0)
    }
}

/// Session progress as a 0–100 percentage.
pub fn session_progress(current_index: usize, total_words: usize) -> u8 {
    if total_words == 0 {
        return 0;
    }
    (current_index as f64 / total_words as f64 * 100.0).round() as u8
}

/// Estimate the remaining session time from the average pace so far.
///
/// Returns 0 before the first word is done (no pace to extrapolate).
pub fn estimate_remaining_ms(elapsed_ms: u64, current_index: usize, total_words: usize) -> u64 {
    if current_index == 0 {
        return 0;
    }
    let avg_per_word = elapsed_ms as f64 / current_index as f64;
    let remaining_words = total_words.saturating_sub(current_index);
    (avg_per_word * remaining_words as f64).round() as u64
}

/// Format a session duration as "m:ss".
pub fn format_session_time(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
