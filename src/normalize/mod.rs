//! Text normalization for transcript comparison.
//!
//! Both the spoken transcript and the expected word pass through
//! [`normalize`] before any phonetic step. Normalization is deliberately
//! aggressive: speech recognizers capitalize freely, insert punctuation,
//! and French orthography is full of diacritics a child cannot pronounce
//! differently anyway ("été" and "ete" must compare equal).

use unicode_normalization::UnicodeNormalization;

/// Normalize text for comparison.
///
/// Applies, in order:
///
/// 1. Lowercase
/// 2. Trim surrounding whitespace
/// 3. Unicode NFD decomposition, separating base letters from combining
///    marks
/// 4. Drop everything that is not a basic lowercase letter — combining
///    marks, digits, punctuation, interior whitespace
///
/// The function is total (empty input produces empty output, nothing
/// fails) and idempotent.
///
/// # Example
///
/// ```rust
/// use phonomatch::normalize::normalize;
///
/// assert_eq!(normalize("Été !"), "ete");
/// assert_eq!(normalize("  le chat  "), "lechat");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .trim()
        .nfd()
        .filter(char::is_ascii_lowercase)
        .collect()
}
