//! Phonetic equivalence engine for French orthography.
//!
//! French spelling maps many letter sequences onto one sound: "eau",
//! "au", "o", "ot" and "aux" are all /o/. This module canonicalizes a
//! word by grapheme-equivalence-class substitution so that two spellings
//! of the same sound compare equal, generates the bounded set of
//! plausible alternate spellings of a word, and extracts a consonant
//! skeleton for fuzzy structural comparison.
//!
//! # Operations
//!
//! - [`PhoneticEngine::to_phonetic`] — canonical phonetic form
//! - [`PhoneticEngine::variations`] — bounded alternate-spelling set
//! - [`consonant_skeleton`] — vowel-free, deduplicated word shape
//!
//! # Ordering caveats
//!
//! Substitution order matters twice: within a class, longer variants are
//! replaced before shorter ones ("eau" before "o"); across classes,
//! declaration order wins for graphemes that belong to more than one
//! class ("ai" is both closed /e/ and open /ɛ/). Both orders are part of
//! the observable contract and are pinned by fixtures.

pub mod classes;
pub mod engine;
pub mod skeleton;

pub use classes::{french_classes, GraphemeClass, FRENCH_DIRECT_EQUIVALENTS};
pub use engine::PhoneticEngine;
pub use skeleton::consonant_skeleton;
