//! Canonicalization and variation generation over the equivalence tables.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;

use super::classes::{french_classes, GraphemeClass, FRENCH_DIRECT_EQUIVALENTS};

/// The phonetic equivalence engine: grapheme classes plus the whole-word
/// direct-equivalents table, compiled once and never mutated.
///
/// The engine is immutable after construction and is shared by reference;
/// [`PhoneticEngine::french`] returns the process-wide French instance.
/// Every operation is a pure function of its input string.
pub struct PhoneticEngine {
    classes: Vec<GraphemeClass>,
    direct: &'static [(&'static str, &'static [&'static str])],
}

static FRENCH: OnceLock<PhoneticEngine> = OnceLock::new();

impl PhoneticEngine {
    /// Build an engine from a class list and a direct-equivalents table.
    pub fn new(
        classes: Vec<GraphemeClass>,
        direct: &'static [(&'static str, &'static [&'static str])],
    ) -> Self {
        Self { classes, direct }
    }

    /// The process-wide engine for French orthography, built on first use.
    pub fn french() -> &'static PhoneticEngine {
        FRENCH.get_or_init(|| PhoneticEngine::new(french_classes(), FRENCH_DIRECT_EQUIVALENTS))
    }

    /// The compiled grapheme classes, in canonicalization order.
    pub fn classes(&self) -> &[GraphemeClass] {
        &self.classes
    }

    /// Rewrite `text` to its canonical phonetic form.
    ///
    /// Classes are processed in declaration order; within a class, longer
    /// variants are substituted before shorter ones so that "o" is never
    /// rewritten inside a pending "eau". Substitution is a plain substring
    /// scan-and-replace — no regular expressions.
    ///
    /// A later class may rewrite the output of an earlier one (the /o/
    /// class turns every "o" into "ô", after which the nasal "on" class
    /// finds nothing to match). This is accepted approximate behavior;
    /// the tests pin it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use phonomatch::phonetic::PhoneticEngine;
    ///
    /// let engine = PhoneticEngine::french();
    /// assert_eq!(
    ///     engine.to_phonetic("chocolat"),
    ///     engine.to_phonetic("chaucolat"),
    /// );
    /// ```
    pub fn to_phonetic(&self, text: &str) -> String {
        let mut result = text.to_lowercase();
        for class in &self.classes {
            let canonical = class.canonical();
            for &variant in class.substitution_order() {
                if variant != canonical && result.contains(variant) {
                    result = result.replace(variant, canonical);
                }
            }
        }
        result
    }

    /// Generate the bounded set of phonetic spellings of `text`.
    ///
    /// The set contains the input itself, its [`to_phonetic`] form, the
    /// whole-word direct equivalents (looked up in both directions), and —
    /// for every class member occurring in the input — the input with all
    /// occurrences of that member replaced by each other member of the
    /// same class. One class substitution per candidate, applied to the
    /// original input: this is not the cross-product of all classes, which
    /// keeps the set small enough for exact-match intersection.
    ///
    /// [`to_phonetic`]: PhoneticEngine::to_phonetic
    pub fn variations(&self, text: &str) -> FxHashSet<String> {
        let mut variations = FxHashSet::default();
        variations.insert(text.to_string());
        variations.insert(self.to_phonetic(text));

        for (word, equivalents) in self.direct {
            if text == *word {
                variations.extend(equivalents.iter().map(|eq| eq.to_string()));
            }
            if equivalents.iter().any(|&eq| eq == text) {
                variations.insert(word.to_string());
                variations.extend(equivalents.iter().map(|eq| eq.to_string()));
            }
        }

        for class in &self.classes {
            for &variant in class.members() {
                if text.contains(variant) {
                    for &replacement in class.members() {
                        if replacement != variant {
                            variations.insert(text.replace(variant, replacement));
                        }
                    }
                }
            }
        }

        variations
    }
}
