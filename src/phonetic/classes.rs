//! Grapheme equivalence classes for French orthography.
//!
//! A [`GraphemeClass`] is an ordered set of spellings ("graphemes") that
//! all denote the same sound — "eau", "au" and "o" are one class, because
//! a child reading any of them aloud produces /o/. One member of each
//! class is the *canonical form*; canonicalization rewrites every other
//! member to it.
//!
//! Classes may overlap: "ai" spells both the closed /e/ of "j'ai" and the
//! open /ɛ/ of "lait", so it appears in both classes. Ambiguity is
//! resolved by trying every class, not by picking a single mapping —
//! whichever class is declared first wins during canonicalization, and
//! that declaration order is part of the observable contract (fixtures pin
//! it).

/// One equivalence class of graphemes sharing a pronunciation.
///
/// The declared member order is significant twice over: variation
/// generation walks members in declaration order, and the canonical form
/// is derived from it (see [`GraphemeClass::canonical`]).
#[derive(Debug, Clone)]
pub struct GraphemeClass {
    declared: &'static [&'static str],
    /// Members sorted longest-first (stable), so substitution never
    /// rewrites "o" inside an as-yet-unprocessed "eau".
    ordered: Vec<&'static str>,
}

impl GraphemeClass {
    /// Compile a class from its declared member list.
    pub fn new(members: &'static [&'static str]) -> Self {
        let mut ordered: Vec<&'static str> = members.to_vec();
        // Stable: equal-length members keep declaration order.
        ordered.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        Self {
            declared: members,
            ordered,
        }
    }

    /// Members in declaration order.
    pub fn members(&self) -> &[&'static str] {
        self.declared
    }

    /// Members in substitution order: longest first, ties in declaration
    /// order.
    pub fn substitution_order(&self) -> &[&'static str] {
        &self.ordered
    }

    /// The canonical form: the last member in substitution order, i.e.
    /// the last-declared shortest spelling.
    pub fn canonical(&self) -> &'static str {
        self.ordered
            .last()
            .expect("a grapheme class is never empty")
    }
}

/// The French grapheme equivalence classes, in canonicalization order.
///
/// Each row lists every common spelling of one sound, including silent
/// final consonants ("ot", "aux") and the accented forms that survive in
/// raw (un-normalized) text.
pub fn french_classes() -> Vec<GraphemeClass> {
    FRENCH_CLASS_TABLE.iter().map(|&m| GraphemeClass::new(m)).collect()
}

const FRENCH_CLASS_TABLE: &[&[&str]] = &[
    // /o/
    &["eau", "au", "o", "oh", "ô", "aux", "eaux", "ot", "os", "op"],
    // /e/ closed
    &["é", "ée", "er", "ez", "et", "ai", "ei", "ais"],
    // /ɛ/ open
    &["è", "ê", "e", "ai", "ei", "ait", "aie"],
    // /ã/
    &["an", "en", "am", "em", "ant", "ent", "ans", "ens"],
    // /ɔ̃/
    &["on", "om", "ont", "ons"],
    // /ɛ̃/
    &["in", "ain", "ein", "im", "aim", "un", "um", "yn", "ym"],
    // /u/
    &["ou", "oo", "oû", "ous", "out", "oux"],
    // /wa/
    &["oi", "oie", "ois", "oit", "oix", "oy"],
    // /f/
    &["f", "ph", "ff"],
    // /k/
    &["c", "k", "qu", "q", "ck", "ch"],
    // /s/
    &["s", "ss", "c", "ç", "sc", "ti"],
    // /z/
    &["z", "s", "zz"],
    // /ʒ/
    &["j", "g", "ge"],
    // /ɲ/
    &["gn", "ni"],
    // /j/ (yod)
    &["ill", "il", "y", "i", "ille"],
];

/// Whole-word equivalents for high-frequency irregular words that
/// grapheme substitution alone does not capture well ("et" sounds like
/// "é" and like "ai").
///
/// Each entry maps a headword to the spellings a recognizer plausibly
/// emits for it; lookup is honored in both directions.
pub const FRENCH_DIRECT_EQUIVALENTS: &[(&str, &[&str])] = &[
    ("eau", &["o", "oh", "au"]),
    ("et", &["é", "ai"]),
    ("est", &["é", "ai", "e"]),
    ("les", &["lé", "lai"]),
    ("des", &["dé", "dai"]),
    ("mes", &["mé", "mai"]),
    ("tes", &["té", "tai"]),
    ("ses", &["sé", "sai"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution_order_longest_first() {
        let class = GraphemeClass::new(&["eau", "au", "o", "oh", "ô", "aux", "eaux", "ot", "os", "op"]);
        let order = class.substitution_order();
        assert_eq!(order[0], "eaux");
        assert_eq!(order[1], "eau");
        // "eau" must come before "au", which must come before "o".
        let pos = |g: &str| order.iter().position(|&m| m == g).unwrap();
        assert!(pos("eau") < pos("au"));
        assert!(pos("au") < pos("o"));
    }

    #[test]
    fn test_canonical_is_last_declared_shortest() {
        // Single-char members tie; the last-declared one wins.
        let o_class = GraphemeClass::new(FRENCH_CLASS_TABLE[0]);
        assert_eq!(o_class.canonical(), "ô");

        let k_class = GraphemeClass::new(&["c", "k", "qu", "q", "ck", "ch"]);
        assert_eq!(k_class.canonical(), "q");

        let s_class = GraphemeClass::new(&["s", "ss", "c", "ç", "sc", "ti"]);
        assert_eq!(s_class.canonical(), "ç");
    }

    #[test]
    fn test_canonical_counts_chars_not_bytes() {
        // "ô" is two bytes but one character; it still ties with "o".
        let class = GraphemeClass::new(&["o", "ô"]);
        assert_eq!(class.canonical(), "ô");
        assert_eq!(class.substitution_order(), &["o", "ô"]);
    }

    #[test]
    fn test_french_tables_shape() {
        let classes = french_classes();
        assert_eq!(classes.len(), 15);
        for class in &classes {
            assert!(!class.members().is_empty());
            assert!(class.members().contains(&class.canonical()));
        }
        for (word, equivalents) in FRENCH_DIRECT_EQUIVALENTS {
            assert!(!word.is_empty());
            assert!(!equivalents.is_empty());
        }
    }
}
