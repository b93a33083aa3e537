//! Consonant skeleton extraction.

/// Vowels removed during skeleton extraction: the plain vowels (with "y")
/// and every accented form French orthography uses.
const VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'y', 'à', 'â', 'ä', 'é', 'è', 'ê', 'ë', 'ï', 'î', 'ô', 'ù', 'û', 'ü',
];

/// Reduce a word to its consonant "shape": drop every vowel, then
/// collapse runs of identical characters to a single occurrence.
///
/// Children and speech recognizers both confuse vowels and double
/// consonants far more often than they change the consonant structure of
/// a word, so comparing skeletons tolerates exactly those errors:
/// "arriver" and "ariver" share the skeleton "rvr".
///
/// # Example
///
/// ```rust
/// use phonomatch::phonetic::consonant_skeleton;
///
/// assert_eq!(consonant_skeleton("chat"), "cht");
/// assert_eq!(consonant_skeleton("arriver"), "rvr");
/// assert_eq!(consonant_skeleton(""), "");
/// ```
pub fn consonant_skeleton(text: &str) -> String {
    let mut skeleton = String::with_capacity(text.len());
    let mut previous: Option<char> = None;
    for c in text.chars() {
        if VOWELS.contains(&c) {
            continue;
        }
        // Runs are collapsed after vowel removal, so "tattoo" and "tato"
        // both reduce to "t".
        if previous == Some(c) {
            continue;
        }
        skeleton.push(c);
        previous = Some(c);
    }
    skeleton
}
