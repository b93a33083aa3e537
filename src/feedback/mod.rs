//! Feedback strings shown to the child.
//!
//! The verdict strings are fixed per cascade branch; only the
//! post-round encouragement is randomized, through an injectable RNG so
//! tests can seed it and assert exact output. The strings are cosmetic —
//! correctness lives entirely in [`MatchResult`](crate::matcher::MatchResult)'s
//! booleans and confidence.

use rand::seq::SliceRandom;
use rand::Rng;

/// Exact match.
pub const PERFECT: &str = "Parfait !";
/// Phonetic or variation match.
pub const VERY_GOOD: &str = "Très bien !";
/// Structural or containment match.
pub const GOOD: &str = "Bien !";
/// Close-enough edit distance.
pub const BRAVO: &str = "Bravo !";
/// Almost correct, worth another try.
pub const ALMOST: &str = "Presque ! Essaie encore.";
/// Not accepted.
pub const TRY_AGAIN: &str = "Essaie encore !";

const THREE_STAR_POOL: &[&str] = &[
    "Super rapide !",
    "Tu es un champion !",
    "Excellent !",
    "Fantastique !",
];

const TWO_STAR_POOL: &[&str] = &[
    "Très bien !",
    "Bravo !",
    "Continue comme ça !",
    "Génial !",
];

const ONE_STAR_POOL: &[&str] = &["Bien joué !", "Tu y arrives !", "C'est ça !", "Pas mal !"];

/// Pick an encouraging message for a star rating.
///
/// The RNG is injected so callers own the randomness: a seeded
/// [`StdRng`](rand::rngs::StdRng) makes the selection reproducible in
/// tests. Ratings outside 1–3 fall back to the one-star pool.
///
/// # Example
///
/// ```rust
/// use phonomatch::feedback::encouraging_feedback;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let message = encouraging_feedback(3, &mut rng);
/// assert!(!message.is_empty());
/// ```
pub fn encouraging_feedback<R: Rng + ?Sized>(stars: u8, rng: &mut R) -> &'static str {
    let pool = match stars {
        3 => THREE_STAR_POOL,
        2 => TWO_STAR_POOL,
        _ => ONE_STAR_POOL,
    };
    pool.choose(rng).copied().unwrap_or(TRY_AGAIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for stars in [1, 2, 3] {
            assert_eq!(
                encouraging_feedback(stars, &mut a),
                encouraging_feedback(stars, &mut b),
            );
        }
    }

    #[test]
    fn test_message_comes_from_matching_pool() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            assert!(THREE_STAR_POOL.contains(&encouraging_feedback(3, &mut rng)));
            assert!(TWO_STAR_POOL.contains(&encouraging_feedback(2, &mut rng)));
            assert!(ONE_STAR_POOL.contains(&encouraging_feedback(1, &mut rng)));
        }
    }

    #[test]
    fn test_out_of_range_uses_one_star_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(ONE_STAR_POOL.contains(&encouraging_feedback(0, &mut rng)));
        assert!(ONE_STAR_POOL.contains(&encouraging_feedback(9, &mut rng)));
    }
}
