//! Deterministic string hash folded onto the 0..=100 score range.

use crate::text::canonical::{canonicalize, PairKey};

/// Modulus that folds the hash onto 0..=100.
const SCORE_MODULUS: u32 = 101;

/// Classic `hash * 31 + code point` string hash with 32-bit signed wrapping.
///
/// Iterates Unicode scalar values, so astral characters contribute one step
/// each instead of two surrogate halves.
pub fn string_hash(text: &str) -> i32 {
    text.chars().fold(0i32, |hash, ch| {
        (u32::from(ch) as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}

/// Maps `text` to a stable score: `|string_hash(text)| mod 101`.
///
/// No seed and no time-based input; equal code-point sequences always yield
/// equal scores.
pub fn hash_to_score(text: &str) -> u8 {
    (string_hash(text).unsigned_abs() % SCORE_MODULUS) as u8
}

/// Legacy pair scorer: hash of `canonical(first) + canonical(second)`.
///
/// Argument order matters here, unlike override lookup, which tries both
/// orders. The asymmetry is part of the observable score distribution.
pub fn hash_pair_score(first: &str, second: &str) -> u8 {
    let key = PairKey::new(&canonicalize(first), &canonicalize(second));
    hash_to_score(key.as_str())
}

#[cfg(test)]
mod tests {
    use super::{hash_pair_score, hash_to_score, string_hash};

    #[test]
    fn empty_text_hashes_to_zero() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(hash_to_score(""), 0);
    }

    #[test]
    fn matches_reference_values() {
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("ab"), 97 * 31 + 98);
        assert_eq!(hash_to_score("ab"), ((97 * 31 + 98) % 101) as u8);
    }

    #[test]
    fn wraps_instead_of_overflowing_on_long_input() {
        let long = "zyxwvutsrqponmlkjihgfedcba".repeat(64);
        let score = hash_to_score(&long);
        assert!(score <= 100);
        assert_eq!(score, hash_to_score(&long));
    }

    #[test]
    fn astral_characters_count_as_one_code_point() {
        // U+1F496 is a single scalar value.
        assert_eq!(string_hash("\u{1F496}"), 0x1F496);
    }

    #[test]
    fn pair_score_canonicalizes_inputs() {
        assert_eq!(
            hash_pair_score("  Alice ", "BOB"),
            hash_pair_score("alice", "bob")
        );
    }
}
