//! Name-domain metrics.
//!
//! # Responsibility
//! - Score two canonical names on five independent metrics.
//!
//! # Invariants
//! - Both names must contain at least one letter; anything else is reported
//!   as `NameMetricError` and never panics.
//! - Metric values are rounded to one decimal place.

use crate::model::result::{Breakdown, MetricName};
use crate::scoring::numerology::{digital_root, pair_score};
use crate::scoring::round_tenth;
use crate::text::canonical::{CanonicalText, PairKey};
use crate::text::hash::hash_to_score;
use crate::text::script::{is_vowel, letter_value};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use unicode_normalization::char::is_combining_mark;

/// Positions on the letter wheel.
const WHEEL_SIZE: u32 = 26;
/// Largest circular distance on the wheel.
const MAX_WHEEL_DISTANCE: u32 = WHEEL_SIZE / 2;

/// Name pipeline failure; callers fall back to the hash scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMetricError {
    /// Canonical form has no letters (only separators or combining marks).
    EmptyName { position: u8 },
}

impl Display for NameMetricError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName { position } => {
                write!(f, "name #{position} has no letters after canonicalization")
            }
        }
    }
}

impl Error for NameMetricError {}

/// Computes all five name metrics for an ordered pair.
pub fn name_breakdown(
    first: &CanonicalText,
    second: &CanonicalText,
) -> Result<Breakdown, NameMetricError> {
    if first_letter(first).is_none() {
        return Err(NameMetricError::EmptyName { position: 1 });
    }
    if first_letter(second).is_none() {
        return Err(NameMetricError::EmptyName { position: 2 });
    }

    Ok(Breakdown::from_iter([
        (
            MetricName::InitialSimilarity,
            initial_similarity(first, second),
        ),
        (MetricName::LetterFrequency, letter_frequency(first, second)),
        (MetricName::VowelBalance, vowel_balance(first, second)),
        (MetricName::NameNumerology, name_numerology(first, second)),
        (MetricName::CosmicHash, cosmic_hash(first, second)),
    ]))
}

/// Circular wheel distance between the first letters, 0 -> 100, 13 -> 0.
pub fn initial_similarity(first: &CanonicalText, second: &CanonicalText) -> f64 {
    let (Some(a), Some(b)) = (first_letter(first), first_letter(second)) else {
        return 0.0;
    };
    let direct = letter_value(a).abs_diff(letter_value(b));
    let distance = direct.min(WHEEL_SIZE - direct);
    let similarity = 1.0 - f64::from(distance) / f64::from(MAX_WHEEL_DISTANCE);
    round_tenth(similarity * 100.0)
}

/// Cosine similarity of per-letter frequency vectors, scaled to 0..=100.
pub fn letter_frequency(first: &CanonicalText, second: &CanonicalText) -> f64 {
    let freq_a = letter_counts(first);
    let freq_b = letter_counts(second);

    let dot = freq_a
        .iter()
        .filter_map(|(ch, count_a)| freq_b.get(ch).map(|count_b| count_a * count_b))
        .sum::<f64>();
    let norm_a = freq_a.values().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = freq_b.values().map(|v| v * v).sum::<f64>().sqrt();
    let magnitude = norm_a * norm_b;
    if magnitude == 0.0 {
        return 0.0;
    }
    round_tenth(dot / magnitude * 100.0)
}

/// Similarity of vowel share: `(1 - |ratio_a - ratio_b|) * 100`.
pub fn vowel_balance(first: &CanonicalText, second: &CanonicalText) -> f64 {
    let difference = (vowel_ratio(first) - vowel_ratio(second)).abs();
    round_tenth(((1.0 - difference) * 100.0).max(0.0))
}

/// Destiny-number compatibility through the shared numerology table.
pub fn name_numerology(first: &CanonicalText, second: &CanonicalText) -> f64 {
    pair_score(destiny_number(first), destiny_number(second))
}

/// Hash score of the concatenated pair, in argument order.
pub fn cosmic_hash(first: &CanonicalText, second: &CanonicalText) -> f64 {
    f64::from(hash_to_score(PairKey::new(first, second).as_str()))
}

/// Digital root of the summed letter values; a letterless name counts as 1.
pub fn destiny_number(name: &CanonicalText) -> u8 {
    let total = letters(name).map(|ch| u64::from(letter_value(ch))).sum();
    match digital_root(total) {
        0 => 1,
        root => root,
    }
}

/// Vowels divided by letters; combining marks count as neither.
pub fn vowel_ratio(name: &CanonicalText) -> f64 {
    let (vowels, total) = letters(name).fold((0u32, 0u32), |(vowels, total), ch| {
        (vowels + u32::from(is_vowel(ch)), total + 1)
    });
    if total == 0 {
        return 0.0;
    }
    f64::from(vowels) / f64::from(total)
}

fn letters(name: &CanonicalText) -> impl Iterator<Item = char> + '_ {
    name.as_str().chars().filter(|ch| !is_combining_mark(*ch))
}

fn first_letter(name: &CanonicalText) -> Option<char> {
    letters(name).next()
}

fn letter_counts(name: &CanonicalText) -> BTreeMap<char, f64> {
    let mut counts = BTreeMap::new();
    for ch in letters(name) {
        *counts.entry(ch).or_insert(0.0) += 1.0;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::{
        cosmic_hash, destiny_number, initial_similarity, letter_frequency, name_breakdown,
        vowel_balance, vowel_ratio, NameMetricError,
    };
    use crate::model::result::MetricName;
    use crate::text::canonical::canonicalize;

    #[test]
    fn initial_similarity_uses_circular_distance() {
        let anna = canonicalize("Anna");
        assert_eq!(initial_similarity(&anna, &canonicalize("Adam")), 100.0);
        // a=1, z=26 are neighbours on the wheel.
        assert_eq!(initial_similarity(&anna, &canonicalize("Zoe")), 92.3);
        // a=1, n=14 are opposite.
        assert_eq!(initial_similarity(&anna, &canonicalize("Nick")), 0.0);
    }

    #[test]
    fn initial_similarity_handles_non_latin_letters() {
        let score = initial_similarity(&canonicalize("Мария"), &canonicalize("愛"));
        assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn letter_frequency_rewards_shared_letters() {
        let same = letter_frequency(&canonicalize("Lena"), &canonicalize("Lena"));
        assert_eq!(same, 100.0);
        let anagram = letter_frequency(&canonicalize("Amor"), &canonicalize("Roma"));
        assert_eq!(anagram, 100.0);
        let disjoint = letter_frequency(&canonicalize("Bob"), &canonicalize("Ian"));
        assert_eq!(disjoint, 0.0);
    }

    #[test]
    fn vowel_ratio_ignores_combining_marks() {
        assert_eq!(vowel_ratio(&canonicalize("Ada")), 2.0 / 3.0);
        let hindi = canonicalize("अमित");
        // अ is a vowel letter; म, त are consonants; ि is a mark.
        assert_eq!(vowel_ratio(&hindi), 1.0 / 3.0);
    }

    #[test]
    fn vowel_balance_is_symmetric() {
        let a = canonicalize("Isabella");
        let b = canonicalize("Bryn");
        assert_eq!(vowel_balance(&a, &b), vowel_balance(&b, &a));
        assert_eq!(vowel_balance(&a, &a), 100.0);
    }

    #[test]
    fn destiny_number_reduces_letter_sum() {
        // a(1) + d(4) + a(1) = 6
        assert_eq!(destiny_number(&canonicalize("Ada")), 6);
        // z(26) + o(15) + e(5) = 46 -> 10 -> 1
        assert_eq!(destiny_number(&canonicalize("Zoe")), 1);
    }

    #[test]
    fn cosmic_hash_is_order_sensitive_in_general() {
        let a = canonicalize("Romeo");
        let b = canonicalize("Juliet");
        assert_ne!(cosmic_hash(&a, &b), cosmic_hash(&b, &a));
    }

    #[test]
    fn breakdown_has_five_metrics_in_range() {
        let breakdown =
            name_breakdown(&canonicalize("Élodie"), &canonicalize("Søren")).expect("names");
        assert_eq!(breakdown.len(), 5);
        for (_, value) in breakdown.iter() {
            assert!((0.0..=100.0).contains(&value));
        }
        assert!(breakdown.get(MetricName::CosmicHash).is_some());
    }

    #[test]
    fn breakdown_rejects_letterless_names() {
        let err = name_breakdown(&canonicalize("Ann"), &canonicalize("- '")).unwrap_err();
        assert_eq!(err, NameMetricError::EmptyName { position: 2 });
    }

    #[test]
    fn breakdown_rejects_mark_only_names() {
        let marks = canonicalize("\u{0301}\u{0308}");
        assert!(!marks.is_empty());
        let err = name_breakdown(&marks, &canonicalize("Ann")).unwrap_err();
        assert_eq!(err, NameMetricError::EmptyName { position: 1 });
    }
}
