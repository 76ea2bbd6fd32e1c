//! Digit reduction and the friendly-number table.
//!
//! Shared by the name domain (destiny numbers) and the birth-date domain
//! (life path numbers).

/// Score when both numbers are identical.
pub const SAME_NUMBER_SCORE: f64 = 95.0;
/// Score for a pair listed in [`FRIENDLY_PAIRS`].
pub const FRIENDLY_PAIR_SCORE: f64 = 85.0;
/// Score for any other pair.
pub const NEUTRAL_PAIR_SCORE: f64 = 65.0;

/// Unordered pairs of single digits considered compatible.
const FRIENDLY_PAIRS: &[(u8, u8)] = &[
    (1, 3),
    (1, 5),
    (1, 9),
    (2, 4),
    (2, 6),
    (2, 8),
    (3, 5),
    (3, 7),
    (3, 9),
    (4, 6),
    (4, 8),
    (5, 7),
    (5, 9),
    (6, 8),
    (6, 9),
    (7, 9),
];

/// Repeatedly sums decimal digits until one digit remains.
///
/// `0` stays `0`; every positive input reduces to `1..=9`.
pub fn digital_root(mut value: u64) -> u8 {
    while value > 9 {
        let mut sum = 0;
        while value > 0 {
            sum += value % 10;
            value /= 10;
        }
        value = sum;
    }
    value as u8
}

pub fn is_friendly_pair(first: u8, second: u8) -> bool {
    FRIENDLY_PAIRS
        .iter()
        .any(|&(a, b)| (a == first && b == second) || (a == second && b == first))
}

/// Scores two reduced numbers: identical, friendly, or neutral.
pub fn pair_score(first: u8, second: u8) -> f64 {
    if first == second {
        SAME_NUMBER_SCORE
    } else if is_friendly_pair(first, second) {
        FRIENDLY_PAIR_SCORE
    } else {
        NEUTRAL_PAIR_SCORE
    }
}
