//! Metric calculators and score aggregation.
//!
//! # Responsibility
//! - Compute the five sub-metrics of each domain (name, zodiac, birth date).
//! - Reduce sub-metrics into one final score.
//!
//! # Invariants
//! - Every calculator is a pure function of its arguments and static tables.
//! - Every sub-metric lies in `0.0..=100.0`.
//! - Aggregation is `round(mean)`, clamped to `0..=100`.

pub mod birth_dates;
pub mod names;
pub mod numerology;
pub mod zodiac;

use crate::model::result::MAX_SCORE;

/// Mean of `sub_scores`, rounded half away from zero and clamped.
///
/// An empty slice aggregates to 0.
pub fn aggregate(sub_scores: &[f64]) -> u8 {
    if sub_scores.is_empty() {
        return 0;
    }
    let mean = sub_scores.iter().sum::<f64>() / sub_scores.len() as f64;
    mean.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}

/// Rounds to one decimal place.
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
