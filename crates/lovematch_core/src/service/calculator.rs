//! Compatibility calculators.
//!
//! # Responsibility
//! - Validate raw input and reject it with `ValidationError`.
//! - Produce a closed `CompatibilityResult` for every accepted pair.
//!
//! # Invariants
//! - `source == Metrics` implies `score == aggregate(breakdown)`.
//! - Override and fallback results carry an empty breakdown.
//! - The `*_with` / `*_on` variants are deterministic for a seeded generator.

use crate::model::birth_date::BirthDate;
use crate::model::result::{Band, Breakdown, CompatibilityResult, ScoreSource};
use crate::model::sign::Sign;
use crate::model::validation::ValidationError;
use crate::scoring::aggregate;
use crate::scoring::birth_dates::birth_date_breakdown;
use crate::scoring::names::name_breakdown;
use crate::scoring::zodiac::zodiac_breakdown;
use crate::text::canonical::{canonicalize, check_name};
use crate::text::hash::hash_pair_score;
use crate::verdict::messages::{select_message, Verdict};
use crate::verdict::overrides::{match_override, OverrideEntry};
use chrono::{Local, NaiveDate};
use log::{debug, info, warn};
use rand::Rng;
use std::time::Instant;

/// Scores two names with the thread-local generator.
///
/// # Errors
/// - `EmptyName` / `InvalidName` when either name fails validation.
pub fn score_names(first: &str, second: &str) -> Result<CompatibilityResult, ValidationError> {
    score_names_with(first, second, &mut rand::thread_rng())
}

/// Scores two names, drawing the verdict from `rng`.
///
/// # Contract
/// - Curated pairs return their fixed score in either argument order.
/// - Names without letters (e.g. `"-"`) fall back to the legacy hash score
///   and are tagged `ScoreSource::Fallback`.
pub fn score_names_with<R: Rng + ?Sized>(
    first: &str,
    second: &str,
    rng: &mut R,
) -> Result<CompatibilityResult, ValidationError> {
    let started_at = Instant::now();
    debug!(
        "event=score_names module=service status=start first_len={} second_len={}",
        first.chars().count(),
        second.chars().count()
    );

    if let Err(err) = check_name(first, 1).and_then(|()| check_name(second, 2)) {
        warn!(
            "event=score_names module=service status=rejected error_code={} position={}",
            err.code(),
            err.position()
        );
        return Err(err);
    }

    let canonical_first = canonicalize(first);
    let canonical_second = canonicalize(second);

    if let Some(entry) = match_override(&canonical_first, &canonical_second) {
        let result = override_result(entry);
        log_scored("score_names", &result, started_at);
        return Ok(result);
    }

    let result = match name_breakdown(&canonical_first, &canonical_second) {
        Ok(breakdown) => metric_result(breakdown, rng),
        Err(err) => {
            warn!(
                "event=score_names module=service status=degraded error_code=name_metrics_failed error={}",
                err
            );
            fallback_result(hash_pair_score(first, second), rng)
        }
    };
    log_scored("score_names", &result, started_at);
    Ok(result)
}

/// Scores two signs with the thread-local generator.
pub fn score_zodiac(first: Sign, second: Sign) -> CompatibilityResult {
    score_zodiac_with(first, second, &mut rand::thread_rng())
}

pub fn score_zodiac_with<R: Rng + ?Sized>(
    first: Sign,
    second: Sign,
    rng: &mut R,
) -> CompatibilityResult {
    let started_at = Instant::now();
    debug!(
        "event=score_zodiac module=service status=start first={} second={}",
        first, second
    );
    let result = metric_result(zodiac_breakdown(first, second), rng);
    log_scored("score_zodiac", &result, started_at);
    result
}

/// Scores two birth dates against the local current date.
///
/// # Errors
/// - `YearOutOfRange` for negative years.
/// - `DateInFuture` for dates after today.
pub fn score_birth_dates(
    first: NaiveDate,
    second: NaiveDate,
) -> Result<CompatibilityResult, ValidationError> {
    let today = Local::now().date_naive();
    score_birth_dates_on(first, second, today, &mut rand::thread_rng())
}

/// Fully injectable variant of [`score_birth_dates`].
pub fn score_birth_dates_on<R: Rng + ?Sized>(
    first: NaiveDate,
    second: NaiveDate,
    today: NaiveDate,
    rng: &mut R,
) -> Result<CompatibilityResult, ValidationError> {
    let started_at = Instant::now();
    debug!("event=score_birth_dates module=service status=start today={today}");

    let validated = BirthDate::validate(first, today, 1)
        .and_then(|a| BirthDate::validate(second, today, 2).map(|b| (a, b)));
    let (first, second) = match validated {
        Ok(pair) => pair,
        Err(err) => {
            warn!(
                "event=score_birth_dates module=service status=rejected error_code={} position={}",
                err.code(),
                err.position()
            );
            return Err(err);
        }
    };

    let result = metric_result(birth_date_breakdown(first, second), rng);
    log_scored("score_birth_dates", &result, started_at);
    Ok(result)
}

fn metric_result<R: Rng + ?Sized>(breakdown: Breakdown, rng: &mut R) -> CompatibilityResult {
    let score = aggregate(&breakdown.values());
    build_result(
        score,
        breakdown,
        select_message(score, rng),
        ScoreSource::Metrics,
    )
}

fn override_result(entry: &OverrideEntry) -> CompatibilityResult {
    build_result(
        entry.score,
        Breakdown::new(),
        Verdict::from_override(entry),
        ScoreSource::Override,
    )
}

fn fallback_result<R: Rng + ?Sized>(score: u8, rng: &mut R) -> CompatibilityResult {
    build_result(
        score,
        Breakdown::new(),
        select_message(score, rng),
        ScoreSource::Fallback,
    )
}

fn build_result(
    score: u8,
    breakdown: Breakdown,
    verdict: Verdict,
    source: ScoreSource,
) -> CompatibilityResult {
    CompatibilityResult {
        score,
        breakdown,
        band: Band::from_score(score),
        message: verdict.message.to_string(),
        emoji: verdict.emoji.to_string(),
        share_text: verdict.share_text.to_string(),
        source,
    }
}

fn log_scored(event: &str, result: &CompatibilityResult, started_at: Instant) {
    info!(
        "event={} module=service status=ok source={:?} score={} band={:?} duration_us={}",
        event,
        result.source,
        result.score,
        result.band,
        started_at.elapsed().as_micros()
    );
}

#[cfg(test)]
mod tests {
    use super::{score_birth_dates_on, score_names_with, score_zodiac_with};
    use crate::model::result::{Band, MetricName, ScoreSource};
    use crate::model::sign::Sign;
    use crate::model::validation::ValidationError;
    use crate::scoring::aggregate;
    use crate::text::hash::hash_pair_score;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn names_use_metrics_and_obey_aggregation_law() {
        let result = score_names_with("Alice", "Bob", &mut rng()).expect("valid names");
        assert_eq!(result.source, ScoreSource::Metrics);
        assert_eq!(result.breakdown.len(), 5);
        assert_eq!(result.score, aggregate(&result.breakdown.values()));
        assert_eq!(result.score, 62);
        assert_eq!(result.band, Band::Promising);
        assert_eq!(result.breakdown.get(MetricName::CosmicHash), Some(60.0));
    }

    #[test]
    fn override_wins_in_both_orders() {
        for (a, b) in [("Shrek", "Fiona"), ("Fiona", "Shrek"), ("  SHREK ", "fiona")] {
            let result = score_names_with(a, b, &mut rng()).expect("valid names");
            assert_eq!(result.score, 99);
            assert_eq!(result.source, ScoreSource::Override);
            assert!(result.breakdown.is_empty());
            assert_eq!(result.emoji, "🧅");
        }
    }

    #[test]
    fn letterless_name_degrades_to_hash_fallback() {
        let result = score_names_with("-", "Anna", &mut rng()).expect("hyphen is a valid name");
        assert_eq!(result.source, ScoreSource::Fallback);
        assert!(result.is_degraded());
        assert!(result.breakdown.is_empty());
        // |hash("anna")| mod 101
        assert_eq!(result.score, 52);
    }

    #[test]
    fn mark_only_name_degrades_to_hash_fallback() {
        let result =
            score_names_with("\u{0301}", "Anna", &mut rng()).expect("marks pass validation");
        assert_eq!(result.source, ScoreSource::Fallback);
        assert!(result.breakdown.is_empty());
        assert_eq!(result.score, hash_pair_score("\u{0301}", "Anna"));
    }

    #[test]
    fn invalid_names_are_rejected_with_position() {
        let err = score_names_with("John123", "Jane", &mut rng()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidName {
                position: 1,
                offending: Some('1'),
            }
        );
        let err = score_names_with("Jane", "   ", &mut rng()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyName { position: 2 });
    }

    #[test]
    fn zodiac_aries_leo() {
        let result = score_zodiac_with(Sign::Aries, Sign::Leo, &mut rng());
        assert_eq!(result.score, 84);
        assert_eq!(result.band, Band::Strong);
        assert_eq!(result.breakdown.get(MetricName::SignHarmony), Some(85.0));
        assert_eq!(result.breakdown.get(MetricName::ElementalBalance), Some(90.0));
    }

    #[test]
    fn birth_dates_validate_against_injected_today() {
        let today = ymd(2024, 6, 1);
        let ok = score_birth_dates_on(ymd(1990, 2, 14), ymd(1992, 3, 1), today, &mut rng())
            .expect("past dates");
        assert_eq!(ok.source, ScoreSource::Metrics);
        assert_eq!(ok.score, aggregate(&ok.breakdown.values()));

        let err = score_birth_dates_on(ymd(1990, 2, 14), ymd(2024, 6, 2), today, &mut rng())
            .unwrap_err();
        assert_eq!(err.code(), "date_in_future");
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn same_seed_reproduces_whole_result() {
        let first = score_names_with("Romeo", "Juliet", &mut rng()).expect("valid names");
        let second = score_names_with("Romeo", "Juliet", &mut rng()).expect("valid names");
        assert_eq!(first, second);
    }
}
