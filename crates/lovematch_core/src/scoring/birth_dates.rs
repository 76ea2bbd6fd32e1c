//! Birth-date-domain metrics.
//!
//! # Responsibility
//! - Score two validated birth dates on age gap, season, life path, day of
//!   month and generation.
//!
//! # Invariants
//! - Inputs are `BirthDate` values, so years are non-negative.
//! - Every metric is symmetric and a whole number in `20..=100`.

use crate::model::birth_date::BirthDate;
use crate::model::result::{Breakdown, MetricName};
use crate::scoring::numerology::{digital_root, pair_score};

/// Lowest age-harmony score for very large gaps.
const AGE_HARMONY_FLOOR: u32 = 20;
/// Day sums with numerological weight.
const SIGNIFICANT_DAY_SUMS: [u32; 3] = [14, 21, 28];

/// Computes all five birth-date metrics.
pub fn birth_date_breakdown(first: BirthDate, second: BirthDate) -> Breakdown {
    Breakdown::from_iter([
        (MetricName::AgeHarmony, age_harmony(first, second)),
        (MetricName::SeasonalMatch, seasonal_match(first, second)),
        (
            MetricName::LifePathNumerology,
            life_path_numerology(first, second),
        ),
        (MetricName::AstrologicalSync, astrological_sync(first, second)),
        (
            MetricName::GenerationalHarmony,
            generational_harmony(first, second),
        ),
    ])
}

/// Absolute difference of the birth years.
pub fn year_difference(first: BirthDate, second: BirthDate) -> u32 {
    first.year().abs_diff(second.year())
}

pub fn age_harmony(first: BirthDate, second: BirthDate) -> f64 {
    let score = match year_difference(first, second) {
        0 => 100,
        1..=2 => 95,
        3..=5 => 85,
        6..=10 => 70,
        11..=15 => 55,
        diff => 50u32.saturating_sub(diff).max(AGE_HARMONY_FLOOR),
    };
    f64::from(score)
}

pub fn seasonal_match(first: BirthDate, second: BirthDate) -> f64 {
    let (a, b) = (first.season(), second.season());
    if a == b {
        90.0
    } else if a.opposite() == b {
        75.0
    } else {
        60.0
    }
}

/// Digital root of `day + month + year`, always `1..=9`.
pub fn life_path_number(date: BirthDate) -> u8 {
    digital_root(u64::from(date.day() + date.month() + date.year()))
}

pub fn life_path_numerology(first: BirthDate, second: BirthDate) -> f64 {
    pair_score(life_path_number(first), life_path_number(second))
}

pub fn astrological_sync(first: BirthDate, second: BirthDate) -> f64 {
    let (day_a, day_b) = (first.day(), second.day());
    if day_a == day_b {
        100.0
    } else if day_a.abs_diff(day_b) <= 3 {
        85.0
    } else if SIGNIFICANT_DAY_SUMS.contains(&(day_a + day_b)) {
        80.0
    } else if first.week_of_month() == second.week_of_month() {
        70.0
    } else {
        60.0
    }
}

pub fn generational_harmony(first: BirthDate, second: BirthDate) -> f64 {
    match year_difference(first, second) {
        0 => 100.0,
        1..=5 => 90.0,
        6..=10 => 80.0,
        11..=20 => 70.0,
        _ => 50.0,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        age_harmony, astrological_sync, birth_date_breakdown, generational_harmony,
        life_path_number, life_path_numerology, seasonal_match,
    };
    use crate::model::birth_date::BirthDate;
    use crate::model::result::MetricName;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> BirthDate {
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).expect("valid today");
        let value = NaiveDate::from_ymd_opt(year, month, day).expect("valid test date");
        BirthDate::validate(value, today, 1).expect("past date")
    }

    #[test]
    fn identical_dates_score_perfect_day_and_year_metrics() {
        let d = date(1992, 7, 19);
        let breakdown = birth_date_breakdown(d, d);
        assert_eq!(breakdown.get(MetricName::AgeHarmony), Some(100.0));
        assert_eq!(breakdown.get(MetricName::GenerationalHarmony), Some(100.0));
        assert_eq!(breakdown.get(MetricName::AstrologicalSync), Some(100.0));
        assert_eq!(breakdown.get(MetricName::SeasonalMatch), Some(90.0));
        assert_eq!(breakdown.get(MetricName::LifePathNumerology), Some(95.0));
    }

    #[test]
    fn age_harmony_steps_down_with_the_gap() {
        let base = date(1990, 1, 1);
        assert_eq!(age_harmony(base, date(1992, 1, 1)), 95.0);
        assert_eq!(age_harmony(base, date(1995, 1, 1)), 85.0);
        assert_eq!(age_harmony(base, date(2000, 1, 1)), 70.0);
        assert_eq!(age_harmony(base, date(2005, 1, 1)), 55.0);
        assert_eq!(age_harmony(base, date(2010, 1, 1)), 30.0);
        assert_eq!(age_harmony(base, date(1900, 1, 1)), 20.0);
    }

    #[test]
    fn seasonal_match_distinguishes_opposites_from_neighbours() {
        assert_eq!(seasonal_match(date(1990, 4, 1), date(1991, 10, 1)), 75.0);
        assert_eq!(seasonal_match(date(1990, 7, 1), date(1991, 1, 1)), 75.0);
        assert_eq!(seasonal_match(date(1990, 4, 1), date(1991, 7, 1)), 60.0);
        assert_eq!(seasonal_match(date(1990, 12, 1), date(1991, 2, 1)), 90.0);
    }

    #[test]
    fn life_path_reduces_day_month_year() {
        // 14 + 2 + 1990 = 2006 -> 8
        assert_eq!(life_path_number(date(1990, 2, 14)), 8);
        // 1 + 1 + 2000 = 2002 -> 4
        assert_eq!(life_path_number(date(2000, 1, 1)), 4);
        // 8 and 4 are a friendly pair.
        assert_eq!(
            life_path_numerology(date(1990, 2, 14), date(2000, 1, 1)),
            85.0
        );
    }

    #[test]
    fn astrological_sync_checks_rules_in_order() {
        assert_eq!(astrological_sync(date(1990, 1, 10), date(1990, 5, 12)), 85.0);
        assert_eq!(astrological_sync(date(1990, 1, 5), date(1990, 5, 16)), 80.0);
        assert_eq!(astrological_sync(date(1990, 1, 8), date(1990, 5, 14)), 70.0);
        assert_eq!(astrological_sync(date(1990, 1, 1), date(1990, 5, 30)), 60.0);
    }

    #[test]
    fn generational_harmony_buckets() {
        let base = date(1980, 6, 1);
        assert_eq!(generational_harmony(base, date(1985, 6, 1)), 90.0);
        assert_eq!(generational_harmony(base, date(1990, 6, 1)), 80.0);
        assert_eq!(generational_harmony(base, date(2000, 6, 1)), 70.0);
        assert_eq!(generational_harmony(base, date(2001, 6, 1)), 50.0);
    }
}
