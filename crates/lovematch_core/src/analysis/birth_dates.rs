//! Birth-date pair commentary.

use crate::analysis::HeadlineTier;
use crate::model::birth_date::BirthDate;
use crate::scoring::aggregate;
use crate::scoring::birth_dates::{birth_date_breakdown, life_path_number, year_difference};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthDateAnalysis {
    pub score: u8,
    /// Absolute difference of birth years.
    pub age_difference: u32,
    pub life_stage: &'static str,
    pub seasonal_match: String,
    pub life_paths: (u8, u8),
    pub numerology_message: String,
    pub overall_message: &'static str,
}

pub fn analyze_birth_dates(first: BirthDate, second: BirthDate) -> BirthDateAnalysis {
    let score = aggregate(&birth_date_breakdown(first, second).values());
    let age_difference = year_difference(first, second);
    let life_paths = (life_path_number(first), life_path_number(second));

    BirthDateAnalysis {
        score,
        age_difference,
        life_stage: life_stage(age_difference),
        seasonal_match: seasonal_commentary(first, second),
        life_paths,
        numerology_message: numerology_commentary(life_paths.0, life_paths.1),
        overall_message: birth_date_headline(score),
    }
}

pub fn life_stage(age_difference: u32) -> &'static str {
    match age_difference {
        0..=2 => "Perfect sync - you're in the same life stage!",
        3..=5 => "Great alignment - similar life experiences",
        6..=10 => "Complementary stages - learn from each other",
        _ => "Different perspectives - unique dynamic",
    }
}

fn seasonal_commentary(first: BirthDate, second: BirthDate) -> String {
    let (a, b) = (first.season(), second.season());
    if a == b {
        format!("Both {a} babies - natural harmony!")
    } else {
        format!("{a} meets {b} - beautiful contrast!")
    }
}

fn numerology_commentary(first: u8, second: u8) -> String {
    let tail = if first == second {
        "Twin souls!"
    } else {
        "Complementary energies"
    };
    format!("Life paths {first} & {second} - {tail}")
}

pub fn birth_date_headline(score: u8) -> &'static str {
    match HeadlineTier::from_score(score) {
        HeadlineTier::Exceptional => {
            "Cosmic soulmates! Your birth dates reveal incredible compatibility 💫"
        }
        HeadlineTier::Great => "Written in the stars! Amazing birthday harmony ⭐",
        HeadlineTier::Good => "Beautiful connection! Your dates align wonderfully 🌟",
        HeadlineTier::Fair => "Good vibes! Solid birthday compatibility 🎂",
        HeadlineTier::Unusual => "Unique pairing! Opposites can attract beautifully 🎭",
    }
}
