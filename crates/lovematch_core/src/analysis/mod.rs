//! Descriptive commentary for zodiac and birth-date results.
//!
//! # Responsibility
//! - Turn a scored pair into short, display-ready sentences.
//!
//! # Invariants
//! - Output depends only on the inputs; no randomness.
//! - Headlines use the same thresholds in both domains (85/75/65/55).

pub mod birth_dates;
pub mod zodiac;

/// Headline tier shared by both narrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeadlineTier {
    Exceptional,
    Great,
    Good,
    Fair,
    Unusual,
}

impl HeadlineTier {
    pub(crate) fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => Self::Exceptional,
            75..=84 => Self::Great,
            65..=74 => Self::Good,
            55..=64 => Self::Fair,
            _ => Self::Unusual,
        }
    }
}
