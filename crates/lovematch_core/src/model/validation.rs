//! Validation failures for calculator input.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input rejected before any scoring happens.
///
/// `position` is the 1-based argument slot (first or second person).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty or whitespace only.
    EmptyName { position: u8 },
    /// Name contains a character outside letters/marks/space/`-`/`'`.
    InvalidName {
        position: u8,
        offending: Option<char>,
    },
    /// Birth year is negative.
    YearOutOfRange { position: u8, year: i32 },
    /// Birth date lies after the reference day.
    DateInFuture {
        position: u8,
        date: NaiveDate,
        today: NaiveDate,
    },
}

impl ValidationError {
    /// Argument slot the error refers to.
    pub fn position(&self) -> u8 {
        match self {
            Self::EmptyName { position }
            | Self::InvalidName { position, .. }
            | Self::YearOutOfRange { position, .. }
            | Self::DateInFuture { position, .. } => *position,
        }
    }

    /// Stable machine-readable code for logs and CLI output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyName { .. } => "empty_name",
            Self::InvalidName { .. } => "invalid_name",
            Self::YearOutOfRange { .. } => "year_out_of_range",
            Self::DateInFuture { .. } => "date_in_future",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName { position } => write!(f, "name #{position} must not be empty"),
            Self::InvalidName {
                position,
                offending: Some(ch),
            } => write!(
                f,
                "name #{position} contains disallowed character {ch:?} (U+{:04X})",
                u32::from(*ch)
            ),
            Self::InvalidName {
                position,
                offending: None,
            } => write!(f, "name #{position} contains disallowed characters"),
            Self::YearOutOfRange { position, year } => {
                write!(f, "birth date #{position} has unsupported year {year}")
            }
            Self::DateInFuture {
                position,
                date,
                today,
            } => write!(
                f,
                "birth date #{position} ({date}) is later than today ({today})"
            ),
        }
    }
}

impl Error for ValidationError {}
