//! Validated birth dates and the seasons they fall in.

use crate::model::validation::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A calendar date accepted for birth-date scoring.
///
/// # Invariants
/// - `year() >= 0`.
/// - Not later than the reference day it was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Validates `date` against `today`.
    ///
    /// `position` is the 1-based argument slot echoed in errors.
    pub fn validate(
        date: NaiveDate,
        today: NaiveDate,
        position: u8,
    ) -> Result<Self, ValidationError> {
        if date.year() < 0 {
            return Err(ValidationError::YearOutOfRange {
                position,
                year: date.year(),
            });
        }
        if date > today {
            return Err(ValidationError::DateInFuture {
                position,
                date,
                today,
            });
        }
        Ok(Self(date))
    }

    /// Non-negative by construction.
    pub fn year(self) -> u32 {
        self.0.year().unsigned_abs()
    }

    /// 1..=12
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// 1..=31
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// 1..=5, days 1-7 are week 1.
    pub fn week_of_month(self) -> u32 {
        self.day().div_ceil(7)
    }

    pub fn season(self) -> Season {
        Season::from_month(self.month())
    }
}

impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Meteorological (northern-hemisphere) season of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// March-May spring, June-August summer, September-November autumn,
    /// everything else winter.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// Season half a year away.
    pub fn opposite(self) -> Self {
        match self {
            Self::Spring => Self::Autumn,
            Self::Summer => Self::Winter,
            Self::Autumn => Self::Spring,
            Self::Winter => Self::Summer,
        }
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        };
        f.write_str(name)
    }
}
