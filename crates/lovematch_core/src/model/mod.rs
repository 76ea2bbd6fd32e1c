//! Domain model shared by every calculator.
//!
//! # Responsibility
//! - Define the closed result shape handed to UI/FFI callers.
//! - Define the zodiac reference data and validated birth dates.
//! - Define the validation error surfaced for rejected input.
//!
//! # Invariants
//! - Every score and sub-score held by these types lies in `0..=100`.
//! - Reference tables are immutable for the whole process lifetime.

pub mod birth_date;
pub mod result;
pub mod sign;
pub mod validation;
