//! Canonical text forms and name validation.
//!
//! # Responsibility
//! - Turn arbitrary input into `CanonicalText` (letters and marks only).
//! - Build order-specific `PairKey` values for override lookup.
//! - Gate raw names through the allowed-character check.
//!
//! # Invariants
//! - `canonicalize(canonicalize(x).as_str()) == canonicalize(x)`.
//! - Combining marks survive canonicalization (Devanagari, Thai, Arabic).
//! - `validate_name` never accepts digits, punctuation other than `-`/`'`,
//!   or control characters.

use crate::model::validation::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use unicode_normalization::UnicodeNormalization;

static NON_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{M}]+").expect("valid non-letter regex"));
static VALID_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{M}\p{Zs}'-]+$").expect("valid name regex"));

/// Text reduced to lower-cased, NFKC-normalized letters and combining marks.
///
/// Only [`canonicalize`] constructs values of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalText(String);

impl CanonicalText {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for CanonicalText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Concatenation of two canonical names in one fixed order.
///
/// `PairKey::new(a, b)` and `PairKey::new(b, a)` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairKey(String);

impl PairKey {
    pub fn new(first: &CanonicalText, second: &CanonicalText) -> Self {
        let mut key = String::with_capacity(first.0.len() + second.0.len());
        key.push_str(first.as_str());
        key.push_str(second.as_str());
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for PairKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trims, NFKC-normalizes and lower-cases `raw`.
///
/// This is the display/lookup form; punctuation and spaces are kept.
pub fn normalize_text(raw: &str) -> String {
    let composed = raw.nfkc().collect::<String>();
    let lowered = composed.to_lowercase();
    lowered.nfkc().collect::<String>().trim().to_string()
}

/// Reduces `raw` to its canonical letters-and-marks form.
///
/// Steps: NFKC, Unicode lower-casing, removal of every code point outside the
/// Letter/Mark categories, then NFKC again so a mark left next to its base
/// letter by the filter re-composes the same way on every pass.
pub fn canonicalize(raw: &str) -> CanonicalText {
    let normalized = normalize_text(raw);
    let letters = NON_LETTER_RE.replace_all(&normalized, "");
    CanonicalText(letters.nfkc().collect())
}

/// Returns whether `raw` is an acceptable name.
///
/// Accepts Unicode letters, combining marks, space separators (`\p{Zs}`),
/// hyphens and ASCII apostrophes. Tabs and line breaks count as control
/// characters. Empty and whitespace-only input is rejected.
pub fn validate_name(raw: &str) -> bool {
    !raw.trim().is_empty() && VALID_NAME_RE.is_match(raw)
}

/// Typed variant of [`validate_name`] used by the calculators.
///
/// `position` is the 1-based argument slot reported back to the caller.
pub fn check_name(raw: &str, position: u8) -> Result<(), ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyName { position });
    }
    if !VALID_NAME_RE.is_match(raw) {
        return Err(ValidationError::InvalidName {
            position,
            offending: first_disallowed_char(raw),
        });
    }
    Ok(())
}

fn first_disallowed_char(raw: &str) -> Option<char> {
    raw.chars()
        .find(|ch| !VALID_NAME_RE.is_match(ch.encode_utf8(&mut [0u8; 4])))
}
