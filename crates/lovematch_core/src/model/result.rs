//! Compatibility result model.
//!
//! # Responsibility
//! - Define the one closed output shape every calculator returns.
//! - Name the fifteen sub-metrics (five per domain) with stable wire keys.
//! - Map scores onto the five verdict bands.
//!
//! # Invariants
//! - `score` is always within `0..=100`.
//! - `source == Metrics` implies `score == aggregate(breakdown)`.
//! - `source != Metrics` implies an empty breakdown.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Upper bound of every score and sub-score.
pub const MAX_SCORE: u8 = 100;

/// Named sub-metric.
///
/// Serialized in camelCase to match the keys UI clients chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricName {
    InitialSimilarity,
    LetterFrequency,
    VowelBalance,
    NameNumerology,
    CosmicHash,
    SignHarmony,
    ElementalBalance,
    ModalityMatch,
    PlanetarySync,
    CosmicAspect,
    AgeHarmony,
    SeasonalMatch,
    #[serde(rename = "numerology")]
    LifePathNumerology,
    AstrologicalSync,
    GenerationalHarmony,
}

impl MetricName {
    /// Stable wire key, identical to the serde name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InitialSimilarity => "initialSimilarity",
            Self::LetterFrequency => "letterFrequency",
            Self::VowelBalance => "vowelBalance",
            Self::NameNumerology => "nameNumerology",
            Self::CosmicHash => "cosmicHash",
            Self::SignHarmony => "signHarmony",
            Self::ElementalBalance => "elementalBalance",
            Self::ModalityMatch => "modalityMatch",
            Self::PlanetarySync => "planetarySync",
            Self::CosmicAspect => "cosmicAspect",
            Self::AgeHarmony => "ageHarmony",
            Self::SeasonalMatch => "seasonalMatch",
            Self::LifePathNumerology => "numerology",
            Self::AstrologicalSync => "astrologicalSync",
            Self::GenerationalHarmony => "generationalHarmony",
        }
    }

    /// Human-readable chart label.
    pub fn label(self) -> &'static str {
        match self {
            Self::InitialSimilarity => "Initial Similarity",
            Self::LetterFrequency => "Letter Synergy",
            Self::VowelBalance => "Vowel Balance",
            Self::NameNumerology => "Destiny Numbers",
            Self::CosmicHash => "Cosmic Factor",
            Self::SignHarmony => "Sign Harmony",
            Self::ElementalBalance => "Elemental Balance",
            Self::ModalityMatch => "Modality Match",
            Self::PlanetarySync => "Planetary Sync",
            Self::CosmicAspect => "Cosmic Aspect",
            Self::AgeHarmony => "Age Harmony",
            Self::SeasonalMatch => "Seasonal Match",
            Self::LifePathNumerology => "Life Path Numerology",
            Self::AstrologicalSync => "Astrological Sync",
            Self::GenerationalHarmony => "Generational Harmony",
        }
    }
}

/// Sub-scores keyed by metric, iterated in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakdown(BTreeMap<MetricName, f64>);

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one sub-score, clamped into `0.0..=100.0`.
    pub fn insert(&mut self, metric: MetricName, value: f64) {
        self.0.insert(metric, value.clamp(0.0, f64::from(MAX_SCORE)));
    }

    pub fn get(&self, metric: MetricName) -> Option<f64> {
        self.0.get(&metric).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.0.values().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricName, f64)> + '_ {
        self.0.iter().map(|(metric, value)| (*metric, *value))
    }
}

impl FromIterator<(MetricName, f64)> for Breakdown {
    fn from_iter<I: IntoIterator<Item = (MetricName, f64)>>(iter: I) -> Self {
        let mut breakdown = Breakdown::new();
        for (metric, value) in iter {
            breakdown.insert(metric, value);
        }
        breakdown
    }
}

/// Verdict band, a pure function of the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// 0..=24
    Mismatch,
    /// 25..=49
    Uncertain,
    /// 50..=74
    Promising,
    /// 75..=89
    Strong,
    /// 90..=100
    Soulmates,
}

impl Band {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Self::Soulmates,
            75..=89 => Self::Strong,
            50..=74 => Self::Promising,
            25..=49 => Self::Uncertain,
            _ => Self::Mismatch,
        }
    }
}

/// How the final score was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    /// Mean of the domain's five sub-metrics.
    Metrics,
    /// Fixed score of a curated override pair.
    Override,
    /// Hash-only score used when the name metrics could not run.
    Fallback,
}

/// Output of every calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub score: u8,
    pub breakdown: Breakdown,
    pub band: Band,
    pub message: String,
    pub emoji: String,
    /// Short caption offered to share targets.
    pub share_text: String,
    pub source: ScoreSource,
}

impl CompatibilityResult {
    /// Whether the score came from the degraded hash-only path.
    pub fn is_degraded(&self) -> bool {
        self.source == ScoreSource::Fallback
    }
}
