//! Deterministic compatibility-scoring engine.
//! Names, zodiac signs and birth dates in; a closed, serializable result out.

pub mod analysis;
pub mod logging;
pub mod model;
pub mod scoring;
pub mod service;
pub mod text;
pub mod verdict;

pub use analysis::birth_dates::{analyze_birth_dates, BirthDateAnalysis};
pub use analysis::zodiac::{analyze_zodiac, AspectPattern, ZodiacAnalysis};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::birth_date::{BirthDate, Season};
pub use model::result::{
    Band, Breakdown, CompatibilityResult, MetricName, ScoreSource, MAX_SCORE,
};
pub use model::sign::{Element, Modality, Planet, Sign, SignParseError};
pub use model::validation::ValidationError;
pub use scoring::aggregate;
pub use scoring::birth_dates::birth_date_breakdown;
pub use scoring::names::{name_breakdown, NameMetricError};
pub use scoring::zodiac::zodiac_breakdown;
pub use service::calculator::{
    score_birth_dates, score_birth_dates_on, score_names, score_names_with, score_zodiac,
    score_zodiac_with,
};
pub use text::canonical::{canonicalize, normalize_text, validate_name, CanonicalText, PairKey};
pub use text::hash::{hash_pair_score, hash_to_score};
pub use verdict::messages::{select_message, Verdict};
pub use verdict::overrides::{match_override, OverrideEntry};

/// Returns the engine crate version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
