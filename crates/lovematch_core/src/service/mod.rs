//! Calculator entry points.
//!
//! # Responsibility
//! - Wire validation, override lookup, metrics, aggregation and verdict
//!   selection into the public `score_*` use cases.
//! - Own the degraded fallback for the name pipeline.
//!
//! # Invariants
//! - Scoring itself never draws randomness; only verdict selection does.
//! - Raw names are never logged, only their lengths.

pub mod calculator;
