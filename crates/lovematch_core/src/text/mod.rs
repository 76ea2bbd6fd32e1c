//! Unicode text handling for name input.
//!
//! # Responsibility
//! - Canonicalize raw user text into a stable comparison form.
//! - Validate names before they reach any scoring pipeline.
//! - Provide the deterministic string hash used as the fallback scorer.
//! - Classify characters by script for letter values and vowel membership.
//!
//! # Invariants
//! - Canonicalization is idempotent.
//! - Hash output depends only on the code-point sequence.
//! - No function here reads locale or process state.

pub mod canonical;
pub mod hash;
pub mod script;
