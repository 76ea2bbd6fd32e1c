//! Verdict selection.
//!
//! # Responsibility
//! - Map final scores to band messages.
//! - Hold the curated override pairs that bypass metric scoring.
//!
//! # Invariants
//! - Tables are static and read-only.
//! - Randomness enters only through the generator passed to
//!   [`messages::select_message`].

pub mod messages;
pub mod overrides;
