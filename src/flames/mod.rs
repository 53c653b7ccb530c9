//! The FLAMES calculation core.
//!
//! This module is pure: no I/O, no randomness, no failure modes.
//! - Letter table (F/L/A/M/E/S and their meanings)
//! - Name normalization and common-letter cancellation
//! - The counting-out elimination loop

pub mod calculator;
pub mod letter;
pub mod schema;

// Re-export main types and functions
pub use calculator::{calculate_flames, count_remaining_letters, eliminate, normalize_name};
pub use letter::{FlamesLetter, Meaning, UnknownLetter, FLAMES_ORDER, MEANINGS};
pub use schema::{EliminationRound, FlamesResult};
