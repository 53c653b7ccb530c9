//! Storage of finished calculations.
//!
//! This module handles:
//! - The stored row format
//! - Inserting rows into the hosted backend table
//! - A local append-only log
//! - Fire-and-forget saving that never fails the caller

pub mod client;
pub mod store;
pub mod types;

// Re-export main types
pub use client::RestStore;
pub use store::{persist_quietly, CalculationStore, JsonLinesStore};
pub use types::CalculationRecord;
