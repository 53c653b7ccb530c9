//! Row format for stored calculations.
//!
//! Field names match the columns of the `flames_calculations` table.

use crate::flames::{FlamesLetter, FlamesResult};
use serde::{Deserialize, Serialize};

/// One stored calculation (append-only, no key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub name1: String,
    pub name2: String,
    pub letter_count: usize,
    pub result: FlamesLetter,
}

impl From<&FlamesResult> for CalculationRecord {
    fn from(result: &FlamesResult) -> Self {
        Self {
            name1: result.name1.clone(),
            name2: result.name2.clone(),
            letter_count: result.letter_count,
            result: result.result,
        }
    }
}
