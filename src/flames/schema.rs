//! Result structures produced by the FLAMES calculation.
//!
//! These are serialized as-is into result reports and are the only
//! thing the presentation and persistence layers see of the core.

use super::letter::FlamesLetter;
use serde::{Deserialize, Serialize};

/// One pass of the counting-out process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationRound {
    /// 1-based round number
    pub round: usize,

    /// Letter removed in this round
    pub eliminated: FlamesLetter,

    /// Letters still in the circle after the removal, in order
    pub remaining: Vec<FlamesLetter>,
}

/// Complete outcome of one calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlamesResult {
    /// First name after normalization
    pub name1: String,

    /// Second name after normalization
    pub name2: String,

    /// Uncancelled letters across both names (the counting step)
    pub letter_count: usize,

    /// Surviving letter
    pub result: FlamesLetter,

    /// Audit trail of how `result` was reached
    pub elimination_rounds: Vec<EliminationRound>,
}

impl FlamesResult {
    /// Display label of the final letter
    pub fn word(&self) -> &'static str {
        self.result.word()
    }

    /// Letters in the order they were eliminated
    pub fn elimination_order(&self) -> Vec<FlamesLetter> {
        self.elimination_rounds.iter().map(|r| r.eliminated).collect()
    }
}
