//! The six FLAMES letters and their fixed meanings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six candidate outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlamesLetter {
    F,
    L,
    A,
    M,
    E,
    S,
}

/// Display data attached to a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meaning {
    pub letter: FlamesLetter,
    pub word: &'static str,
    pub icon: &'static str,
}

/// Starting order of the elimination circle
pub const FLAMES_ORDER: [FlamesLetter; 6] = [
    FlamesLetter::F,
    FlamesLetter::L,
    FlamesLetter::A,
    FlamesLetter::M,
    FlamesLetter::E,
    FlamesLetter::S,
];

/// Letter -> meaning table, indexed in `FLAMES_ORDER` order
pub const MEANINGS: [Meaning; 6] = [
    Meaning { letter: FlamesLetter::F, word: "Friends", icon: "👫" },
    Meaning { letter: FlamesLetter::L, word: "Love", icon: "❤️" },
    Meaning { letter: FlamesLetter::A, word: "Affection", icon: "💕" },
    Meaning { letter: FlamesLetter::M, word: "Marriage", icon: "💍" },
    Meaning { letter: FlamesLetter::E, word: "Enemy", icon: "⚔️" },
    Meaning { letter: FlamesLetter::S, word: "Siblings", icon: "👨‍👩‍👧‍👦" },
];

impl FlamesLetter {
    /// Look up the display meaning for this letter
    pub fn meaning(self) -> &'static Meaning {
        &MEANINGS[self as usize]
    }

    /// Display label, e.g. "Friends"
    pub fn word(self) -> &'static str {
        self.meaning().word
    }

    pub fn icon(self) -> &'static str {
        self.meaning().icon
    }

    pub fn symbol(self) -> char {
        match self {
            FlamesLetter::F => 'F',
            FlamesLetter::L => 'L',
            FlamesLetter::A => 'A',
            FlamesLetter::M => 'M',
            FlamesLetter::E => 'E',
            FlamesLetter::S => 'S',
        }
    }
}

impl fmt::Display for FlamesLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error returned when a string is not one of F, L, A, M, E, S
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a FLAMES letter: {0:?}")]
pub struct UnknownLetter(pub String);

impl FromStr for FlamesLetter {
    type Err = UnknownLetter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        FLAMES_ORDER
            .iter()
            .copied()
            .find(|letter| trimmed.eq_ignore_ascii_case(&letter.symbol().to_string()))
            .ok_or_else(|| UnknownLetter(s.to_string()))
    }
}
