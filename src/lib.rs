//! FLAMES Finder
//!
//! The FLAMES name game: two names go in, common letters cancel out, and
//! the leftover count is used to knock letters out of F-L-A-M-E-S until
//! one relationship is left.
//!
//! This crate provides the core calculation and the pieces around it
//! used by the `flames` CLI tool.
//!
//! ## Getting Started
//!
//! ```
//! use flames_finder::flames::{calculate_flames, FlamesLetter};
//!
//! let result = calculate_flames("Romeo", "Juliet");
//! assert_eq!(result.elimination_rounds.len(), 5);
//! assert_eq!(result.result, FlamesLetter::E);
//! assert_eq!(result.word(), "Enemy");
//! ```

pub mod commands;
pub mod flames;
pub mod output;
pub mod persistence;
pub mod policy;
pub mod utils;
