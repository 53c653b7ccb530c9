//! Output writers for calculation results.
//!
//! This module handles:
//! - JSON result reports on disk
//! - Terminal rendering of results and the restricted-pair refusal
//! - Share messages

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{
    read_result, refusal_to_string, result_to_string, write_result, RefusalReport, ResultReport,
};
pub use text::{render_meanings, render_refusal, render_result, share_message, whatsapp_link};
