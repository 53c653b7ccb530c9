//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod calculate;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use calculate::{execute_calculate, render_outcome, validate_args, CalculateOutcome};
pub use models::CalculateArgs;
pub use utils::{check_result, display_meanings, display_version, validate_result_file};
