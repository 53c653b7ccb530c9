use crate::flames::{calculate_flames, FlamesResult, FLAMES_ORDER};
use crate::output::{read_result, render_meanings};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate a result report file
pub fn validate_result_file(file_path: PathBuf) -> Result<()> {
    println!("Validating result: {}", file_path.display());

    let report = read_result(&file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    check_result(&report.result)?;

    println!("✓ Valid result JSON");
    println!("  Version: {}", report.version);
    println!("  Names: {} & {}", report.result.name1, report.result.name2);
    println!("  Letter Count: {}", report.result.letter_count);
    println!("  Result: {} ({})", report.result.result, report.result.word());
    println!("  Restricted: {}", report.restricted);

    Ok(())
}

/// Check that a stored result is internally consistent
///
/// The round chain must shrink by exactly the eliminated letter each time,
/// and recomputing from the stored names must give the same result.
pub fn check_result(result: &FlamesResult) -> Result<()> {
    let expected_rounds = FLAMES_ORDER.len() - 1;
    if result.elimination_rounds.len() != expected_rounds {
        anyhow::bail!(
            "Expected {} elimination rounds, found {}",
            expected_rounds,
            result.elimination_rounds.len()
        );
    }

    let mut circle = FLAMES_ORDER.to_vec();
    for (i, round) in result.elimination_rounds.iter().enumerate() {
        if round.round != i + 1 {
            anyhow::bail!("Round {} is numbered {}", i + 1, round.round);
        }

        circle.retain(|l| *l != round.eliminated);
        if circle != round.remaining {
            anyhow::bail!("Round {} remaining letters do not follow from the previous round", round.round);
        }
    }

    if circle != [result.result] {
        anyhow::bail!("Result {} is not the surviving letter", result.result);
    }

    let recomputed = calculate_flames(&result.name1, &result.name2);
    if recomputed != *result {
        anyhow::bail!(
            "Stored result does not match recomputation (letter count {} vs {})",
            result.letter_count,
            recomputed.letter_count
        );
    }

    Ok(())
}

/// Display the letter meanings legend
pub fn display_meanings() {
    print!("{}", render_meanings());
}

/// Display version information
pub fn display_version() {
    println!("FLAMES Finder v{}", env!("CARGO_PKG_VERSION"));
    println!("Result Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Type two names and find out: Friends, Love, Affection, Marriage, Enemy or Siblings.");
}
