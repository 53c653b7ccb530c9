//! Calculate command implementation.
//!
//! The calculate command:
//! 1. Computes the FLAMES result
//! 2. Saves it (fire-and-forget)
//! 3. Applies the restricted-pair policy
//! 4. Writes the JSON report (if requested)
//! 5. Prints the result, or only the refusal for a restricted pair

use super::models::CalculateArgs;
use crate::flames::{calculate_flames, FlamesResult};
use crate::output::{
    refusal_to_string, render_refusal, render_result, result_to_string, share_message,
    whatsapp_link, write_result, ResultReport,
};
use crate::persistence::{persist_quietly, CalculationStore, JsonLinesStore, RestStore};
use anyhow::{Context, Result};
use log::{debug, info, warn};

/// What the calculate command produced
#[derive(Debug, Clone)]
pub struct CalculateOutcome {
    pub result: FlamesResult,

    /// Result was withheld by the policy
    pub restricted: bool,

    /// Number of stores that accepted the record
    pub saved_to: usize,
}

/// Execute the calculate command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Invalid arguments
/// * Report file write errors
///
/// Store failures are logged and never returned.
pub fn execute_calculate(args: CalculateArgs) -> Result<CalculateOutcome> {
    validate_args(&args)?;

    let name1 = args.name1.trim();
    let name2 = args.name2.trim();

    info!("Calculating FLAMES for: {} & {}", name1, name2);
    let result = calculate_flames(name1, name2);
    debug!(
        "Elimination order: {:?}, result {}",
        result.elimination_order(),
        result.result
    );

    // Saved whether or not the result is shown
    let saved_to = if args.no_save {
        info!("Skipping save (--no-save)");
        0
    } else {
        save_everywhere(&args, &result)
    };

    let restricted = args.policy.is_restricted(name1, name2);

    // The report file keeps the full record, like the stores do
    if let Some(path) = &args.output_json {
        let report = ResultReport::new(result.clone(), restricted);
        write_result(&report, path).context("Failed to write result JSON")?;
        info!("✓ Result written to: {}", path.display());
    }

    let outcome = CalculateOutcome {
        result,
        restricted,
        saved_to,
    };

    print!("{}", render_outcome(&args, &outcome)?);

    Ok(outcome)
}

/// Build what the user sees for an outcome
///
/// **Public** - kept free of printing so the display rules can be tested
///
/// A restricted outcome renders only the refusal, in text or JSON; the
/// names, count, rounds and final letter never appear.
pub fn render_outcome(args: &CalculateArgs, outcome: &CalculateOutcome) -> Result<String> {
    if outcome.restricted {
        debug!("Result withheld for restricted pair");
        return if args.print_json {
            let json = refusal_to_string().context("Failed to serialize refusal")?;
            Ok(format!("{}\n", json))
        } else {
            Ok(render_refusal())
        };
    }

    if args.print_json {
        let report = ResultReport::new(outcome.result.clone(), false);
        let json = result_to_string(&report).context("Failed to serialize result")?;
        return Ok(format!("{}\n", json));
    }

    let mut out = render_result(&outcome.result);
    if args.share {
        let share_url = args.share_url.as_deref();
        out.push_str(&format!("\n{}\n", share_message(&outcome.result, share_url)));
        out.push_str(&format!(
            "{}\n",
            whatsapp_link(&outcome.result, share_url).context("Failed to build share link")?
        ));
    }

    Ok(out)
}

/// Build every configured store and save to each
///
/// **Private** - a store that can't even be built is treated like a failed save
fn save_everywhere(args: &CalculateArgs, result: &FlamesResult) -> usize {
    let mut stores: Vec<Box<dyn CalculationStore>> = Vec::new();

    match RestStore::from_config(&args.backend) {
        Ok(Some(store)) => stores.push(Box::new(store)),
        Ok(None) => debug!("No backend URL configured"),
        Err(e) => warn!("Failed to save calculation: {}", e),
    }

    if let Some(path) = &args.log_file {
        stores.push(Box::new(JsonLinesStore::new(path)));
    }

    stores
        .iter()
        .map(|store| persist_quietly(&**store, result))
        .filter(|saved| *saved)
        .count()
}

/// Validate calculate arguments
///
/// **Public** - can be called before execute_calculate for early validation
///
/// Both names must contain something other than whitespace. The
/// calculation itself accepts any text; this mirrors the input form.
pub fn validate_args(args: &CalculateArgs) -> Result<()> {
    if args.name1.trim().is_empty() {
        anyhow::bail!("First name cannot be empty");
    }

    if args.name2.trim().is_empty() {
        anyhow::bail!("Second name cannot be empty");
    }

    if args.print_json && args.share {
        anyhow::bail!("--share cannot be combined with --json");
    }

    Ok(())
}
