//! Implementation of the `ospec validate` command.
//!
//! Forwards free-form trailing arguments to the resilient executor and
//! renders the outcome: a pass/fail header keyed off the exit code, the
//! exact command line that ran, then stdout and stderr blocks. A nonzero
//! validator exit maps to exit code 2; a missing binary propagates as the
//! typed exhaustion error whose message enumerates every attempt.

use crate::cli::ValidateArgs;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::context;
use crate::error::{OspecError, Result};
use crate::validator::{SystemRunner, ValidateResult, run_validate};

/// Execute the `ospec validate` command.
///
/// # Exit Codes
///
/// - 0: openspec ran and passed
/// - 2: openspec ran and reported problems
/// - 3: no runnable binary, or the process failed to run
pub fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let cwd = context::resolve_cwd()?;
    let config = Config::load(cwd.join(CONFIG_FILE_NAME)).unwrap_or_default();
    let raw_args = args.args.join(" ");

    let result = run_validate(&raw_args, &config, &SystemRunner)?;
    println!("{}", render_report(&result));

    if result.outcome.exit_code == 0 {
        Ok(())
    } else {
        Err(OspecError::ValidationError(format!(
            "openspec exited with code {}",
            result.outcome.exit_code
        )))
    }
}

/// Render the validation report for a completed run.
fn render_report(result: &ValidateResult) -> String {
    let header = if result.outcome.exit_code == 0 {
        "✅ OpenSpec validation passed".to_string()
    } else {
        format!(
            "❌ OpenSpec validation failed (exit code {})",
            result.outcome.exit_code
        )
    };

    let mut lines = vec![header, format!("Command: {}", result.attempted)];

    if !result.outcome.stdout.is_empty() {
        lines.push(String::new());
        lines.push(result.outcome.stdout.clone());
    }

    if !result.outcome.stderr.is_empty() {
        lines.push(String::new());
        lines.push("stderr:".to_string());
        lines.push(result.outcome.stderr.clone());
    }

    lines.join("\n")
}
