//! Sequential fallback execution of validator invocations.
//!
//! Runs the planned attempts strictly in order through a [`Runner`]. The
//! first attempt the runner completes wins and later attempts are never
//! tried. A missing executable moves on to the next attempt; any other
//! failure propagates immediately. When the whole plan fails with missing
//! executables, the typed exhaustion error carries the full plan.
//!
//! There is no timeout or cancellation at this layer: a hung external
//! process hangs the calling command.

use crate::config::Config;
use crate::context;
use crate::error::{OspecError, Result};
use crate::validator::args::tokenize_args;
use crate::validator::plan::{CommandAttempt, build_validate_plan};
use crate::validator::runner::{RunOutcome, Runner};
use std::io;

/// Outcome of a validate run, tagged with the invocation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateResult {
    /// Captured process output.
    pub outcome: RunOutcome,
    /// The plan entry that actually ran. Always one of the planned attempts,
    /// never a synthesized value.
    pub attempted: CommandAttempt,
}

/// Run `openspec validate` with fallback across the planned invocations.
///
/// The working directory comes from the process-wide override when set,
/// otherwise the OS current directory. Raw argument text is tokenized and
/// the strict flag enforced before the plan is built.
pub fn run_validate(raw_args: &str, config: &Config, runner: &dyn Runner) -> Result<ValidateResult> {
    let cwd = context::resolve_cwd()?;
    let plan = build_validate_plan(config, tokenize_args(raw_args));

    for attempt in &plan {
        match runner.run(attempt, &cwd) {
            Ok(outcome) => {
                return Ok(ValidateResult {
                    outcome,
                    attempted: attempt.clone(),
                });
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
            Err(err) => return Err(OspecError::Execution(err)),
        }
    }

    Err(OspecError::MissingBinary { attempts: plan })
}
