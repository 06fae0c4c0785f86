//! Fallback plan construction for validator invocations.
//!
//! A plan is an ordered list of [`CommandAttempt`] values tried in sequence
//! until one of them runs. Arguments are argv-style tokens, never shell
//! strings, so nothing here is subject to shell interpretation.

use crate::config::Config;
use std::fmt;

/// Logical operation forwarded to the external tool.
const VALIDATE_OPERATION: &str = "validate";

/// Flag every validate invocation must carry exactly once.
pub const STRICT_FLAG: &str = "--strict";

/// One candidate invocation in a fallback plan.
///
/// Immutable once constructed; equality is structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandAttempt {
    /// Executable name (resolved through PATH by the runner).
    pub command: String,
    /// Ordered argv tokens passed to the executable.
    pub args: Vec<String>,
}

impl CommandAttempt {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    /// Render the attempt as a single command line, quoting tokens only
    /// where needed.
    pub fn command_line(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(self.command.as_str());
        parts.extend(self.args.iter().map(String::as_str));
        shell_words::join(parts)
    }
}

impl fmt::Display for CommandAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command_line())
    }
}

/// Ensure the strict flag appears exactly once in the argument list.
///
/// Both the bare flag and the `--strict=<value>` form count as present.
fn ensure_strict_flag(mut args: Vec<String>) -> Vec<String> {
    let assigned = format!("{}=", STRICT_FLAG);
    let has_strict = args
        .iter()
        .any(|arg| arg == STRICT_FLAG || arg.starts_with(&assigned));

    if !has_strict {
        args.push(STRICT_FLAG.to_string());
    }
    args
}

/// Build the ordered fallback plan for a validate run.
///
/// The order is fixed: the direct binary first (fastest, most explicit),
/// then the package-manager-mediated form for projects that install the
/// tool as a local dependency. The plan is never empty.
pub fn build_validate_plan(config: &Config, extra_args: Vec<String>) -> Vec<CommandAttempt> {
    let mut command_args = vec![VALIDATE_OPERATION.to_string()];
    command_args.extend(ensure_strict_flag(extra_args));

    let mut fallback_args = vec!["exec".to_string(), config.binary.clone()];
    fallback_args.extend(command_args.iter().cloned());

    vec![
        CommandAttempt::new(&config.binary, command_args),
        CommandAttempt::new(&config.package_manager, fallback_args),
    ]
}
