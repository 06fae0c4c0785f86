//! Error types for the ospec CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. Only the outermost command layer prints errors; everything
//! below propagates them with `?`.

use crate::exit_codes;
use crate::validator::CommandAttempt;
use thiserror::Error;

/// Main error type for ospec operations.
///
/// Each variant maps to a specific exit code. `MissingBinary` is the only
/// variant callers are expected to special-case: it carries the full list of
/// invocations that were tried so the failure can be reported precisely.
#[derive(Error, Debug)]
pub enum OspecError {
    /// User provided invalid arguments or the environment is in an invalid
    /// state.
    #[error("{0}")]
    UserError(String),

    /// Template identifier outside the known set.
    #[error("unknown template id '{0}'")]
    UnknownTemplate(String),

    /// The validator ran and reported problems.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Every planned invocation failed because the executable was missing.
    #[error("{}", missing_binary_message(.attempts))]
    MissingBinary { attempts: Vec<CommandAttempt> },

    /// The process could not be spawned or failed for a reason other than a
    /// missing executable. Preserves the underlying error for callers.
    #[error("OpenSpec execution failed: {0}")]
    Execution(#[from] std::io::Error),
}

impl OspecError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            OspecError::UserError(_) => exit_codes::USER_ERROR,
            OspecError::UnknownTemplate(_) => exit_codes::USER_ERROR,
            OspecError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            OspecError::MissingBinary { .. } => exit_codes::EXEC_FAILURE,
            OspecError::Execution(_) => exit_codes::EXEC_FAILURE,
        }
    }
}

/// Remediation text shown when every planned invocation failed with a
/// missing executable. Enumerates exactly what was tried.
fn missing_binary_message(attempts: &[CommandAttempt]) -> String {
    let tried = attempts
        .iter()
        .map(|attempt| format!("- {}", attempt))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "未找到可执行的 `openspec` CLI。\n\
         尝试的命令：\n\
         {}\n\n\
         请全局安装 `@fission-ai/openspec`，或在项目根目录运行 `pnpm exec openspec ...`。",
        tried
    )
}

/// Result type alias for ospec operations.
pub type Result<T> = std::result::Result<T, OspecError>;
