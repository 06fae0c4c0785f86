//! Exit code constants for the ospec CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown template)
//! - 2: Validation failure (openspec reported problems)
//! - 3: Execution failure (missing binary, process error)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an identifier outside the known set.
pub const USER_ERROR: i32 = 1;

/// Validation failure: openspec ran and exited nonzero.
pub const VALIDATION_FAILURE: i32 = 2;

/// Execution failure: no runnable openspec binary, or the process could not
/// be spawned or crashed.
pub const EXEC_FAILURE: i32 = 3;
