//! Command implementations for ospec.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod prompt;
mod validate;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Validate(args) => validate::cmd_validate(args),
        Command::Prompt(args) => prompt::cmd_prompt(args),
        Command::Templates => prompt::cmd_templates(),
    }
}
