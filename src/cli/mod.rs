//! CLI argument parsing for ospec.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// ospec: resilient OpenSpec command bridge for agentic CLI assistants.
///
/// Bridges an interactive assistant to the external `openspec` tool:
/// - `validate` runs `openspec validate --strict` with binary fallback
/// - `prompt` assembles canonical workflow instructions into a user message
/// - `templates` lists the canonical workflow templates
#[derive(Parser, Debug)]
#[command(name = "ospec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Run as if started in this directory instead of the current one.
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for ospec.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run `openspec validate --strict` from the current workspace.
    ///
    /// Tries the `openspec` binary directly, then falls back to
    /// `pnpm exec openspec` for projects that install it as a local
    /// dependency.
    Validate(ValidateArgs),

    /// Assemble the canonical prompt for a workflow template.
    ///
    /// Prints the assembled user message; `--json` emits the structured
    /// message in the host wire shape.
    Prompt(PromptArgs),

    /// List the canonical workflow templates.
    Templates,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Extra arguments forwarded to `openspec validate`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `prompt` command.
#[derive(Parser, Debug)]
pub struct PromptArgs {
    /// Template identifier (e.g. `proposal`; see `ospec templates`).
    pub template: String,

    /// Emit the message as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// Free-form context appended to the canonical instructions.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
