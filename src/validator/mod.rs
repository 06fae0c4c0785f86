//! Resilient OpenSpec validator execution subsystem.
//!
//! This module provides the fallback execution path for the external
//! `openspec` tool:
//!
//! - **Args**: Shell-like tokenization of free-form argument text
//! - **Plan**: Ordered fallback plan of candidate invocations
//! - **Runner**: Injectable process runner with a system default
//! - **Executor**: Sequential fallback execution with a typed exhaustion error
//!
//! # Design Philosophy
//!
//! The external binary may be installed globally or only as a local project
//! dependency, so a single spawn is not enough. Candidate invocations are
//! tried strictly in order; a missing executable moves on to the next
//! candidate, while any other failure is fatal. Process execution sits
//! behind the [`Runner`] trait so tests never spawn real processes.

mod args;
mod executor;
mod plan;
mod runner;

pub use args::tokenize_args;
pub use executor::{ValidateResult, run_validate};
pub use plan::{CommandAttempt, STRICT_FLAG, build_validate_plan};
pub use runner::{RunOutcome, Runner, SystemRunner};
